//! Waveform sample clock shared between a hardware timer and the display
//! task.
//!
//! A periodic timer interrupt advances an index into a fixed sample table;
//! the display task polls the index at its own cadence and redraws the
//! bargraph only when the mapped pixel position moved far enough. The index
//! is the only state the two contexts share and it is a single-writer /
//! single-reader atomic, so the interrupt never blocks.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::render::{BargraphRenderer, ConfigError};
use crate::scale::map;

/// Length of the built-in demo sample table.
pub const DEMO_TABLE_LEN: usize = 543;

/// Built-in demo table: one triangle sweep from 0 to 100 and back.
pub static DEMO_TABLE: [i32; DEMO_TABLE_LEN] = demo_triangle();

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn demo_triangle() -> [i32; DEMO_TABLE_LEN] {
    let mut table = [0i32; DEMO_TABLE_LEN];
    let half = DEMO_TABLE_LEN / 2;
    let mut i = 0;
    while i < DEMO_TABLE_LEN {
        let distance = if i <= half { i } else { DEMO_TABLE_LEN - 1 - i };
        table[i] = (distance * 100 / half) as i32;
        i += 1;
    }
    table
}

/// Shared cursor into a read-only sample table.
///
/// `advance` is the producer side and is safe to call from a timer
/// interrupt: a load, an add and a store, nothing that can block. The
/// display task is the only reader. Construct as a `static` so both
/// contexts can reach it.
#[derive(Debug)]
pub struct WaveformBuffer {
    samples: &'static [i32],
    index: AtomicUsize,
}

impl WaveformBuffer {
    /// Create a buffer over a non-empty sample table.
    ///
    /// Panics on an empty table. Buffers are built over fixed tables in
    /// `static` initializers, where this check runs at compile time; there
    /// is no runtime configuration path for the table.
    pub const fn new(samples: &'static [i32]) -> Self {
        assert!(!samples.is_empty(), "sample table must not be empty");
        Self {
            samples,
            index: AtomicUsize::new(0),
        }
    }

    /// Advance to the next sample, wrapping at the end of the table.
    ///
    /// Producer side, called from the timer interrupt. Single writer: no
    /// other context ever stores the index while the timer runs.
    pub fn advance(&self) {
        let next = (self.index.load(Ordering::Relaxed) + 1) % self.samples.len();
        self.index.store(next, Ordering::Release);
    }

    /// Rewind to the start of the table.
    ///
    /// Call after stopping the timer; restarting then replays the table
    /// from the beginning.
    pub fn reset(&self) {
        self.index.store(0, Ordering::Release);
    }

    /// Current index, always in `[0, len - 1]`.
    pub fn position(&self) -> usize {
        self.index.load(Ordering::Acquire)
    }

    /// Sample under the current index.
    pub fn sample(&self) -> i32 {
        self.samples[self.position()]
    }

    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Consumer-side configuration for [`WaveformCursor`].
#[derive(Debug, Clone, Copy)]
pub struct WaveformConfig {
    /// Minimum change in lit-pixel count that forces a redraw.
    pub hold_delta: i32,
    /// Value span of the sample table, used to map samples into the
    /// bargraph range.
    pub src_min: i32,
    pub src_max: i32,
}

/// Display-task view of the waveform: hysteresis gate plus sample mapping.
///
/// Owns the last-rendered pixel position; the interrupt side never touches
/// it.
#[derive(Debug, Clone)]
pub struct WaveformCursor {
    hold_delta: i32,
    src_min: i32,
    src_max: i32,
    last_position: Option<i32>,
}

impl WaveformCursor {
    pub fn new(config: WaveformConfig) -> Result<Self, ConfigError> {
        if config.src_max == config.src_min {
            return Err(ConfigError::DegenerateSpan);
        }
        Ok(Self {
            hold_delta: config.hold_delta.max(0),
            src_min: config.src_min,
            src_max: config.src_max,
            last_position: None,
        })
    }

    /// Poll the shared buffer and decide whether this cycle redraws.
    ///
    /// Returns the mapped bargraph value when the pixel position moved by
    /// at least `hold_delta` since the last render (and on the very first
    /// poll); `None` means the display could not show the change anyway and
    /// the cycle is skipped.
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn poll<const N: usize>(
        &mut self,
        buffer: &WaveformBuffer,
        bargraph: &BargraphRenderer<N>,
    ) -> Option<i32> {
        let sample = buffer.sample();
        let mapped = map(
            sample,
            self.src_min,
            self.src_max,
            bargraph.min(),
            bargraph.max(),
        );
        let position = bargraph.level_for(mapped) as i32;

        if let Some(last) = self.last_position {
            if (position - last).abs() < self.hold_delta {
                return None;
            }
        }

        self.last_position = Some(position);
        Some(mapped)
    }

    /// Forget the last rendered position; the next poll always redraws.
    pub fn reset(&mut self) {
        self.last_position = None;
    }

    /// Pixel position of the last render, if any.
    pub const fn last_position(&self) -> Option<i32> {
        self.last_position
    }
}
