//! Display pacing utilities.
//!
//! Paces display updates without async/await or platform-specific timers.
//! The caller owns the task loop and is responsible for sleeping between
//! cycles.

use embassy_time::{Duration, Instant};

use crate::engine::DisplayEngine;
use crate::mode::DisplayMode;
use crate::StripDriver;

/// Default interval between display updates.
pub const DEFAULT_UPDATE_INTERVAL: Duration = Duration::from_millis(50);

/// Result of one scheduler tick.
#[derive(Debug, Clone, Copy)]
pub struct TickResult {
    /// The deadline for the next update.
    pub next_deadline: Instant,
    /// How long to wait until the next update (zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Paces calls into the display engine with drift correction.
///
/// If the task stalls for more than two intervals the backlog is dropped
/// instead of replayed, so the strip never bursts through missed cycles.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = DisplayScheduler::new(engine, DisplayMode::Bargraph);
///
/// loop {
///     let result = scheduler.tick(Instant::now(), sensor_value());
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct DisplayScheduler<'a, D: StripDriver, const N: usize> {
    engine: DisplayEngine<'a, D, N>,
    mode: DisplayMode,
    next_update: Instant,
    interval: Duration,
}

impl<'a, D: StripDriver, const N: usize> DisplayScheduler<'a, D, N> {
    /// Create a scheduler using `DEFAULT_UPDATE_INTERVAL`.
    pub fn new(engine: DisplayEngine<'a, D, N>, mode: DisplayMode) -> Self {
        Self::with_interval(engine, mode, DEFAULT_UPDATE_INTERVAL)
    }

    /// Create a scheduler with a custom update interval.
    pub fn with_interval(
        engine: DisplayEngine<'a, D, N>,
        mode: DisplayMode,
        interval: Duration,
    ) -> Self {
        Self {
            engine,
            mode,
            next_update: Instant::from_millis(0),
            interval,
        }
    }

    /// Run one display cycle and return timing for the next one.
    pub fn tick(&mut self, now: Instant, value: i32) -> TickResult {
        // Drift correction: after a long stall, restart from now instead of
        // replaying the backlog.
        let max_drift_ms = self.interval.as_millis() * 2;
        if now.as_millis() > self.next_update.as_millis() + max_drift_ms {
            self.next_update = now;
        }

        self.engine.update(self.mode, value);

        self.next_update += self.interval;

        let sleep_duration = if self.next_update.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_update.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        TickResult {
            next_deadline: self.next_update,
            sleep_duration,
        }
    }

    /// Get a reference to the engine.
    pub fn engine(&self) -> &DisplayEngine<'a, D, N> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut DisplayEngine<'a, D, N> {
        &mut self.engine
    }
}
