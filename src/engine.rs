//! Display engine - mode dispatch and frame flushing.

use crate::color::Rgb;
use crate::mode::DisplayMode;
use crate::pixel::PixelBuffer;
use crate::render::{
    BargraphRenderer, ChaseRenderer, ColorPair, ConfigError, RegisterScrollRenderer, Render,
};
use crate::waveform::{WaveformBuffer, WaveformConfig, WaveformCursor};
use crate::{StripDriver, log_warn};

/// Configuration for the display engine.
#[derive(Clone)]
pub struct DisplayEngineConfig<const N: usize> {
    /// Foreground color for the chase and register-scroll modes.
    pub foreground: Rgb,
    /// Bargraph value range.
    pub range_min: i32,
    pub range_max: i32,
    /// Per-pixel bargraph colors.
    pub palette: [ColorPair; N],
    /// Register-scroll message bytes.
    pub message: &'static [u8],
    /// Number of low pixels that show message bits (at most 8).
    pub message_width: usize,
    /// Base pixel of the message position marker, if any.
    pub marker_offset: Option<usize>,
    /// Waveform hysteresis and sample span.
    pub waveform: WaveformConfig,
}

/// Display engine - routes a `(mode, value)` pair to the right renderer.
///
/// Owns the frame and all per-mode renderer state, so state survives across
/// calls no matter which mode each call selects. Every update either
/// renders a complete frame and flushes it once, or leaves the frame and
/// the strip untouched; a flush never observes a half-rendered frame.
pub struct DisplayEngine<'a, D: StripDriver, const N: usize> {
    driver: D,
    frame: PixelBuffer<N>,

    chase: ChaseRenderer,
    scroll: RegisterScrollRenderer,
    bargraph: BargraphRenderer<N>,
    cursor: WaveformCursor,
    waveform: &'a WaveformBuffer,
}

impl<'a, D: StripDriver, const N: usize> DisplayEngine<'a, D, N> {
    /// Create a display engine.
    ///
    /// Range and span validation happens here; a degenerate bargraph range
    /// is a configuration error, not a render-time fault.
    pub fn new(
        driver: D,
        waveform: &'a WaveformBuffer,
        config: &DisplayEngineConfig<N>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            driver,
            frame: PixelBuffer::new(),
            chase: ChaseRenderer::new(config.foreground),
            scroll: RegisterScrollRenderer::new(
                config.message,
                config.message_width,
                config.marker_offset,
                config.foreground,
            ),
            bargraph: BargraphRenderer::new(config.range_min, config.range_max, config.palette)?,
            cursor: WaveformCursor::new(config.waveform)?,
            waveform,
        })
    }

    /// Run one display cycle for `mode`.
    ///
    /// `value` feeds the bargraph; the other modes ignore it. Unimplemented
    /// modes log a warning and leave the frame alone. In `FastWaveform`
    /// mode the cycle may be skipped entirely when the waveform has not
    /// moved a visible amount.
    pub fn update(&mut self, mode: DisplayMode, value: i32) {
        match mode {
            DisplayMode::Chase => {
                self.chase.render(value, &mut self.frame);
                self.flush();
            }
            DisplayMode::RegisterScroll => {
                self.scroll.render(value, &mut self.frame);
                self.flush();
            }
            DisplayMode::Bargraph => {
                self.bargraph.render(value, &mut self.frame);
                self.flush();
            }
            DisplayMode::FastWaveform => {
                if let Some(mapped) = self.cursor.poll(self.waveform, &self.bargraph) {
                    self.bargraph.render(mapped, &mut self.frame);
                    self.flush();
                }
            }
            DisplayMode::Banded | DisplayMode::Flashlight => {
                log_warn!("display mode {} not yet implemented", mode.as_str());
            }
        }
    }

    /// Dispatch on a raw mode byte.
    ///
    /// Unknown values log a warning and change nothing.
    pub fn update_raw(&mut self, mode: u8, value: i32) {
        match DisplayMode::from_raw(mode) {
            Some(mode) => self.update(mode, value),
            None => log_warn!("invalid display mode {}", mode),
        }
    }

    fn flush(&mut self) {
        self.driver.write(self.frame.as_slice());
    }

    /// Current frame contents, for observation.
    pub fn frame(&self) -> &PixelBuffer<N> {
        &self.frame
    }

    /// Forget waveform history so the next `FastWaveform` cycle redraws.
    pub fn reset_waveform_cursor(&mut self) {
        self.cursor.reset();
    }
}
