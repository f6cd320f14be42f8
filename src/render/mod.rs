//! Mode renderers.
//!
//! Each renderer is a small state machine that maps a mode value into pixel
//! colors. Renderers only mutate the in-memory frame; flushing to hardware
//! is the engine's job and always happens after the render completes.

mod bargraph;
mod chase;
mod register_scroll;

pub use bargraph::{BargraphRenderer, ColorPair, gradient_pairs};
pub use chase::ChaseRenderer;
pub use register_scroll::RegisterScrollRenderer;

use crate::pixel::PixelBuffer;

/// Error returned when a renderer is configured with unusable parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Bargraph bounds give a zero-height segment per pixel.
    DegenerateRange,
    /// A waveform source span with no width.
    DegenerateSpan,
}

pub trait Render<const N: usize> {
    /// Render a single frame from a mode value.
    fn render(&mut self, value: i32, frame: &mut PixelBuffer<N>);

    /// Reset renderer state.
    fn reset(&mut self) {}
}
