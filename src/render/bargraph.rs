//! Bargraph renderer.
//!
//! Maps an integer value within a configured `[min, max]` range onto the
//! number of lit pixels. Every pixel carries its own tuned on/off color
//! pair, so the bar forms a gradient (green at the bottom, red near the
//! top) instead of one flat color, and unlit pixels stay dimly visible.

use super::{ConfigError, Render};
use crate::color::{self, Rgb};
use crate::pixel::PixelBuffer;

/// Per-pixel lit/unlit color pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub on: Rgb,
    pub off: Rgb,
}

/// Build a graduated palette from three gradient stops.
///
/// The off colors are the on colors dimmed to a background glow.
pub fn gradient_pairs<const N: usize>(c1: Rgb, c2: Rgb, c3: Rgb) -> [ColorPair; N] {
    const DIM_FACTOR: u8 = 24;

    let mut on = [Rgb::new(0, 0, 0); N];
    color::fill_gradient_three(&mut on, c1, c2, c3);

    let mut pairs = [ColorPair {
        on: Rgb::new(0, 0, 0),
        off: Rgb::new(0, 0, 0),
    }; N];
    for (pair, on) in pairs.iter_mut().zip(on) {
        *pair = ColorPair {
            on,
            off: color::scale(on, DIM_FACTOR),
        };
    }
    pairs
}

/// Bargraph renderer with a validated range and per-pixel palette.
#[derive(Debug, Clone)]
pub struct BargraphRenderer<const N: usize> {
    min: i32,
    max: i32,
    step: i32,
    palette: [ColorPair; N],
}

impl<const N: usize> BargraphRenderer<N> {
    /// Create a bargraph over `[min, max]`.
    ///
    /// The range is validated here, once: `max` must exceed `min` and the
    /// integer per-pixel step `(max - min) / N` must be non-zero. Rendering
    /// never re-checks and can never divide by zero.
    pub fn new(min: i32, max: i32, palette: [ColorPair; N]) -> Result<Self, ConfigError> {
        if N == 0 || max <= min {
            return Err(ConfigError::DegenerateRange);
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let step = (max - min) / N as i32;
        if step <= 0 {
            return Err(ConfigError::DegenerateRange);
        }
        Ok(Self {
            min,
            max,
            step,
            palette,
        })
    }

    pub const fn min(&self) -> i32 {
        self.min
    }

    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Number of lit pixels for `value`, in `[0, N]`.
    ///
    /// Monotonic non-decreasing in `value`: everything at or below `min`
    /// gives 0, everything at or above `max` gives `N`.
    #[allow(clippy::cast_sign_loss)]
    pub fn level_for(&self, value: i32) -> usize {
        let value = value.max(0);
        let segment = (value - self.min).clamp(0, self.max - self.min);
        ((segment / self.step) as usize).min(N)
    }
}

impl<const N: usize> Render<N> for BargraphRenderer<N> {
    fn render(&mut self, value: i32, frame: &mut PixelBuffer<N>) {
        let top = self.level_for(value);
        for (i, pair) in self.palette.iter().enumerate() {
            let color = if i < top { pair.on } else { pair.off };
            frame.set_pixel(i, color);
        }
    }
}
