//! In-memory frame for a fixed-length strip.

use crate::color::Rgb;

const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Fixed-length pixel frame, the in-memory image of the strip.
///
/// The length is a compile-time constant and never changes at runtime.
/// Renderers mutate the buffer; the display engine hands the finished frame
/// to the [`StripDriver`](crate::StripDriver) in one flush.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const N: usize> {
    pixels: [Rgb; N],
}

impl<const N: usize> PixelBuffer<N> {
    /// Create a new all-off frame.
    pub const fn new() -> Self {
        Self { pixels: [BLACK; N] }
    }

    /// Number of pixels in the frame.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Set one pixel. Out-of-range indices are ignored.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(index) {
            *pixel = color;
        }
    }

    /// Get one pixel, if in range.
    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.pixels.get(index).copied()
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.pixels = [BLACK; N];
    }

    /// Borrow the frame for a flush.
    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels
    }
}

impl<const N: usize> Default for PixelBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
