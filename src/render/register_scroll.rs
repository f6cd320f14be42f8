//! Register-scroll renderer.
//!
//! Plays a fixed byte message one byte per call, like reading a hardware
//! register on a row of indicator lamps. The low `width` pixels show the
//! bits of the current byte, LSB first. An optional marker pixel walks
//! along with the message position so the viewer can tell the bytes apart.

use super::Render;
use crate::color::Rgb;
use crate::pixel::PixelBuffer;

/// Largest register width the low pixels can show.
const MAX_REGISTER_WIDTH: usize = 8;

#[derive(Debug, Clone)]
pub struct RegisterScrollRenderer {
    message: &'static [u8],
    width: usize,
    marker_offset: Option<usize>,
    color: Rgb,
    cursor: usize,
}

impl RegisterScrollRenderer {
    /// Create a scroll renderer over `message`.
    ///
    /// `width` is clamped to 8 bits. `marker_offset` is the base pixel of
    /// the position marker; pass `None` to disable it.
    pub const fn new(
        message: &'static [u8],
        width: usize,
        marker_offset: Option<usize>,
        color: Rgb,
    ) -> Self {
        let width = if width > MAX_REGISTER_WIDTH {
            MAX_REGISTER_WIDTH
        } else {
            width
        };
        Self {
            message,
            width,
            marker_offset,
            color,
            cursor: 0,
        }
    }

    /// Index of the message byte the next call will show.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }
}

impl<const N: usize> Render<N> for RegisterScrollRenderer {
    fn render(&mut self, _value: i32, frame: &mut PixelBuffer<N>) {
        if self.message.is_empty() {
            return;
        }

        frame.clear();

        let byte = self.message[self.cursor];
        for bit in 0..self.width {
            if byte & (1 << bit) != 0 {
                frame.set_pixel(bit, self.color);
            }
        }

        if let Some(offset) = self.marker_offset {
            frame.set_pixel(offset + self.cursor, self.color);
        }

        self.cursor = (self.cursor + 1) % self.message.len();
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }
}
