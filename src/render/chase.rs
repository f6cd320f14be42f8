//! Chase ("pong") renderer.
//!
//! One lit pixel runs from one end of the strip to the other and bounces
//! back, one step per call.

use super::Render;
use crate::color::Rgb;
use crate::pixel::PixelBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Reverse,
}

/// Chase renderer state.
///
/// The position starts one step before the strip so the first call lights
/// pixel 0. After that the position stays within the strip and the end
/// pixels are not repeated, so a full oscillation takes `2 * (N - 1)` calls.
#[derive(Debug, Clone)]
pub struct ChaseRenderer {
    position: i32,
    direction: Direction,
    color: Rgb,
}

impl ChaseRenderer {
    pub const fn new(color: Rgb) -> Self {
        Self {
            position: -1,
            direction: Direction::Forward,
            color,
        }
    }

    /// Currently lit pixel, or -1 before the first call.
    pub const fn position(&self) -> i32 {
        self.position
    }

    fn step(&mut self, len: i32) {
        match self.direction {
            Direction::Forward => {
                self.position += 1;
                if self.position >= len - 1 {
                    self.direction = Direction::Reverse;
                    self.position = self.position.min(len - 1);
                }
            }
            Direction::Reverse => {
                self.position -= 1;
                if self.position <= 0 {
                    self.direction = Direction::Forward;
                    self.position = self.position.max(0);
                }
            }
        }
    }
}

impl<const N: usize> Render<N> for ChaseRenderer {
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    fn render(&mut self, _value: i32, frame: &mut PixelBuffer<N>) {
        if N == 0 {
            return;
        }

        self.step(N as i32);

        frame.clear();
        frame.set_pixel(self.position as usize, self.color);
    }

    fn reset(&mut self) {
        self.position = -1;
        self.direction = Direction::Forward;
    }
}
