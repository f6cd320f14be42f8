//! Color type and small RGB helpers.
//!
//! The strip works in plain 8-bit RGB. Gradient filling is linear
//! interpolation in RGB space, which is enough for the graduated bargraph
//! palettes this crate renders.

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Scale a color by `factor / 255` per channel.
pub fn scale(color: Rgb, factor: u8) -> Rgb {
    Rgb::new(
        scale8(color.r, factor),
        scale8(color.g, factor),
        scale8(color.b, factor),
    )
}

/// Scale one 8-bit channel by `factor / 255`.
#[allow(clippy::cast_possible_truncation)]
pub fn scale8(value: u8, factor: u8) -> u8 {
    ((u16::from(value) * u16::from(factor)) >> 8) as u8
}

/// Linear blend between two colors; `amount` = 0 gives `from`, 255 gives `to`.
pub fn blend(from: Rgb, to: Rgb, amount: u8) -> Rgb {
    Rgb::new(
        blend8(from.r, to.r, amount),
        blend8(from.g, to.g, amount),
        blend8(from.b, to.b, amount),
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn blend8(from: u8, to: u8, amount: u8) -> u8 {
    let from = i32::from(from);
    let to = i32::from(to);
    (from + (to - from) * i32::from(amount) / 255) as u8
}

/// Fill a slice with a linear gradient from `start` to `end`.
#[allow(clippy::cast_possible_truncation)]
pub fn fill_gradient(leds: &mut [Rgb], start: Rgb, end: Rgb) {
    let len = leds.len();
    if len == 0 {
        return;
    }
    if len == 1 {
        leds[0] = start;
        return;
    }
    for (i, led) in leds.iter_mut().enumerate() {
        let amount = (i * 255 / (len - 1)) as u8;
        *led = blend(start, end, amount);
    }
}

/// Fill a slice with a three-point gradient (`c1` at the bottom, `c2` in the
/// middle, `c3` at the top).
pub fn fill_gradient_three(leds: &mut [Rgb], c1: Rgb, c2: Rgb, c3: Rgb) {
    let half = leds.len() / 2;
    let (first, second) = leds.split_at_mut(half);
    fill_gradient(first, c1, c2);
    fill_gradient(second, c2, c3);
}
