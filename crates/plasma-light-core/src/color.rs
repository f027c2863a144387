//! Colour types used by the animation routines.

use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Floating point HSV colour.
///
/// `hue` is a fraction of the colour wheel and wraps, so `1.25` is the same
/// hue as `0.25`. `saturation` and `value` are clamped to `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32,
}

impl Hsv {
    pub const fn new(hue: f32, saturation: f32, value: f32) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Build a colour from a hue in degrees.
    pub fn from_degrees(degrees: f32, saturation: f32, value: f32) -> Self {
        Self::new(degrees / 360.0, saturation, value)
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self)
    }
}

/// Reduce a hue to `0.0..1.0`.
pub fn wrap_hue(hue: f32) -> f32 {
    let wrapped = hue - libm::floorf(hue);
    // floorf rounding can land exactly on 1.0 for tiny negative inputs
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Convert a floating point HSV colour to 8-bit RGB.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
pub fn hsv_to_rgb(color: Hsv) -> Rgb {
    let s = color.saturation.clamp(0.0, 1.0);
    let v = color.value.clamp(0.0, 1.0);
    let h = wrap_hue(color.hue) * 6.0;

    let sector = libm::floorf(h);
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    let to_u8 = |x: f32| libm::roundf(x * 255.0).clamp(0.0, 255.0) as u8;
    Rgb {
        r: to_u8(r),
        g: to_u8(g),
        b: to_u8(b),
    }
}
