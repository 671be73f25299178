//! RGBA colors and interpolation.

/// A color in RGBA format (0-255 per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Build an opaque color from a `0xRRGGBB` value.
    pub const fn from_hex(rgb: u32) -> Self {
        Self::rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Return the same color with a different alpha value.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Return the same color with alpha set from a `0.0..=1.0` opacity.
    ///
    /// Opacity is clamped; the alpha byte is truncated, not rounded.
    pub fn with_opacity(self, opacity: f32) -> Self {
        self.with_alpha((255.0 * opacity.clamp(0.0, 1.0)) as u8)
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
}

/// Linearly interpolate between two scalars.
///
/// `t` is not clamped. Both endpoints are exact: `t == 0.0` yields `a` and
/// `t == 1.0` yields `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}
