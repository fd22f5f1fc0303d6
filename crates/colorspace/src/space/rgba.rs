//! sRGB with alpha, the hub every other space converts through.

use std::fmt;

use super::{Color, Hsla, Hwb, Xyz};
use crate::Angle;

/// sRGB to XYZ (D65) matrix, applied to linearized channels.
pub const SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];

/// Luma weights used for grayscale and light/dark classification.
pub const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// An sRGB color.
///
/// Channels are on the `0-255` scale but kept as `f64` so interpolated or
/// converted values are not rounded early. Construction does not clamp;
/// conversions clamp their inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: f64,
    /// Green component (0-255).
    pub g: f64,
    /// Blue component (0-255).
    pub b: f64,
    /// Alpha component (0.0 = transparent, 1.0 = opaque).
    pub alpha: f64,
}

/// Fields to replace in [`Rgba::update`]. `None` keeps the current value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RgbaChanges {
    pub r: Option<f64>,
    pub g: Option<f64>,
    pub b: Option<f64>,
    pub alpha: Option<f64>,
}

impl Default for Rgba {
    fn default() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, alpha: f64) -> Self {
        Self { r, g, b, alpha }
    }

    /// An opaque color.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Fully transparent black, used as the "no color" sentinel.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Returns a copy of this color with the specified alpha value.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self { alpha, ..*self }
    }

    /// Returns a copy with every `Some` field of `changes` applied.
    ///
    /// ```
    /// use colorspace::{Rgba, RgbaChanges};
    ///
    /// let red = Rgba::rgb(255.0, 10.0, 10.0);
    /// let pure = red.update(RgbaChanges { g: Some(0.0), b: Some(0.0), ..Default::default() });
    /// assert_eq!(pure, Rgba::rgb(255.0, 0.0, 0.0));
    /// ```
    pub fn update(&self, changes: RgbaChanges) -> Self {
        Self {
            r: changes.r.unwrap_or(self.r),
            g: changes.g.unwrap_or(self.g),
            b: changes.b.unwrap_or(self.b),
            alpha: changes.alpha.unwrap_or(self.alpha),
        }
    }

    /// Channels clamped to `0-255` and scaled to `[0, 1]`.
    fn unit_channels(&self) -> (f64, f64, f64) {
        let scale = |v: f64| v.clamp(0.0, 255.0) / 255.0;
        (scale(self.r), scale(self.g), scale(self.b))
    }

    /// Hue in degrees, `[0, 360)`. Achromatic colors get 0.
    fn hue(&self) -> f64 {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = max - min;

        if diff == 0.0 {
            return 0.0;
        }

        let h = if max == r {
            (g - b) / diff + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / diff + 2.0
        } else {
            (r - g) / diff + 4.0
        };
        h * 60.0
    }

    /// Weighted gray value with the [`LUMA_WEIGHTS`].
    pub fn to_grayscale(&self) -> Self {
        let [wr, wg, wb] = LUMA_WEIGHTS;
        let gray = wr * self.r + wg * self.g + wb * self.b;
        Self::new(gray, gray, gray, self.alpha)
    }

    /// Perceived brightness above the midpoint of the `0-255` range.
    pub fn is_light(&self) -> bool {
        let [wr, wg, wb] = LUMA_WEIGHTS;
        let gray = (wr * self.r.powi(2) + wg * self.g.powi(2) + wb * self.b.powi(2)).sqrt();
        gray > 127.5
    }
}

/// sRGB transfer function: encoded `[0, 1]` to linear light.
pub(crate) fn srgb_to_linear(v: f64) -> f64 {
    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

impl Color for Rgba {
    fn to_rgba(&self) -> Rgba {
        *self
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn to_hsla(&self) -> Hsla {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let diff = max - min;
        let l = (max + min) / 2.0;
        let s = if diff == 0.0 {
            0.0
        } else {
            diff / (1.0 - (2.0 * l - 1.0).abs())
        };

        Hsla::new(Angle::degrees(self.hue()), s, l, self.alpha)
    }

    fn to_hwb(&self) -> Hwb {
        let (r, g, b) = self.unit_channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        Hwb::new(Angle::degrees(self.hue()), min, 1.0 - max, self.alpha)
    }

    fn to_xyz(&self) -> Xyz {
        let (r, g, b) = self.unit_channels();
        let linear = [srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b)];
        let [x, y, z] = SRGB_TO_XYZ.map(|row| {
            row[0] * linear[0] + row[1] * linear[1] + row[2] * linear[2]
        });

        Xyz::new(x, y, z, self.alpha)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{},{})", self.r, self.g, self.b, self.alpha)
    }
}
