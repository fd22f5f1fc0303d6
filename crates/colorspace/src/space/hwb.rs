//! Hue, whiteness, blackness.

use std::fmt;

use super::hsla::hsl_to_unit_rgb;
use super::{Color, Rgba};
use crate::{Angle, Ratio};

/// An HWB color with alpha. Whiteness and blackness are [`Ratio`]s kept as
/// written, read as fractions in `[0, 1]` by conversions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hwb {
    pub h: Angle,
    pub w: Ratio,
    pub b: Ratio,
    pub alpha: f64,
}

/// Fields to replace in [`Hwb::update`]. `None` keeps the current value;
/// `w` and `b` are fractions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HwbChanges {
    pub h: Option<Angle>,
    pub w: Option<f64>,
    pub b: Option<f64>,
    pub alpha: Option<f64>,
}

impl Hwb {
    /// Plain `f64` channels are taken as fractions.
    pub fn new(h: Angle, w: impl Into<Ratio>, b: impl Into<Ratio>, alpha: f64) -> Self {
        Self {
            h,
            w: w.into(),
            b: b.into(),
            alpha,
        }
    }

    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self { alpha, ..*self }
    }

    pub fn update(&self, changes: HwbChanges) -> Self {
        Self {
            h: changes.h.unwrap_or(self.h),
            w: changes.w.map(Ratio::new).unwrap_or(self.w),
            b: changes.b.map(Ratio::new).unwrap_or(self.b),
            alpha: changes.alpha.unwrap_or(self.alpha),
        }
    }

    /// Same color with the hue as unitless degrees in `[0, 360)` and
    /// whiteness and blackness as fractions.
    pub fn without_unit(&self) -> Self {
        Self {
            h: self.h.normalized(),
            w: self.w.normalized(),
            b: self.b.normalized(),
            ..*self
        }
    }
}

impl Color for Hwb {
    fn to_rgba(&self) -> Rgba {
        let w = self.w.fraction().clamp(0.0, 1.0);
        let b = self.b.fraction().clamp(0.0, 1.0);

        // Whiteness and blackness past 100% combined leave no hue.
        if w + b >= 1.0 {
            let gray = (w / (w + b) * 255.0).round();
            return Rgba::new(gray, gray, gray, self.alpha);
        }

        // Fully saturated, half-lightness base hue, then mixed with white and black.
        let (r, g, bl) = hsl_to_unit_rgb(self.h.to_degrees(), 1.0, 0.5);
        let scale = |v: f64| ((v * (1.0 - w - b) + w) * 255.0).round();
        Rgba::new(scale(r), scale(g), scale(bl), self.alpha)
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn to_hwb(&self) -> Hwb {
        *self
    }
}

impl fmt::Display for Hwb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hwb({} {} {} / {})",
            self.h, self.w, self.b,
            self.alpha
        )
    }
}
