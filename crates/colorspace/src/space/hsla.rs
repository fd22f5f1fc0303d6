//! Hue, saturation, lightness.

use std::fmt;

use super::{Color, Rgba};
use crate::{Angle, Ratio};

/// An HSL color with alpha.
///
/// Saturation and lightness are [`Ratio`]s: fractions in `[0, 1]` or
/// percentages, kept as written. The hue likewise keeps its unit until the
/// color is converted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: Angle,
    pub s: Ratio,
    pub l: Ratio,
    pub alpha: f64,
}

/// Fields to replace in [`Hsla::update`]. `None` keeps the current value;
/// `s` and `l` are fractions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HslaChanges {
    pub h: Option<Angle>,
    pub s: Option<f64>,
    pub l: Option<f64>,
    pub alpha: Option<f64>,
}

impl Hsla {
    /// Plain `f64` channels are taken as fractions.
    pub fn new(h: Angle, s: impl Into<Ratio>, l: impl Into<Ratio>, alpha: f64) -> Self {
        Self {
            h,
            s: s.into(),
            l: l.into(),
            alpha,
        }
    }

    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self { alpha, ..*self }
    }

    pub fn update(&self, changes: HslaChanges) -> Self {
        Self {
            h: changes.h.unwrap_or(self.h),
            s: changes.s.map(Ratio::new).unwrap_or(self.s),
            l: changes.l.map(Ratio::new).unwrap_or(self.l),
            alpha: changes.alpha.unwrap_or(self.alpha),
        }
    }

    /// Same color with the hue as unitless degrees in `[0, 360)` and
    /// saturation and lightness as fractions.
    pub fn without_unit(&self) -> Self {
        Self {
            h: self.h.normalized(),
            s: self.s.normalized(),
            l: self.l.normalized(),
            ..*self
        }
    }
}

/// Unrounded `[0, 1]` channels for a hue in degrees.
pub(crate) fn hsl_to_unit_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    (r + m, g + m, b + m)
}

impl Color for Hsla {
    fn to_rgba(&self) -> Rgba {
        let (r, g, b) = hsl_to_unit_rgb(
            self.h.to_degrees(),
            self.s.fraction().clamp(0.0, 1.0),
            self.l.fraction().clamp(0.0, 1.0),
        );
        Rgba::new(
            (r * 255.0).round(),
            (g * 255.0).round(),
            (b * 255.0).round(),
            self.alpha,
        )
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn to_hsla(&self) -> Hsla {
        *self
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({} {} {} / {})",
            self.h, self.s, self.l,
            self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AngleUnit;

    fn hsl(h: f64, s: f64, l: f64) -> Hsla {
        Hsla::new(Angle::degrees(h), s, l, 1.0)
    }

    #[test]
    fn primaries() {
        assert_eq!(hsl(0.0, 1.0, 0.5).to_rgba(), Rgba::rgb(255.0, 0.0, 0.0));
        assert_eq!(hsl(120.0, 1.0, 0.5).to_rgba(), Rgba::rgb(0.0, 255.0, 0.0));
        assert_eq!(hsl(240.0, 1.0, 0.5).to_rgba(), Rgba::rgb(0.0, 0.0, 255.0));
    }

    #[test]
    fn grayscale() {
        assert_eq!(hsl(0.0, 0.0, 0.0).to_rgba(), Rgba::rgb(0.0, 0.0, 0.0));
        assert_eq!(hsl(0.0, 0.0, 1.0).to_rgba(), Rgba::rgb(255.0, 255.0, 255.0));
        assert_eq!(hsl(0.0, 0.0, 0.5).to_rgba(), Rgba::rgb(128.0, 128.0, 128.0));
    }

    #[test]
    fn hue_units_are_normalized_on_conversion() {
        let turn = Hsla::new(Angle::new(1.0 / 3.0, AngleUnit::Turn), 1.0, 0.5, 1.0);
        assert_eq!(turn.to_rgba(), Rgba::rgb(0.0, 255.0, 0.0));

        let negative = hsl(-120.0, 1.0, 0.5);
        assert_eq!(negative.to_rgba(), Rgba::rgb(0.0, 0.0, 255.0));

        let grad = Hsla::new(Angle::new(400.0, AngleUnit::Grad), 1.0, 0.5, 1.0);
        assert_eq!(grad.to_rgba(), Rgba::rgb(255.0, 0.0, 0.0));
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        assert_eq!(hsl(0.0, 2.0, 0.5).to_rgba(), Rgba::rgb(255.0, 0.0, 0.0));
        assert_eq!(hsl(0.0, 0.0, 1.5).to_rgba(), Rgba::rgb(255.0, 255.0, 255.0));
    }

    #[test]
    fn without_unit_normalizes_hue() {
        let color = Hsla::new(Angle::new(0.5, AngleUnit::Turn), 0.5, 0.5, 1.0).without_unit();
        assert_eq!(color.h, Angle::degrees(180.0));
    }

    #[test]
    fn percentages_convert() {
        let green = Hsla::new(
            Angle::degrees(120.0),
            Ratio::percent(100.0),
            Ratio::percent(50.0),
            1.0,
        );
        assert_eq!(green.to_rgba(), Rgba::rgb(0.0, 255.0, 0.0));
        assert_eq!(green.to_string(), "hsl(120 100% 50% / 1)");
        assert_eq!(green.without_unit(), hsl(120.0, 1.0, 0.5));
    }

    #[test]
    fn update_keeps_unset_fields() {
        let color = hsl(90.0, 0.5, 0.5).update(HslaChanges {
            s: Some(0.0),
            ..Default::default()
        });
        assert_eq!(color, hsl(90.0, 0.0, 0.5));
    }

    #[test]
    fn display() {
        let color = Hsla::new(Angle::new(30.0, AngleUnit::Deg), 0.5, 0.25, 1.0);
        assert_eq!(color.to_string(), "hsl(30deg 50% 25% / 1)");
    }
}
