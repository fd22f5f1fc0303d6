//! Hue angles with their CSS unit.
//!
//! An [`Angle`] keeps the unit it was written with (`30turn`, `1.2rad`, ...).
//! Conversions into degrees happen only when a color space consumes the hue,
//! so a parsed `hsl(30turn ...)` still reports `30` and `turn`.

use std::f64::consts::PI;
use std::fmt;

/// Unit attached to a hue value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    /// No unit written; interpreted as degrees.
    #[default]
    None,
    Deg,
    Turn,
    Rad,
    Grad,
}

impl AngleUnit {
    /// The CSS spelling of the unit (`""` for [`AngleUnit::None`]).
    pub fn as_str(&self) -> &'static str {
        match self {
            AngleUnit::None => "",
            AngleUnit::Deg => "deg",
            AngleUnit::Turn => "turn",
            AngleUnit::Rad => "rad",
            AngleUnit::Grad => "grad",
        }
    }

    /// Looks up a unit by its CSS spelling.
    pub fn from_css(unit: &str) -> Option<Self> {
        match unit {
            "" => Some(AngleUnit::None),
            "deg" => Some(AngleUnit::Deg),
            "turn" => Some(AngleUnit::Turn),
            "rad" => Some(AngleUnit::Rad),
            "grad" => Some(AngleUnit::Grad),
            _ => None,
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hue value together with the unit it is expressed in.
///
/// # Examples
///
/// ```
/// use colorspace::{Angle, AngleUnit};
///
/// let quarter = Angle::new(0.25, AngleUnit::Turn);
/// assert_eq!(quarter.to_degrees(), 90.0);
///
/// let wrapped = Angle::degrees(-90.0).normalized();
/// assert_eq!(wrapped.value, 270.0);
/// assert_eq!(wrapped.unit, AngleUnit::None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Angle {
    pub value: f64,
    pub unit: AngleUnit,
}

impl Angle {
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        Self { value, unit }
    }

    /// A unitless angle, read as degrees.
    pub fn degrees(value: f64) -> Self {
        Self::new(value, AngleUnit::None)
    }

    /// Converts to degrees and reduces the result into `[0, 360)`.
    ///
    /// `grad` uses the CSS ratio of 400 grad = 360 degrees.
    pub fn to_degrees(&self) -> f64 {
        let degrees = match self.unit {
            AngleUnit::Turn => self.value * 360.0,
            AngleUnit::Rad => self.value * 180.0 / PI,
            AngleUnit::Grad => self.value * 0.9,
            AngleUnit::Deg | AngleUnit::None => self.value,
        };
        wrap_degrees(degrees)
    }

    /// Returns the unitless equivalent in `[0, 360)`.
    pub fn normalized(&self) -> Self {
        Self::degrees(self.to_degrees())
    }

    /// True when the angle has no unit and lies in `[0, 360)`.
    pub fn is_normalized(&self) -> bool {
        self.unit == AngleUnit::None && (0.0..360.0).contains(&self.value)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// Reduces a degree value modulo 360 with a non-negative result.
pub(crate) fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = degrees % 360.0;
    if wrapped < 0.0 {
        // -0.0 and tiny negatives can round up to 360 after the add.
        let shifted = wrapped + 360.0;
        if shifted >= 360.0 { 0.0 } else { shifted }
    } else {
        // Adding zero turns -0.0 into 0.0.
        wrapped + 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn unitless_passes_through() {
        assert_eq!(Angle::degrees(120.0).to_degrees(), 120.0);
        assert_eq!(Angle::new(120.0, AngleUnit::Deg).to_degrees(), 120.0);
    }

    #[test]
    fn turn_rad_grad_convert_to_degrees() {
        assert!(approx(Angle::new(0.5, AngleUnit::Turn).to_degrees(), 180.0));
        assert!(approx(Angle::new(PI, AngleUnit::Rad).to_degrees(), 180.0));
        assert!(approx(Angle::new(100.0, AngleUnit::Grad).to_degrees(), 90.0));
    }

    #[test]
    fn full_circle_grad_is_360_degrees() {
        assert!(approx(Angle::new(400.0, AngleUnit::Grad).to_degrees(), 0.0));
        assert!(approx(Angle::new(200.0, AngleUnit::Grad).to_degrees(), 180.0));
    }

    #[test]
    fn wraps_into_range() {
        assert_eq!(Angle::degrees(360.0).to_degrees(), 0.0);
        assert_eq!(Angle::degrees(725.0).to_degrees(), 5.0);
        assert_eq!(Angle::degrees(-30.0).to_degrees(), 330.0);
        assert!(approx(Angle::new(30.0, AngleUnit::Turn).to_degrees(), 0.0));
    }

    #[test]
    fn normalized_drops_unit() {
        let angle = Angle::new(0.25, AngleUnit::Turn).normalized();
        assert!(angle.is_normalized());
        assert_eq!(angle.value, 90.0);
    }

    #[test]
    fn display_keeps_unit() {
        assert_eq!(Angle::new(30.0, AngleUnit::Turn).to_string(), "30turn");
        assert_eq!(Angle::degrees(12.5).to_string(), "12.5");
    }

    #[test]
    fn unit_from_css() {
        assert_eq!(AngleUnit::from_css("grad"), Some(AngleUnit::Grad));
        assert_eq!(AngleUnit::from_css(""), Some(AngleUnit::None));
        assert_eq!(AngleUnit::from_css("%"), None);
    }
}
