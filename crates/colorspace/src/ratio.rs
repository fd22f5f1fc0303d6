//! Saturation, lightness, whiteness and blackness as written.
//!
//! CSS writes these channels as percentages (`50%`) while the conversion
//! math wants fractions in `[0, 1]`. A [`Ratio`] keeps the number it was
//! given and whether it was a percentage; [`Ratio::fraction`] does the
//! scaling when a conversion reads it, much like [`Angle`](crate::Angle)
//! does for hue units.

use std::fmt;

/// A `[0, 1]` channel, stored as a plain fraction or as a percentage.
///
/// # Examples
///
/// ```
/// use colorspace::Ratio;
///
/// let half = Ratio::percent(50.0);
/// assert_eq!(half.value, 50.0);
/// assert_eq!(half.fraction(), 0.5);
/// assert_eq!(half.normalized(), Ratio::new(0.5));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ratio {
    pub value: f64,
    /// True when `value` is on the `0-100` scale.
    pub percent: bool,
}

impl Ratio {
    /// A plain fraction.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            percent: false,
        }
    }

    /// A percentage, `0-100`.
    pub fn percent(value: f64) -> Self {
        Self {
            value,
            percent: true,
        }
    }

    /// The value as a fraction. Not clamped.
    pub fn fraction(&self) -> f64 {
        if self.percent {
            self.value / 100.0
        } else {
            self.value
        }
    }

    /// The same amount stored as a fraction.
    pub fn normalized(&self) -> Self {
        Self::new(self.fraction())
    }
}

impl From<f64> for Ratio {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Always rendered as a percentage.
impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.percent {
            write!(f, "{}%", self.value)
        } else {
            write!(f, "{}%", self.value * 100.0)
        }
    }
}
