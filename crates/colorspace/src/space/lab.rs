//! CIE L*a*b* relative to the D65 white point.

use std::fmt;

use super::{Color, Rgba, Xyz};

/// `6/29`, where the inverse companding function switches from cubic to linear.
const LAB_DELTA: f64 = 0.206893034;

/// A Lab color. `l` is in `[0, 100]`, `a` and `b` in `[-128, 128]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
    pub alpha: f64,
}

impl Lab {
    pub fn new(l: f64, a: f64, b: f64, alpha: f64) -> Self {
        Self { l, a, b, alpha }
    }

    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self { alpha, ..*self }
    }
}

fn lab_f_inverse(t: f64) -> f64 {
    if t > LAB_DELTA {
        t.powi(3)
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

impl Color for Lab {
    fn to_rgba(&self) -> Rgba {
        self.to_xyz().to_rgba()
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn to_xyz(&self) -> Xyz {
        let white = Xyz::WHITE_POINT;
        let fy = (self.l + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        Xyz::new(
            lab_f_inverse(fx) * white.x,
            lab_f_inverse(fy) * white.y,
            lab_f_inverse(fz) * white.z,
            self.alpha,
        )
    }

    fn to_lab(&self) -> Lab {
        *self
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_rgba(), f)
    }
}
