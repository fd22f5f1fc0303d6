//! CIE 1931 XYZ, D65 illuminant.

use std::fmt;

use super::{Color, Lab, Rgba};

/// XYZ (D65) to linear sRGB matrix, the inverse of
/// [`SRGB_TO_XYZ`](super::rgba::SRGB_TO_XYZ).
pub const XYZ_TO_SRGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// Threshold of the CIE Lab companding function, (6/29)^3.
const LAB_EPSILON: f64 = 0.008856;

/// Slope of the linear segment of the Lab companding function.
const LAB_SLOPE: f64 = 7.787;

/// An XYZ color on the scale where the D65 white has `y = 1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub alpha: f64,
}

impl Xyz {
    /// D65 reference white (2 degree observer).
    pub const WHITE_POINT: Xyz = Xyz {
        x: 0.95047,
        y: 1.00000,
        z: 1.08883,
        alpha: 1.0,
    };

    pub fn new(x: f64, y: f64, z: f64, alpha: f64) -> Self {
        Self { x, y, z, alpha }
    }

    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self { alpha, ..*self }
    }
}

/// Inverse sRGB transfer function: linear light to encoded `[0, 1]`.
fn linear_to_srgb(v: f64) -> f64 {
    if v > 0.0031308 {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * v
    }
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        LAB_SLOPE * t + 16.0 / 116.0
    }
}

impl Color for Xyz {
    fn to_rgba(&self) -> Rgba {
        let [r, g, b] = XYZ_TO_SRGB
            .map(|row| row[0] * self.x + row[1] * self.y + row[2] * self.z)
            .map(|v| (linear_to_srgb(v) * 255.0).clamp(0.0, 255.0));

        Rgba::new(r, g, b, self.alpha)
    }

    fn alpha(&self) -> f64 {
        self.alpha
    }

    fn to_xyz(&self) -> Xyz {
        *self
    }

    fn to_lab(&self) -> Lab {
        let white = Xyz::WHITE_POINT;
        let fx = lab_f(self.x / white.x);
        let fy = lab_f(self.y / white.y);
        let fz = lab_f(self.z / white.z);

        let l = (116.0 * fy - 16.0).clamp(0.0, 100.0);
        let a = (500.0 * (fx - fy)).clamp(-128.0, 128.0);
        let b = (200.0 * (fy - fz)).clamp(-128.0, 128.0);

        Lab::new(l, a, b, self.alpha)
    }
}

/// XYZ has no CSS text form of its own here; it renders as `rgb(...)`.
impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_rgba(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_point_is_white() {
        let rgba = Xyz::WHITE_POINT.to_rgba();
        assert!((rgba.r - 255.0).abs() < 0.5);
        assert!((rgba.g - 255.0).abs() < 0.5);
        assert!((rgba.b - 255.0).abs() < 0.5);
    }

    #[test]
    fn out_of_gamut_is_clamped() {
        let rgba = Xyz::new(2.0, -1.0, 0.0, 1.0).to_rgba();
        for channel in [rgba.r, rgba.g, rgba.b] {
            assert!((0.0..=255.0).contains(&channel));
        }
    }

    #[test]
    fn white_point_to_lab() {
        let lab = Xyz::WHITE_POINT.to_lab();
        assert!((lab.l - 100.0).abs() < 1e-6);
        assert!(lab.a.abs() < 1e-6);
        assert!(lab.b.abs() < 1e-6);
    }

    #[test]
    fn black_to_lab() {
        let lab = Xyz::new(0.0, 0.0, 0.0, 1.0).to_lab();
        assert!(lab.l.abs() < 1e-6);
        assert!(lab.a.abs() < 1e-6);
        assert!(lab.b.abs() < 1e-6);
    }

    #[test]
    fn renders_as_rgb() {
        assert_eq!(Xyz::new(0.0, 0.0, 0.0, 0.5).to_string(), "rgb(0,0,0,0.5)");
    }
}
