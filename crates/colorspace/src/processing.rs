//! Color utilities built on the conversion algebra: WCAG contrast, hue and
//! lightness adjustments, grayscale, inversion and mixing.
//!
//! Every function takes anything implementing [`Color`] and returns a new
//! value; inputs are never modified.

use crate::space::{Color, ColorSpace, Hsla, Rgba};
use crate::{Angle, Ratio};

/// Contrast thresholds `(AA, AAA)` for normal text.
pub const TEXT_THRESHOLDS: (f64, f64) = (4.5, 7.0);

/// Contrast thresholds `(AA, AAA)` for large text, UI components and graphics.
pub const NON_TEXT_THRESHOLDS: (f64, f64) = (3.0, 4.5);

/// What a contrast check is for. Only [`ContrastUsage::Text`] uses the
/// stricter thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContrastUsage {
    Text,
    LargeText,
    Ui,
    Graphical,
}

impl ContrastUsage {
    pub fn thresholds(&self) -> (f64, f64) {
        match self {
            ContrastUsage::Text => TEXT_THRESHOLDS,
            ContrastUsage::LargeText | ContrastUsage::Ui | ContrastUsage::Graphical => {
                NON_TEXT_THRESHOLDS
            }
        }
    }
}

/// Outcome of [`check_contrast`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContrastGrade {
    pub aa: bool,
    pub aaa: bool,
}

fn luminance_channel(value: f64) -> f64 {
    let ratio = value / 255.0;
    if ratio <= 0.03928 {
        ratio / 12.92
    } else {
        ((ratio + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance, 0.0 for black to 1.0 for white.
pub fn relative_luminance(color: &impl Color) -> f64 {
    let rgba = color.to_rgba();
    0.2126 * luminance_channel(rgba.r)
        + 0.7152 * luminance_channel(rgba.g)
        + 0.0722 * luminance_channel(rgba.b)
}

/// WCAG contrast ratio, from 1 (no contrast) to 21 (black on white).
/// The argument order does not matter.
pub fn contrast_ratio(first: &impl Color, second: &impl Color) -> f64 {
    let a = relative_luminance(first);
    let b = relative_luminance(second);
    let (lighter, darker) = if a >= b { (a, b) } else { (b, a) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Checks a color pair against the WCAG AA and AAA levels for `usage`.
pub fn check_contrast(
    first: &impl Color,
    second: &impl Color,
    usage: ContrastUsage,
) -> ContrastGrade {
    let contrast = contrast_ratio(first, second);
    let (aa, aaa) = usage.thresholds();
    ContrastGrade {
        aa: contrast >= aa,
        aaa: contrast >= aaa,
    }
}

pub fn is_light(color: &impl Color) -> bool {
    color.to_rgba().is_light()
}

/// Linearly interpolates `steps` colors from `start` to `end`, both included.
pub fn stepped_colors(start: &impl Color, end: &impl Color, steps: usize) -> Vec<ColorSpace> {
    let start = start.to_rgba();
    let end = end.to_rgba();

    match steps {
        0 => Vec::new(),
        1 => vec![ColorSpace::Rgba(start)],
        _ => (0..steps)
            .map(|i| {
                let ratio = i as f64 / (steps - 1) as f64;
                let lerp = |from: f64, to: f64| from + (to - from) * ratio;
                ColorSpace::Rgba(Rgba::new(
                    lerp(start.r, end.r),
                    lerp(start.g, end.g),
                    lerp(start.b, end.b),
                    lerp(start.alpha, end.alpha),
                ))
            })
            .collect(),
    }
}

/// Rotates the hue by `degrees`, returning an HSLA color with a unitless hue.
pub fn rotate_hue(color: &impl Color, degrees: f64) -> ColorSpace {
    let hsla = color.to_hsla().without_unit();
    let h = Angle::degrees(hsla.h.value + degrees).normalized();
    ColorSpace::Hsla(Hsla { h, ..hsla })
}

/// Adds `ratio` (`-1.0` to `1.0`) to the lightness; negative values darken.
pub fn lighten(color: &impl Color, ratio: f64) -> ColorSpace {
    let hsla = color.to_hsla().without_unit();
    let l = (hsla.l.fraction() + ratio).clamp(0.0, 1.0);
    ColorSpace::Hsla(Hsla {
        l: Ratio::new(l),
        ..hsla
    })
}

/// Scales saturation by `1 + ratio` (`ratio` in `-1.0` to `1.0`); negative
/// values desaturate.
pub fn saturate(color: &impl Color, ratio: f64) -> ColorSpace {
    let hsla = color.to_hsla().without_unit();
    let s = (hsla.s.fraction() * (1.0 + ratio)).clamp(0.0, 1.0);
    ColorSpace::Hsla(Hsla {
        s: Ratio::new(s),
        ..hsla
    })
}

pub fn grayscale(color: &impl Color) -> ColorSpace {
    ColorSpace::Rgba(color.to_rgba().to_grayscale())
}

pub fn invert(color: &impl Color) -> ColorSpace {
    let rgba = color.to_rgba();
    ColorSpace::Rgba(Rgba::new(
        255.0 - rgba.r,
        255.0 - rgba.g,
        255.0 - rgba.b,
        rgba.alpha,
    ))
}

/// The color on the opposite side of the hue wheel.
pub fn complement(color: &impl Color) -> ColorSpace {
    rotate_hue(color, 180.0)
}

/// Mixes two colors half and half.
pub fn mix(first: &impl Color, second: &impl Color) -> ColorSpace {
    mix_with_ratio(first, second, 0.5)
}

/// Mixes two colors; `ratio` is the weight of `first`, alpha included.
pub fn mix_with_ratio(first: &impl Color, second: &impl Color, ratio: f64) -> ColorSpace {
    let a = first.to_rgba();
    let b = second.to_rgba();
    let blend = |x: f64, y: f64| x * ratio + y * (1.0 - ratio);
    ColorSpace::Rgba(Rgba::new(
        blend(a.r, b.r),
        blend(a.g, b.g),
        blend(a.b, b.b),
        blend(a.alpha, b.alpha),
    ))
}
