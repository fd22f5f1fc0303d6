//! The five color spaces and the conversions between them.
//!
//! RGBA is the hub: every space converts to [`Rgba`] and [`Rgba`] converts to
//! every space. Lab and XYZ additionally convert to each other directly.
//! Any other pair (Lab to HWB, say) goes through RGBA, which is what the
//! default methods of [`Color`] do.

mod hsla;
mod hwb;
mod lab;
mod rgba;
mod xyz;

use std::fmt;

pub use hsla::{Hsla, HslaChanges};
pub use hwb::{Hwb, HwbChanges};
pub use lab::Lab;
pub use rgba::{Rgba, RgbaChanges};
pub use xyz::Xyz;

/// Behavior shared by every color space.
///
/// Implementors only need [`Color::to_rgba`] and [`Color::alpha`]; the other
/// conversions route through RGBA unless a space has a more direct path.
/// The textual form comes from [`fmt::Display`].
pub trait Color: fmt::Display {
    /// Converts to the canonical sRGB hub.
    fn to_rgba(&self) -> Rgba;

    /// Opacity in `[0, 1]`.
    fn alpha(&self) -> f64;

    fn to_hsla(&self) -> Hsla {
        self.to_rgba().to_hsla()
    }

    fn to_hwb(&self) -> Hwb {
        self.to_rgba().to_hwb()
    }

    fn to_xyz(&self) -> Xyz {
        self.to_rgba().to_xyz()
    }

    fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }
}

/// A color in any of the supported spaces.
///
/// # Examples
///
/// ```
/// use colorspace::{Color, ColorSpace, Rgba};
///
/// let color = ColorSpace::from(Rgba::rgb(255.0, 0.0, 0.0));
/// let hsla = color.to_hsla();
/// assert_eq!(hsla.h.value, 0.0);
/// assert_eq!(color.to_string(), "rgb(255,0,0,1)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorSpace {
    Rgba(Rgba),
    Hsla(Hsla),
    Hwb(Hwb),
    Xyz(Xyz),
    Lab(Lab),
}

impl ColorSpace {
    /// Short lowercase name of the variant's space.
    pub fn space_name(&self) -> &'static str {
        match self {
            ColorSpace::Rgba(_) => "rgba",
            ColorSpace::Hsla(_) => "hsla",
            ColorSpace::Hwb(_) => "hwb",
            ColorSpace::Xyz(_) => "xyz",
            ColorSpace::Lab(_) => "lab",
        }
    }

    /// Returns the same color in the same space with a different alpha.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        match self {
            ColorSpace::Rgba(c) => ColorSpace::Rgba(c.with_alpha(alpha)),
            ColorSpace::Hsla(c) => ColorSpace::Hsla(c.with_alpha(alpha)),
            ColorSpace::Hwb(c) => ColorSpace::Hwb(c.with_alpha(alpha)),
            ColorSpace::Xyz(c) => ColorSpace::Xyz(c.with_alpha(alpha)),
            ColorSpace::Lab(c) => ColorSpace::Lab(c.with_alpha(alpha)),
        }
    }
}

impl Default for ColorSpace {
    fn default() -> Self {
        ColorSpace::Rgba(Rgba::zero())
    }
}

impl Color for ColorSpace {
    fn to_rgba(&self) -> Rgba {
        match self {
            ColorSpace::Rgba(c) => c.to_rgba(),
            ColorSpace::Hsla(c) => c.to_rgba(),
            ColorSpace::Hwb(c) => c.to_rgba(),
            ColorSpace::Xyz(c) => c.to_rgba(),
            ColorSpace::Lab(c) => c.to_rgba(),
        }
    }

    fn alpha(&self) -> f64 {
        match self {
            ColorSpace::Rgba(c) => c.alpha,
            ColorSpace::Hsla(c) => c.alpha,
            ColorSpace::Hwb(c) => c.alpha,
            ColorSpace::Xyz(c) => c.alpha,
            ColorSpace::Lab(c) => c.alpha,
        }
    }

    fn to_hsla(&self) -> Hsla {
        match self {
            ColorSpace::Hsla(c) => *c,
            other => other.to_rgba().to_hsla(),
        }
    }

    fn to_hwb(&self) -> Hwb {
        match self {
            ColorSpace::Hwb(c) => *c,
            other => other.to_rgba().to_hwb(),
        }
    }

    fn to_xyz(&self) -> Xyz {
        match self {
            ColorSpace::Xyz(c) => *c,
            ColorSpace::Lab(c) => c.to_xyz(),
            other => other.to_rgba().to_xyz(),
        }
    }

    fn to_lab(&self) -> Lab {
        match self {
            ColorSpace::Lab(c) => *c,
            other => other.to_xyz().to_lab(),
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpace::Rgba(c) => fmt::Display::fmt(c, f),
            ColorSpace::Hsla(c) => fmt::Display::fmt(c, f),
            ColorSpace::Hwb(c) => fmt::Display::fmt(c, f),
            ColorSpace::Xyz(c) => fmt::Display::fmt(c, f),
            ColorSpace::Lab(c) => fmt::Display::fmt(c, f),
        }
    }
}

impl From<Rgba> for ColorSpace {
    fn from(c: Rgba) -> Self {
        ColorSpace::Rgba(c)
    }
}

impl From<Hsla> for ColorSpace {
    fn from(c: Hsla) -> Self {
        ColorSpace::Hsla(c)
    }
}

impl From<Hwb> for ColorSpace {
    fn from(c: Hwb) -> Self {
        ColorSpace::Hwb(c)
    }
}

impl From<Xyz> for ColorSpace {
    fn from(c: Xyz) -> Self {
        ColorSpace::Xyz(c)
    }
}

impl From<Lab> for ColorSpace {
    fn from(c: Lab) -> Self {
        ColorSpace::Lab(c)
    }
}
