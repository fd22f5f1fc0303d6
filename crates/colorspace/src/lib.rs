//! # colorspace
//!
//! Five color representations and the conversions between them:
//!
//! - [`Rgba`]: sRGB, channels `0-255`, the hub of every conversion
//! - [`Hsla`]: hue, saturation, lightness
//! - [`Hwb`]: hue, whiteness, blackness
//! - [`Xyz`]: CIE 1931 XYZ under D65
//! - [`Lab`]: CIE L*a*b* relative to D65
//!
//! [`ColorSpace`] holds any one of them. All conversions are total: inputs
//! outside the nominal ranges are clamped, never rejected.
//!
//! ```
//! use colorspace::{Color, Rgba};
//!
//! let orange = Rgba::rgb(255.0, 136.0, 0.0);
//! let back = orange.to_xyz().to_rgba();
//! assert!((back.g - 136.0).abs() < 1.0);
//! ```
//!
//! The [`processing`] module adds contrast checks and color adjustments on
//! top of the algebra.

pub mod angle;
pub mod processing;
pub mod ratio;
pub mod space;

pub use angle::{Angle, AngleUnit};
pub use ratio::Ratio;
pub use space::{
    Color, ColorSpace, Hsla, HslaChanges, Hwb, HwbChanges, Lab, Rgba, RgbaChanges, Xyz,
};
