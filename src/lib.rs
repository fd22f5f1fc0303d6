//! # colorexpr-rs
//!
//! Parse CSS color expressions and convert between color spaces.
//!
//! This crate bundles the two workspace libraries:
//!
//! - [`colorexpr`]: tokenizer, parser and evaluator for color text
//! - [`colorspace`]: RGBA, HSLA, HWB, XYZ and Lab plus contrast and
//!   adjustment helpers
//!
//! ```
//! use colorexpr_rs::{Color, parse};
//!
//! let (color, errors) = parse("royalblue");
//! assert!(errors.is_empty());
//! assert_eq!(color.to_rgba().b, 225.0);
//! ```

pub mod error;
mod log_init;

pub use colorexpr;
pub use colorspace;
pub use log;

pub use colorexpr::{ColorExpression, ParseError, ParseErrorCategory, ParseErrors, parse, try_parse};
pub use colorspace::processing;
pub use colorspace::{Angle, AngleUnit, Color, ColorSpace, Hsla, Hwb, Lab, Ratio, Rgba, Xyz};
pub use error::{CliError, Result};
pub use log_init::init_logger;

/// Environment variable naming the log file for the `colorexpr-demo` binary.
pub const LOG_PATH_ENV: &str = "COLOREXPR_LOG";

/// Environment variable holding the log level for the `colorexpr-demo` binary.
pub const LOG_LEVEL_ENV: &str = "COLOREXPR_LOG_LEVEL";

/// Level used when [`LOG_LEVEL_ENV`] is unset.
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Debug;

/// Reads a level name as accepted in [`LOG_LEVEL_ENV`].
///
/// ```
/// use colorexpr_rs::{log::LevelFilter, parse_log_level};
///
/// assert_eq!(parse_log_level("TRACE").unwrap(), LevelFilter::Trace);
/// assert!(parse_log_level("loud").is_err());
/// ```
pub fn parse_log_level(name: &str) -> Result<log::LevelFilter> {
    match name.trim().to_ascii_lowercase().as_str() {
        "error" => Ok(log::LevelFilter::Error),
        "warn" => Ok(log::LevelFilter::Warn),
        "info" => Ok(log::LevelFilter::Info),
        "debug" => Ok(log::LevelFilter::Debug),
        "trace" => Ok(log::LevelFilter::Trace),
        _ => Err(CliError::InvalidLogLevel(name.to_string())),
    }
}

/// Renders a parsed color in every space, one per line.
///
/// ```
/// use colorexpr_rs::{describe, parse};
///
/// let (color, _) = parse("#ff0000");
/// assert!(describe(&color).starts_with("rgba: rgb(255,0,0,1)"));
/// ```
pub fn describe(color: &ColorSpace) -> String {
    let hsla = color.to_hsla();
    let hwb = color.to_hwb();
    let xyz = color.to_xyz();
    let lab = color.to_lab();
    [
        format!("rgba: {}", color.to_rgba()),
        format!("hsla: {hsla}"),
        format!("hwb:  {hwb}"),
        format!("xyz:  {:.5} {:.5} {:.5}", xyz.x, xyz.y, xyz.z),
        format!("lab:  {:.2} {:.2} {:.2}", lab.l, lab.a, lab.b),
        format!(
            "contrast vs white: {:.2}",
            processing::contrast_ratio(color, &Rgba::rgb(255.0, 255.0, 255.0))
        ),
    ]
    .join("\n")
}
