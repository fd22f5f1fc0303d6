//! Color expression parsing.
//!
//! This crate turns CSS-style color text into a numeric [`ColorSpace`]:
//!
//! - named colors: `royalblue`, `transparent`
//! - hex: `#f80`, `#f808`, `#ff8800`, `#ff880080`
//! - `rgb()` / `rgba()`, `hsl()` / `hsla()`, `hwb()`, `xyz()`, `lab()`
//!
//! Text flows through the [`parser::Lexer`], the grammar in
//! [`parser::parse_tokens`] and finally [`eval::evaluate`].
//!
//! # Usage
//!
//! ```
//! use colorexpr::{parse, ParseErrorCategory};
//! use colorexpr::colorspace::Color;
//!
//! let (color, errors) = parse("rgba(12, 34, 56, 0.5)");
//! assert!(errors.is_empty());
//! assert_eq!(color.to_string(), "rgb(12,34,56,0.5)");
//!
//! let (color, errors) = parse("#0000000");
//! assert_eq!(errors[0].category, ParseErrorCategory::HexParsing);
//! assert_eq!(color.alpha(), 0.0);
//! ```

pub mod error;
pub mod eval;
pub mod parser;

pub use colorspace;

use colorspace::{ColorSpace, Rgba};

pub use error::{ParseError, ParseErrorCategory, ParseErrors};
pub use eval::evaluate;
pub use parser::{ColorExpression, parse_tokens, scan};

/// Parses and evaluates a color expression.
///
/// Never fails. When the error list is non-empty the color is the
/// transparent-black sentinel [`Rgba::zero`] and must not be rendered.
pub fn parse(text: &str) -> (ColorSpace, Vec<ParseError>) {
    let tokens = scan(text);
    let (expression, mut errors) = parse_tokens(&tokens);

    if !errors.is_empty() {
        return (Rgba::zero().into(), errors);
    }

    match expression {
        Some(expression) => (evaluate(&expression), errors),
        None => {
            errors.push(ParseError::new("color is null", ParseErrorCategory::Unknown));
            (Rgba::zero().into(), errors)
        }
    }
}

/// Like [`parse`], but as a `Result`.
///
/// # Examples
///
/// ```
/// use colorexpr::try_parse;
///
/// assert!(try_parse("royalblue").is_ok());
/// let err = try_parse("red blue").unwrap_err();
/// assert_eq!(err.to_string(), "invalid syntax: too many number of nodes.");
/// ```
pub fn try_parse(text: &str) -> Result<ColorSpace, ParseErrors> {
    match parse(text) {
        (color, errors) if errors.is_empty() => Ok(color),
        (_, errors) => Err(ParseErrors(errors)),
    }
}
