//! Error types for color expression parsing.
//!
//! Parse errors are data: the parser collects them in order and hands them
//! back next to the (possibly missing) AST instead of returning early.

use std::fmt;

use thiserror::Error;

/// The production a [`ParseError`] was raised from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorCategory {
    /// A numeric literal could not be read as a number.
    ValueParsing,
    /// A named color could not be resolved.
    NamedColorParsing,
    /// A `#` hex color has a bad length or non-hex digits.
    HexParsing,
    /// Anything wrong inside `rgb(...)` / `rgba(...)`.
    RgbaParsing,
    /// Anything wrong inside `hsl(...)` / `hsla(...)`.
    HslaParsing,
    /// Anything wrong inside `hwb(...)`.
    HwbParsing,
    /// Anything wrong inside `xyz(...)`.
    XyzParsing,
    /// Anything wrong inside `lab(...)`.
    LabParsing,
    /// The input held no color expression.
    TooShortNodes,
    /// The input held more than one color expression.
    TooManyNodes,
    /// No more specific category applies.
    Unknown,
}

impl ParseErrorCategory {
    /// The upper-snake name of the category, e.g. `HEX_PARSING`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorCategory::ValueParsing => "VALUE_PARSING",
            ParseErrorCategory::NamedColorParsing => "NAMED_COLOR_PARSING",
            ParseErrorCategory::HexParsing => "HEX_PARSING",
            ParseErrorCategory::RgbaParsing => "RGBA_PARSING",
            ParseErrorCategory::HslaParsing => "HSLA_PARSING",
            ParseErrorCategory::HwbParsing => "HWB_PARSING",
            ParseErrorCategory::XyzParsing => "XYZ_PARSING",
            ParseErrorCategory::LabParsing => "LAB_PARSING",
            ParseErrorCategory::TooShortNodes => "TOO_SHORT_NODES",
            ParseErrorCategory::TooManyNodes => "TOO_MANY_NODES",
            ParseErrorCategory::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for ParseErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorized parse error.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{message}")]
pub struct ParseError {
    pub message: String,
    pub category: ParseErrorCategory,
}

impl ParseError {
    pub fn new(message: impl Into<String>, category: ParseErrorCategory) -> Self {
        Self {
            message: message.into(),
            category,
        }
    }
}

/// Every error collected by one failed parse.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{}", join_messages(.0))]
pub struct ParseErrors(pub Vec<ParseError>);

impl ParseErrors {
    /// Categories of the collected errors, in order.
    pub fn categories(&self) -> Vec<ParseErrorCategory> {
        self.0.iter().map(|e| e.category).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParseError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ParseError>> for ParseErrors {
    fn from(errors: Vec<ParseError>) -> Self {
        Self(errors)
    }
}

impl<'a> IntoIterator for &'a ParseErrors {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn join_messages(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_names() {
        assert_eq!(ParseErrorCategory::HexParsing.to_string(), "HEX_PARSING");
        assert_eq!(
            ParseErrorCategory::NamedColorParsing.to_string(),
            "NAMED_COLOR_PARSING"
        );
        assert_eq!(ParseErrorCategory::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn error_displays_message() {
        let err = ParseError::new(") not found", ParseErrorCategory::RgbaParsing);
        assert_eq!(err.to_string(), ") not found");
    }

    #[test]
    fn errors_join_messages() {
        let errors = ParseErrors(vec![
            ParseError::new("first", ParseErrorCategory::HexParsing),
            ParseError::new("second", ParseErrorCategory::Unknown),
        ]);
        assert_eq!(errors.to_string(), "first; second");
        assert_eq!(errors.len(), 2);
        assert!(!errors.is_empty());
        assert_eq!(errors.iter().next().map(|e| e.message.as_str()), Some("first"));
        assert_eq!((&errors).into_iter().count(), 2);
        assert_eq!(
            errors.categories(),
            vec![ParseErrorCategory::HexParsing, ParseErrorCategory::Unknown]
        );
    }
}
