//! Tokens produced by the [`Lexer`](super::Lexer).

/// The class of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// A character that starts no known token.
    Illegal,
    /// End of input; always the last token of a scan.
    EndOfInput,
    /// `#`
    Sharp,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `.` not followed by a digit.
    Dot,
    /// `,`
    Comma,
    /// `%`
    Percent,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// A run of whitespace of any length.
    Whitespace,
    /// Digits with at most one `.`, optionally signed.
    Number,
    /// A CSS Level 1-3 color keyword such as `royalblue`.
    NamedColor,
    /// `rgb` or `rgba`
    Rgba,
    /// `hsl` or `hsla`
    Hsla,
    /// `hwb`
    Hwb,
    /// `lch` (recognized, not parsed)
    Lch,
    /// `xyz`
    Xyz,
    /// `lab`
    Lab,
    /// `turn`
    Turn,
    /// `deg`
    Deg,
    /// `rad`
    Rad,
    /// `grad`
    Grad,
    /// Letters that are no keyword, or a malformed number such as `1.2.3`.
    String,
}

/// A token: its class and the slice of input it was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub class: TokenClass,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    pub fn new(class: TokenClass, text: &'a str) -> Self {
        Self { class, text }
    }

    pub fn end_of_input() -> Self {
        Self::new(TokenClass::EndOfInput, "")
    }

    pub fn is(&self, class: TokenClass) -> bool {
        self.class == class
    }
}
