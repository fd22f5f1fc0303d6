//! Lexer for color expressions.
//!
//! Converts input text into a flat stream of tokens ending with
//! [`TokenClass::EndOfInput`]. The lexer never fails: characters it does not
//! understand become [`TokenClass::Illegal`] tokens, and malformed numbers
//! become [`TokenClass::String`] tokens so the parser can reject them.

use super::keywords::lookup_ident;
use super::token::{Token, TokenClass};

/// Lexer for color expression text.
///
/// # Examples
///
/// ```
/// use colorexpr::parser::{Lexer, TokenClass};
///
/// let classes: Vec<_> = Lexer::new("rgb(1, 2, 3)").map(|t| t.class).collect();
/// assert_eq!(classes.first(), Some(&TokenClass::Rgba));
/// assert_eq!(classes.last(), Some(&TokenClass::EndOfInput));
/// ```
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            finished: false,
        }
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peek one character past [`Self::peek`].
    fn peek_second(&self) -> Option<char> {
        self.remaining().chars().nth(1)
    }

    /// Advance by one character.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume characters while `pred` holds.
    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Build a token from `start` to the current position.
    fn token_from(&self, start: usize, class: TokenClass) -> Token<'a> {
        Token::new(class, &self.input[start..self.pos])
    }

    /// Consume a run of digits and dots, returning how many dots it held.
    fn consume_digits_and_dots(&mut self) -> usize {
        let start = self.pos;
        self.advance_while(|c| c.is_ascii_digit() || c == '.');
        self.input[start..self.pos].matches('.').count()
    }

    /// Numbers starting with a digit: one dot at most.
    fn consume_number(&mut self) -> Token<'a> {
        let start = self.pos;
        let dots = self.consume_digits_and_dots();
        let class = if dots <= 1 {
            TokenClass::Number
        } else {
            TokenClass::String
        };
        self.token_from(start, class)
    }

    /// Numbers starting with `.`: the run after the leading dot may hold
    /// one more dot before the token degrades to a string.
    fn consume_dot_number(&mut self) -> Token<'a> {
        let start = self.pos;
        self.advance(); // consume '.'
        let dots = self.consume_digits_and_dots();
        let class = if dots <= 1 {
            TokenClass::Number
        } else {
            TokenClass::String
        };
        self.token_from(start, class)
    }

    /// `+` or `-` directly in front of a number.
    fn consume_signed_number(&mut self) -> Token<'a> {
        let start = self.pos;
        self.advance(); // consume sign
        let unsigned = if self.peek() == Some('.') {
            self.consume_dot_number()
        } else {
            self.consume_number()
        };
        self.token_from(start, unsigned.class)
    }

    fn starts_signed_number(&self) -> bool {
        let mut chars = self.remaining().chars().skip(1);
        match chars.next() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => chars.next().is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    /// Collapse a whitespace run into one token holding its first character.
    fn consume_whitespace(&mut self) -> Token<'a> {
        let start = self.pos;
        self.advance();
        let first = self.token_from(start, TokenClass::Whitespace);
        self.advance_while(char::is_whitespace);
        first
    }

    fn consume_ident(&mut self) -> Token<'a> {
        let start = self.pos;
        self.advance_while(|c| c.is_ascii_alphabetic());
        let text = &self.input[start..self.pos];
        Token::new(lookup_ident(text), text)
    }

    fn consume_single(&mut self, class: TokenClass) -> Token<'a> {
        let start = self.pos;
        self.advance();
        self.token_from(start, class)
    }

    fn next_token(&mut self) -> Token<'a> {
        let Some(c) = self.peek() else {
            return Token::end_of_input();
        };

        match c {
            '#' => self.consume_single(TokenClass::Sharp),
            '(' => self.consume_single(TokenClass::LParen),
            ')' => self.consume_single(TokenClass::RParen),
            ',' => self.consume_single(TokenClass::Comma),
            '%' => self.consume_single(TokenClass::Percent),
            '/' => self.consume_single(TokenClass::Slash),
            ':' => self.consume_single(TokenClass::Colon),
            ';' => self.consume_single(TokenClass::Semicolon),
            '.' if self.peek_second().is_some_and(|c| c.is_ascii_digit()) => {
                self.consume_dot_number()
            }
            '.' => self.consume_single(TokenClass::Dot),
            '+' | '-' if self.starts_signed_number() => self.consume_signed_number(),
            c if c.is_whitespace() => self.consume_whitespace(),
            c if c.is_ascii_alphabetic() => self.consume_ident(),
            c if c.is_ascii_digit() => self.consume_number(),
            _ => self.consume_single(TokenClass::Illegal),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        log::trace!("lexed {:?} {:?}", token.class, token.text);
        if token.is(TokenClass::EndOfInput) {
            self.finished = true;
        }
        Some(token)
    }
}

/// Scans the whole input. The result always ends with exactly one
/// [`TokenClass::EndOfInput`] token.
pub fn scan(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use TokenClass::*;

    fn lex(input: &str) -> Vec<(TokenClass, &str)> {
        scan(input).into_iter().map(|t| (t.class, t.text)).collect()
    }

    #[test]
    fn lex_empty() {
        assert_eq!(lex(""), vec![(EndOfInput, "")]);
    }

    #[test]
    fn lex_words() {
        assert_eq!(
            lex("lorem ipsum"),
            vec![(String, "lorem"), (Whitespace, " "), (String, "ipsum"), (EndOfInput, "")]
        );
    }

    #[test]
    fn lex_whitespace_runs_collapse() {
        assert_eq!(
            lex("     lorem \t\n   ipsum     "),
            vec![
                (Whitespace, " "),
                (String, "lorem"),
                (Whitespace, " "),
                (String, "ipsum"),
                (Whitespace, " "),
                (EndOfInput, ""),
            ]
        );
        assert_eq!(lex("          "), vec![(Whitespace, " "), (EndOfInput, "")]);
    }

    #[test]
    fn lex_punctuation() {
        assert_eq!(
            lex("#).(,%%/../();:"),
            vec![
                (Sharp, "#"),
                (RParen, ")"),
                (Dot, "."),
                (LParen, "("),
                (Comma, ","),
                (Percent, "%"),
                (Percent, "%"),
                (Slash, "/"),
                (Dot, "."),
                (Dot, "."),
                (Slash, "/"),
                (LParen, "("),
                (RParen, ")"),
                (Semicolon, ";"),
                (Colon, ":"),
                (EndOfInput, ""),
            ]
        );
    }

    #[test]
    fn lex_numbers() {
        assert_eq!(lex("12"), vec![(Number, "12"), (EndOfInput, "")]);
        assert_eq!(lex("1.25"), vec![(Number, "1.25"), (EndOfInput, "")]);
        assert_eq!(lex(".5"), vec![(Number, ".5"), (EndOfInput, "")]);
    }

    #[test]
    fn lex_malformed_numbers_become_strings() {
        assert_eq!(lex("1.2.3"), vec![(String, "1.2.3"), (EndOfInput, "")]);
        assert_eq!(lex(".1.2.3"), vec![(String, ".1.2.3"), (EndOfInput, "")]);
    }

    #[test]
    fn lex_dot_number_allows_one_more_dot() {
        assert_eq!(lex(".5.3"), vec![(Number, ".5.3"), (EndOfInput, "")]);
    }

    #[test]
    fn lex_signed_numbers() {
        assert_eq!(lex("-20"), vec![(Number, "-20"), (EndOfInput, "")]);
        assert_eq!(lex("+.5"), vec![(Number, "+.5"), (EndOfInput, "")]);
        assert_eq!(lex("- 1"), vec![(Illegal, "-"), (Whitespace, " "), (Number, "1"), (EndOfInput, "")]);
    }

    #[test]
    fn lex_keywords() {
        assert_eq!(
            lex("hsla(30turn"),
            vec![
                (Hsla, "hsla"),
                (LParen, "("),
                (Number, "30"),
                (Turn, "turn"),
                (EndOfInput, ""),
            ]
        );
        assert_eq!(lex("royalblue"), vec![(NamedColor, "royalblue"), (EndOfInput, "")]);
    }

    #[test]
    fn lex_hex_body() {
        assert_eq!(
            lex("#ff8800"),
            vec![(Sharp, "#"), (String, "ff"), (Number, "8800"), (EndOfInput, "")]
        );
    }

    #[test]
    fn lex_illegal() {
        assert_eq!(lex("é!"), vec![(Illegal, "é"), (Illegal, "!"), (EndOfInput, "")]);
    }

    #[test]
    fn iterator_stops_after_end_of_input() {
        let mut lexer = Lexer::new("red");
        assert_eq!(lexer.next().map(|t| t.class), Some(NamedColor));
        assert_eq!(lexer.next().map(|t| t.class), Some(EndOfInput));
        assert_eq!(lexer.next(), None);
    }
}
