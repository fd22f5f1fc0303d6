//! Recursive-descent parser for color expressions.
//!
//! The parser never stops at the first defect. Every problem is recorded as
//! a [`ParseError`] and parsing continues with a zeroed node, so one call
//! reports everything wrong with the input.

use crate::error::{ParseError, ParseErrorCategory};

use super::ast::{
    ColorExpression, HexNode, HslaNode, HwbNode, LabNode, NamedColorNode, Node, RgbaNode, Value,
    ValueUnit, XyzNode,
};
use super::token::{Token, TokenClass};

/// Parses a token stream into at most one color expression.
///
/// Returns `None` when the stream holds zero or several color expressions;
/// the error list then ends with `TOO_SHORT_NODES` or `TOO_MANY_NODES`.
///
/// # Examples
///
/// ```
/// use colorexpr::parser::{parse_tokens, scan};
///
/// let (expr, errors) = parse_tokens(&scan("rgb(1, 2, 3)"));
/// assert!(errors.is_empty());
/// assert_eq!(expr.unwrap().to_string(), "rgb(1,2,3)");
/// ```
pub fn parse_tokens(tokens: &[Token<'_>]) -> (Option<ColorExpression>, Vec<ParseError>) {
    Parser::new(tokens).parse()
}

/// Shape of one `name(v, v, v[, alpha])` color function.
#[derive(Clone, Copy, Debug)]
struct FunctionForm {
    class: TokenClass,
    /// Name used when the function token itself is missing.
    name: &'static str,
    /// How the function is named in error messages.
    label: &'static str,
    /// Spelling used in the "not found" error.
    spelling: &'static str,
    category: ParseErrorCategory,
    max_values: usize,
}

impl FunctionForm {
    fn accepts(&self, count: usize) -> bool {
        (3..=self.max_values).contains(&count)
    }
}

const RGBA_FORM: FunctionForm = FunctionForm {
    class: TokenClass::Rgba,
    name: "rgba",
    label: "RGBA",
    spelling: "rgb(a)",
    category: ParseErrorCategory::RgbaParsing,
    max_values: 4,
};

const HSLA_FORM: FunctionForm = FunctionForm {
    class: TokenClass::Hsla,
    name: "hsla",
    label: "HSLA",
    spelling: "hsl(a)",
    category: ParseErrorCategory::HslaParsing,
    max_values: 4,
};

const HWB_FORM: FunctionForm = FunctionForm {
    class: TokenClass::Hwb,
    name: "hwb",
    label: "HWB",
    spelling: "hwb",
    category: ParseErrorCategory::HwbParsing,
    max_values: 4,
};

const XYZ_FORM: FunctionForm = FunctionForm {
    class: TokenClass::Xyz,
    name: "xyz",
    label: "XYZ",
    spelling: "xyz",
    category: ParseErrorCategory::XyzParsing,
    max_values: 3,
};

const LAB_FORM: FunctionForm = FunctionForm {
    class: TokenClass::Lab,
    name: "lab",
    label: "Lab",
    spelling: "lab",
    category: ParseErrorCategory::LabParsing,
    max_values: 4,
};

/// Values collected from one color function.
struct Arguments {
    name: String,
    /// `None` when the function was missing or had the wrong arity.
    values: Option<Vec<Value>>,
}

/// Parser state: a cursor over the token stream and the errors so far.
struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
    errors: Vec<ParseError>,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [Token<'a>]) -> Self {
        let mut parser = Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        };
        parser.skip_whitespace();
        parser
    }

    /// The token at `pos`; past the end reads as end of input.
    fn token_at(&self, pos: usize) -> Token<'a> {
        self.tokens
            .get(pos)
            .copied()
            .unwrap_or_else(Token::end_of_input)
    }

    fn current(&self) -> Token<'a> {
        self.token_at(self.pos)
    }

    /// The next non-whitespace token after the current one.
    fn peek(&self) -> Token<'a> {
        let mut pos = self.pos + 1;
        while self.token_at(pos).is(TokenClass::Whitespace) {
            pos += 1;
        }
        self.token_at(pos)
    }

    fn skip_whitespace(&mut self) {
        while self.current().is(TokenClass::Whitespace) {
            self.pos += 1;
        }
    }

    /// Moves to the next non-whitespace token. Stays put at end of input.
    fn advance(&mut self) {
        if self.current().is(TokenClass::EndOfInput) {
            return;
        }
        self.pos += 1;
        self.skip_whitespace();
    }

    /// Advances only if the peeked token has the given class.
    fn expect_peek(&mut self, class: TokenClass) -> bool {
        if self.peek().is(class) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn error(&mut self, category: ParseErrorCategory, message: impl Into<String>) {
        let error = ParseError::new(message, category);
        log::debug!("parse error [{}]: {}", error.category, error.message);
        self.errors.push(error);
    }

    fn form_error(&mut self, form: &FunctionForm, detail: &str) {
        self.error(
            form.category,
            format!("invalid {} syntax. {}", form.label, detail),
        );
    }

    fn parse(mut self) -> (Option<ColorExpression>, Vec<ParseError>) {
        let mut nodes = Vec::new();

        while !self.current().is(TokenClass::EndOfInput) {
            let node = match self.current().class {
                TokenClass::NamedColor => Node::NamedColor(self.parse_named_color()),
                TokenClass::Sharp => Node::Hex(self.parse_hex()),
                TokenClass::Rgba => Node::Rgba(self.parse_rgba()),
                TokenClass::Hsla => Node::Hsla(self.parse_hsla()),
                TokenClass::Hwb => Node::Hwb(self.parse_hwb()),
                TokenClass::Xyz => Node::Xyz(self.parse_xyz()),
                TokenClass::Lab => Node::Lab(self.parse_lab()),
                _ => {
                    self.advance();
                    continue;
                }
            };
            log::debug!("parsed {} node: {}", node.kind(), node);
            nodes.push(node);
        }

        let expression = match nodes.len() {
            1 => nodes.pop().map(ColorExpression::new),
            0 => {
                self.error(
                    ParseErrorCategory::TooShortNodes,
                    "invalid syntax: too short number of nodes.",
                );
                None
            }
            _ => {
                self.error(
                    ParseErrorCategory::TooManyNodes,
                    "invalid syntax: too many number of nodes.",
                );
                None
            }
        };

        (expression, self.errors)
    }

    fn parse_named_color(&mut self) -> NamedColorNode {
        let name = self.current().text.to_string();
        self.advance();
        NamedColorNode { name }
    }

    /// `#` followed by number and string tokens with nothing in between.
    fn parse_hex(&mut self) -> HexNode {
        let mut body = String::new();
        while matches!(
            self.token_at(self.pos + 1).class,
            TokenClass::Number | TokenClass::String
        ) {
            self.pos += 1;
            body.push_str(self.current().text);
        }
        self.advance();

        if !body.chars().all(|c| c.is_ascii_hexdigit()) {
            self.error(
                ParseErrorCategory::HexParsing,
                format!("invalid HEX value: {body} is not hexadecimal"),
            );
            return HexNode::zero();
        }

        let pairs: Vec<String> = match body.len() {
            3 | 4 => body.chars().map(|c| format!("{c}{c}")).collect(),
            6 | 8 => body
                .as_bytes()
                .chunks(2)
                .map(|pair| String::from_utf8_lossy(pair).into_owned())
                .collect(),
            _ => {
                self.error(ParseErrorCategory::HexParsing, "invalid HEX value length");
                return HexNode::zero();
            }
        };

        let mut pairs = pairs.into_iter();
        HexNode {
            r: pairs.next().unwrap_or_default(),
            g: pairs.next().unwrap_or_default(),
            b: pairs.next().unwrap_or_default(),
            alpha: pairs.next(),
        }
    }

    fn parse_rgba(&mut self) -> RgbaNode {
        let args = self.parse_arguments(&RGBA_FORM);
        let mut node = RgbaNode {
            name: args.name,
            ..Default::default()
        };
        let Some(values) = args.values else {
            return node;
        };
        if values[..3].iter().any(|v| v.unit.is_some()) {
            self.form_error(&RGBA_FORM, "units are not allowed on rgb channels");
            return node;
        }

        let mut values = values.into_iter();
        node.r = values.next().unwrap_or_default();
        node.g = values.next().unwrap_or_default();
        node.b = values.next().unwrap_or_default();
        node.alpha = values.next();
        node
    }

    fn parse_hsla(&mut self) -> HslaNode {
        let args = self.parse_arguments(&HSLA_FORM);
        let mut node = HslaNode {
            name: args.name,
            ..Default::default()
        };
        if let Some(values) = args.values {
            let mut values = values.into_iter();
            node.h = values.next().unwrap_or_default();
            node.s = values.next().unwrap_or_default();
            node.l = values.next().unwrap_or_default();
            node.alpha = values.next();
        }
        node
    }

    fn parse_hwb(&mut self) -> HwbNode {
        let args = self.parse_arguments(&HWB_FORM);
        let mut node = HwbNode {
            name: args.name,
            ..Default::default()
        };
        if let Some(values) = args.values {
            let mut values = values.into_iter();
            node.h = values.next().unwrap_or_default();
            node.w = values.next().unwrap_or_default();
            node.b = values.next().unwrap_or_default();
            node.alpha = values.next();
        }
        node
    }

    fn parse_xyz(&mut self) -> XyzNode {
        let args = self.parse_arguments(&XYZ_FORM);
        let mut node = XyzNode {
            name: args.name,
            ..Default::default()
        };
        if let Some(values) = args.values {
            let mut values = values.into_iter();
            node.x = values.next().unwrap_or_default();
            node.y = values.next().unwrap_or_default();
            node.z = values.next().unwrap_or_default();
        }
        node
    }

    fn parse_lab(&mut self) -> LabNode {
        let args = self.parse_arguments(&LAB_FORM);
        let mut node = LabNode {
            name: args.name,
            ..Default::default()
        };
        if let Some(values) = args.values {
            let mut values = values.into_iter();
            node.l = values.next().unwrap_or_default();
            node.a = values.next().unwrap_or_default();
            node.b = values.next().unwrap_or_default();
            node.alpha = values.next();
        }
        node
    }

    /// Reads `name ( value [unit] , ... )` for any color function.
    ///
    /// Separators are any non-value tokens between values, so `,`, spaces
    /// and `/` all work.
    fn parse_arguments(&mut self, form: &FunctionForm) -> Arguments {
        if !self.current().is(form.class) {
            while !self.current().is(form.class) && !self.current().is(TokenClass::EndOfInput) {
                self.advance();
            }
            if !self.current().is(form.class) {
                self.form_error(form, &format!("{} not found", form.spelling));
                return Arguments {
                    name: form.name.to_string(),
                    values: None,
                };
            }
        }

        let name = self.current().text.to_string();
        if !self.expect_peek(TokenClass::LParen) {
            self.form_error(form, "( not found.");
        }
        self.advance();

        let mut values = Vec::new();
        loop {
            match self.current().class {
                TokenClass::RParen => {
                    self.advance();
                    break;
                }
                TokenClass::EndOfInput => {
                    self.form_error(form, ") not found.");
                    break;
                }
                TokenClass::Number | TokenClass::String => values.push(self.parse_value()),
                TokenClass::Comma => {
                    self.advance();
                    if self.current().is(TokenClass::Comma) {
                        self.form_error(form, "too many commas.");
                        while self.current().is(TokenClass::Comma) {
                            self.advance();
                        }
                    }
                }
                _ => self.advance(),
            }
        }

        if form.accepts(values.len()) {
            Arguments {
                name,
                values: Some(values),
            }
        } else {
            self.form_error(form, "invalid number of values");
            Arguments { name, values: None }
        }
    }

    /// A number followed by an optional unit. Text that is not a number
    /// yields an empty value and a `VALUE_PARSING` error.
    fn parse_value(&mut self) -> Value {
        let token = self.current();
        let mut value = Value::default();
        if is_numeric(token.text) {
            value.number = token.text.to_string();
        } else {
            self.error(
                ParseErrorCategory::ValueParsing,
                format!("the value: {} is not numeric", token.text),
            );
        }
        self.advance();

        if let Some(unit) = value_unit(self.current().class) {
            value.unit = Some(unit);
            self.advance();
        }
        value
    }
}

fn value_unit(class: TokenClass) -> Option<ValueUnit> {
    match class {
        TokenClass::Percent => Some(ValueUnit::Percent),
        TokenClass::Turn => Some(ValueUnit::Turn),
        TokenClass::Deg => Some(ValueUnit::Deg),
        TokenClass::Rad => Some(ValueUnit::Rad),
        TokenClass::Grad => Some(ValueUnit::Grad),
        _ => None,
    }
}

/// Plain decimal literals only; `inf` and `nan` are rejected.
fn is_numeric(text: &str) -> bool {
    text.bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-'))
        && text.parse::<f64>().is_ok()
}
