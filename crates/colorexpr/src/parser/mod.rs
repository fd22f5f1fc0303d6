//! Parser for color expressions.
//!
//! This module contains the lexer, the keyword tables, the AST and the
//! recursive-descent grammar.

pub mod ast;
mod grammar;
pub mod keywords;
mod lexer;
mod token;

pub use ast::{
    ColorExpression, HexNode, HslaNode, HwbNode, LabNode, NamedColorNode, Node, RgbaNode, Value,
    ValueUnit, XyzNode,
};
pub use grammar::parse_tokens;
pub use lexer::{Lexer, scan};
pub use token::{Token, TokenClass};
