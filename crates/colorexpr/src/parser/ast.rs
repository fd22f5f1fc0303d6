//! AST for color expressions.
//!
//! Nodes keep the literal text the user wrote. Turning that text into
//! numbers is the evaluator's job.

use std::fmt;

/// A unit written after a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueUnit {
    Percent,
    Turn,
    Deg,
    Rad,
    Grad,
}

impl ValueUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueUnit::Percent => "%",
            ValueUnit::Turn => "turn",
            ValueUnit::Deg => "deg",
            ValueUnit::Rad => "rad",
            ValueUnit::Grad => "grad",
        }
    }
}

/// A numeric literal with an optional unit, such as `30turn` or `50%`.
///
/// An empty `number` stands for a value that was missing or rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Value {
    pub number: String,
    pub unit: Option<ValueUnit>,
}

impl Value {
    pub fn new(number: impl Into<String>, unit: Option<ValueUnit>) -> Self {
        Self {
            number: number.into(),
            unit,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.number.is_empty()
    }

    /// The literal as a number. Empty values read as `0`.
    pub fn to_f64(&self) -> f64 {
        self.number.parse().unwrap_or(0.0)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("0")?;
        } else {
            f.write_str(&self.number)?;
        }
        if let Some(unit) = self.unit {
            f.write_str(unit.as_str())?;
        }
        Ok(())
    }
}

/// A CSS color keyword such as `royalblue`.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedColorNode {
    pub name: String,
}

/// A `#` color. Channels are always two hex digits after shorthand
/// expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct HexNode {
    pub r: String,
    pub g: String,
    pub b: String,
    pub alpha: Option<String>,
}

impl HexNode {
    /// `#000000`, the node left behind by a rejected hex body.
    pub fn zero() -> Self {
        Self {
            r: "00".to_string(),
            g: "00".to_string(),
            b: "00".to_string(),
            alpha: None,
        }
    }
}

/// `rgb(...)` or `rgba(...)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RgbaNode {
    /// The function name as written.
    pub name: String,
    pub r: Value,
    pub g: Value,
    pub b: Value,
    pub alpha: Option<Value>,
}

/// `hsl(...)` or `hsla(...)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HslaNode {
    pub name: String,
    pub h: Value,
    pub s: Value,
    pub l: Value,
    pub alpha: Option<Value>,
}

/// `hwb(...)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HwbNode {
    pub name: String,
    pub h: Value,
    pub w: Value,
    pub b: Value,
    pub alpha: Option<Value>,
}

/// `xyz(...)`. The grammar has no alpha channel for XYZ.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XyzNode {
    pub name: String,
    pub x: Value,
    pub y: Value,
    pub z: Value,
}

/// `lab(...)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabNode {
    pub name: String,
    pub l: Value,
    pub a: Value,
    pub b: Value,
    pub alpha: Option<Value>,
}

/// One recognized color syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    NamedColor(NamedColorNode),
    Hex(HexNode),
    Rgba(RgbaNode),
    Hsla(HslaNode),
    Hwb(HwbNode),
    Xyz(XyzNode),
    Lab(LabNode),
}

impl Node {
    /// Short name of the syntax, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::NamedColor(_) => "named",
            Node::Hex(_) => "hex",
            Node::Rgba(_) => "rgba",
            Node::Hsla(_) => "hsla",
            Node::Hwb(_) => "hwb",
            Node::Xyz(_) => "xyz",
            Node::Lab(_) => "lab",
        }
    }
}

/// The result of a successful parse: exactly one node.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorExpression {
    pub node: Node,
}

impl ColorExpression {
    pub fn new(node: Node) -> Self {
        Self { node }
    }
}

fn write_function(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    channels: [&Value; 3],
    alpha: Option<&Value>,
) -> fmt::Result {
    let [first, second, third] = channels;
    write!(f, "{name}({first},{second},{third}")?;
    if let Some(alpha) = alpha {
        write!(f, ",{alpha}")?;
    }
    f.write_str(")")
}

impl fmt::Display for NamedColorNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for HexNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}{}{}", self.r, self.g, self.b)?;
        if let Some(alpha) = &self.alpha {
            f.write_str(alpha)?;
        }
        Ok(())
    }
}

impl fmt::Display for RgbaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_function(f, &self.name, [&self.r, &self.g, &self.b], self.alpha.as_ref())
    }
}

impl fmt::Display for HslaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_function(f, &self.name, [&self.h, &self.s, &self.l], self.alpha.as_ref())
    }
}

impl fmt::Display for HwbNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_function(f, &self.name, [&self.h, &self.w, &self.b], self.alpha.as_ref())
    }
}

impl fmt::Display for XyzNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_function(f, &self.name, [&self.x, &self.y, &self.z], None)
    }
}

impl fmt::Display for LabNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_function(f, &self.name, [&self.l, &self.a, &self.b], self.alpha.as_ref())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::NamedColor(node) => fmt::Display::fmt(node, f),
            Node::Hex(node) => fmt::Display::fmt(node, f),
            Node::Rgba(node) => fmt::Display::fmt(node, f),
            Node::Hsla(node) => fmt::Display::fmt(node, f),
            Node::Hwb(node) => fmt::Display::fmt(node, f),
            Node::Xyz(node) => fmt::Display::fmt(node, f),
            Node::Lab(node) => fmt::Display::fmt(node, f),
        }
    }
}

impl fmt::Display for ColorExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.node, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(number: &str) -> Value {
        Value::new(number, None)
    }

    #[test]
    fn empty_value_renders_as_zero() {
        assert!(Value::default().is_empty());
        assert_eq!(Value::default().to_string(), "0");
        assert_eq!(Value::default().to_f64(), 0.0);
    }

    #[test]
    fn value_with_unit() {
        assert_eq!(Value::new("30", Some(ValueUnit::Turn)).to_string(), "30turn");
        assert_eq!(Value::new("50", Some(ValueUnit::Percent)).to_string(), "50%");
        assert_eq!(Value::new("-1.5", None).to_f64(), -1.5);
    }

    #[test]
    fn function_nodes_render() {
        let hsla = HslaNode {
            name: "hsl".to_string(),
            h: Value::new("0.4", Some(ValueUnit::Turn)),
            s: Value::new("100", Some(ValueUnit::Percent)),
            l: Value::new("40", Some(ValueUnit::Percent)),
            alpha: Some(value(".98765")),
        };
        assert_eq!(hsla.to_string(), "hsl(0.4turn,100%,40%,.98765)");

        let rgba = RgbaNode {
            name: "rgba".to_string(),
            ..Default::default()
        };
        assert_eq!(rgba.to_string(), "rgba(0,0,0)");

        let xyz = XyzNode {
            name: "xyz".to_string(),
            x: value("0.1"),
            y: value("0.2"),
            z: value("0.3"),
        };
        assert_eq!(xyz.to_string(), "xyz(0.1,0.2,0.3)");
    }

    #[test]
    fn hex_node_renders() {
        assert_eq!(HexNode::zero().to_string(), "#000000");
        let node = HexNode {
            r: "ff".to_string(),
            g: "88".to_string(),
            b: "00".to_string(),
            alpha: Some("80".to_string()),
        };
        assert_eq!(Node::Hex(node).to_string(), "#ff880080");
    }
}
