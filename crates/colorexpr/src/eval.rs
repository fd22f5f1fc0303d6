//! Evaluation of a parsed [`ColorExpression`] into a [`ColorSpace`].
//!
//! The evaluator trusts the parser: it runs only on error-free output.
//! Hue channels keep the unit they were written with, and saturation,
//! lightness, whiteness and blackness keep their `%`. Both are normalized
//! later, when a conversion reads them.

use colorspace::{Angle, AngleUnit, ColorSpace, Hsla, Hwb, Lab, Ratio, Rgba, Xyz};

use crate::parser::keywords::named_color;
use crate::parser::{
    ColorExpression, HexNode, HslaNode, HwbNode, LabNode, NamedColorNode, Node, RgbaNode, Value,
    ValueUnit, XyzNode,
};

/// Evaluates a color expression.
///
/// # Panics
///
/// Panics if an RGB channel carries a unit. The parser rejects such input,
/// so this only fires on hand-built ASTs.
///
/// # Examples
///
/// ```
/// use colorexpr::eval::evaluate;
/// use colorexpr::parser::{parse_tokens, scan};
/// use colorexpr::colorspace::ColorSpace;
///
/// let (expr, _) = parse_tokens(&scan("#ff8800"));
/// let color = evaluate(&expr.unwrap());
/// assert!(matches!(color, ColorSpace::Rgba(c) if c.g == 136.0));
/// ```
pub fn evaluate(expression: &ColorExpression) -> ColorSpace {
    let color = match &expression.node {
        Node::NamedColor(node) => eval_named(node),
        Node::Hex(node) => eval_hex(node),
        Node::Rgba(node) => eval_rgba(node),
        Node::Hsla(node) => eval_hsla(node),
        Node::Hwb(node) => eval_hwb(node),
        Node::Xyz(node) => eval_xyz(node),
        Node::Lab(node) => eval_lab(node),
    };
    log::debug!("evaluated {} to {:?}", expression, color);
    color
}

fn eval_named(node: &NamedColorNode) -> ColorSpace {
    let (r, g, b, alpha) = named_color(&node.name).unwrap_or((0, 0, 0, 255));
    Rgba::new(r.into(), g.into(), b.into(), f64::from(alpha) / 255.0).into()
}

fn hex_channel(pair: &str) -> f64 {
    u8::from_str_radix(pair, 16).map(f64::from).unwrap_or(0.0)
}

fn eval_hex(node: &HexNode) -> ColorSpace {
    let alpha = node
        .alpha
        .as_deref()
        .map_or(1.0, |pair| hex_channel(pair) / 255.0);
    Rgba::new(
        hex_channel(&node.r),
        hex_channel(&node.g),
        hex_channel(&node.b),
        alpha,
    )
    .into()
}

fn unitless(value: &Value) -> f64 {
    assert!(
        value.unit.is_none(),
        "rgb channel `{value}` carries a unit the parser should have rejected"
    );
    value.to_f64()
}

/// Alpha as a fraction. `50%` reads as `0.5`; a missing alpha is opaque.
fn alpha(value: Option<&Value>) -> f64 {
    match value {
        Some(v) if v.unit == Some(ValueUnit::Percent) => v.to_f64() / 100.0,
        Some(v) => v.to_f64(),
        None => 1.0,
    }
}

/// A `%` is no angle unit and reads as degrees.
fn hue(value: &Value) -> Angle {
    let unit = value
        .unit
        .and_then(|unit| AngleUnit::from_css(unit.as_str()))
        .unwrap_or(AngleUnit::None);
    Angle::new(value.to_f64(), unit)
}

/// `50%` stays a percentage, a bare `0.5` is a fraction.
fn ratio(value: &Value) -> Ratio {
    match value.unit {
        Some(ValueUnit::Percent) => Ratio::percent(value.to_f64()),
        _ => Ratio::new(value.to_f64()),
    }
}

fn eval_rgba(node: &RgbaNode) -> ColorSpace {
    Rgba::new(
        unitless(&node.r),
        unitless(&node.g),
        unitless(&node.b),
        alpha(node.alpha.as_ref()),
    )
    .into()
}

fn eval_hsla(node: &HslaNode) -> ColorSpace {
    Hsla::new(
        hue(&node.h),
        ratio(&node.s),
        ratio(&node.l),
        alpha(node.alpha.as_ref()),
    )
    .into()
}

fn eval_hwb(node: &HwbNode) -> ColorSpace {
    Hwb::new(
        hue(&node.h),
        ratio(&node.w),
        ratio(&node.b),
        alpha(node.alpha.as_ref()),
    )
    .into()
}

fn eval_xyz(node: &XyzNode) -> ColorSpace {
    Xyz::new(node.x.to_f64(), node.y.to_f64(), node.z.to_f64(), 1.0).into()
}

fn eval_lab(node: &LabNode) -> ColorSpace {
    Lab::new(
        node.l.to_f64(),
        node.a.to_f64(),
        node.b.to_f64(),
        alpha(node.alpha.as_ref()),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value(number: &str, unit: Option<ValueUnit>) -> Value {
        Value::new(number, unit)
    }

    #[test]
    fn unknown_name_is_black() {
        let node = NamedColorNode {
            name: "notacolor".to_string(),
        };
        assert_eq!(eval_named(&node), ColorSpace::Rgba(Rgba::rgb(0.0, 0.0, 0.0)));
    }

    #[test]
    fn transparent_has_zero_alpha() {
        let node = NamedColorNode {
            name: "transparent".to_string(),
        };
        assert_eq!(eval_named(&node), ColorSpace::Rgba(Rgba::zero()));
    }

    #[test]
    fn hex_alpha_is_a_byte() {
        let node = HexNode {
            r: "ff".to_string(),
            g: "00".to_string(),
            b: "00".to_string(),
            alpha: Some("80".to_string()),
        };
        let ColorSpace::Rgba(color) = eval_hex(&node) else {
            panic!("hex must evaluate to rgba");
        };
        assert_eq!(color.r, 255.0);
        assert!((color.alpha - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn percent_alpha() {
        assert_eq!(alpha(Some(&value("50", Some(ValueUnit::Percent)))), 0.5);
        assert_eq!(alpha(Some(&value("0.25", None))), 0.25);
        assert_eq!(alpha(None), 1.0);
    }

    #[test]
    fn hue_keeps_unit() {
        let angle = hue(&value("30", Some(ValueUnit::Turn)));
        assert_eq!(angle, Angle::new(30.0, AngleUnit::Turn));
        assert_eq!(hue(&value("90", None)).unit, AngleUnit::None);
        assert_eq!(hue(&value("90", Some(ValueUnit::Percent))).unit, AngleUnit::None);
    }

    #[test]
    fn percent_channels_keep_scale() {
        assert_eq!(ratio(&value("50", Some(ValueUnit::Percent))), Ratio::percent(50.0));
        assert_eq!(ratio(&value("0.5", None)), Ratio::new(0.5));
    }

    #[test]
    #[should_panic(expected = "carries a unit")]
    fn rgb_unit_is_an_invariant_break() {
        let node = RgbaNode {
            name: "rgb".to_string(),
            r: value("10", Some(ValueUnit::Percent)),
            ..Default::default()
        };
        eval_rgba(&node);
    }

    #[test]
    fn xyz_is_opaque() {
        let node = XyzNode {
            name: "xyz".to_string(),
            x: value("0.5", None),
            y: value("0.5", None),
            z: value("0.5", None),
        };
        assert_eq!(eval_xyz(&node), ColorSpace::Xyz(Xyz::new(0.5, 0.5, 0.5, 1.0)));
    }
}
