//! End-to-end tests: text in, color space out.

use colorexpr::colorspace::{Angle, AngleUnit, Color, ColorSpace, Hsla, Lab, Ratio, Rgba};
use colorexpr::{ParseErrorCategory, parse, try_parse};

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

fn parse_ok(input: &str) -> ColorSpace {
    let (color, errors) = parse(input);
    assert!(errors.is_empty(), "{input:?} failed: {errors:?}");
    color
}

// ============================================================================
// Successful parses
// ============================================================================

#[test]
fn hex_color() {
    assert_eq!(parse_ok("#ff8800"), ColorSpace::Rgba(Rgba::rgb(255.0, 136.0, 0.0)));
    assert_eq!(parse_ok("#f80"), ColorSpace::Rgba(Rgba::rgb(255.0, 136.0, 0.0)));
}

#[test]
fn hex_alpha() {
    let color = parse_ok("#00000080");
    assert_close(color.alpha(), 128.0 / 255.0, 1e-9);
}

#[test]
fn rgba_function() {
    assert_eq!(
        parse_ok("rgba(12,34,56,0.5)"),
        ColorSpace::Rgba(Rgba::new(12.0, 34.0, 56.0, 0.5))
    );
    assert_eq!(
        parse_ok("rgb(255 0 0 / 50%)"),
        ColorSpace::Rgba(Rgba::new(255.0, 0.0, 0.0, 0.5))
    );
}

#[test]
fn hsla_keeps_literal_numbers_and_unit() {
    assert_eq!(
        parse_ok("hsla(30turn,100%,50%,0.5)"),
        ColorSpace::Hsla(Hsla::new(
            Angle::new(30.0, AngleUnit::Turn),
            Ratio::percent(100.0),
            Ratio::percent(50.0),
            0.5
        ))
    );
}

#[test]
fn percent_channels_convert_as_fractions() {
    let green = Rgba::rgb(0.0, 255.0, 0.0);
    assert_eq!(parse_ok("hsl(120, 100%, 50%)").to_rgba(), green);
    assert_eq!(parse_ok("hsl(120deg 100% 50%)").to_rgba(), green);
    assert_eq!(parse_ok("hwb(120 0% 0%)").to_rgba(), green);
    assert_eq!(
        parse_ok("hwb(0 50% 0%)").to_rgba(),
        Rgba::rgb(255.0, 128.0, 128.0)
    );
}

#[test]
fn percent_channels_render_as_written() {
    insta::assert_snapshot!(parse_ok("hsl(120, 100%, 50%)").to_string(), @"hsl(120 100% 50% / 1)");
    insta::assert_snapshot!(parse_ok("hwb(0.5turn 20% 30% / 50%)").to_string(), @"hwb(0.5turn 20% 30% / 0.5)");
}

#[test]
fn without_unit_normalizes_percent_channels() {
    let ColorSpace::Hsla(hsla) = parse_ok("hsl(0.5turn, 40%, 60%)") else {
        panic!("hsl must evaluate to hsla");
    };
    let plain = hsla.without_unit();
    assert_eq!(plain.h, Angle::degrees(180.0));
    assert_close(plain.s.value, 0.4, 1e-12);
    assert_close(plain.l.value, 0.6, 1e-12);
    assert!(!plain.s.percent && !plain.l.percent);
}

#[test]
fn named_colors() {
    assert_eq!(parse_ok("royalblue"), ColorSpace::Rgba(Rgba::rgb(65.0, 105.0, 225.0)));
    assert_eq!(parse_ok("transparent").alpha(), 0.0);
    assert_eq!(parse_ok("grey"), parse_ok("gray"));
}

#[test]
fn lab_with_negative_channel() {
    assert_eq!(
        parse_ok("lab(50, -20, 30)"),
        ColorSpace::Lab(Lab::new(50.0, -20.0, 30.0, 1.0))
    );
}

#[test]
fn xyz_white_point_is_white() {
    let rgba = parse_ok("xyz(0.95047, 1, 1.08883)").to_rgba();
    assert_close(rgba.r, 255.0, 1.0);
    assert_close(rgba.g, 255.0, 1.0);
    assert_close(rgba.b, 255.0, 1.0);
}

#[test]
fn hwb_fractions_convert() {
    let rgba = parse_ok("hwb(120, 0, 0)").to_rgba();
    assert_eq!((rgba.r, rgba.g, rgba.b), (0.0, 255.0, 0.0));
}

#[test]
fn parsed_hex_converts_to_hsla() {
    let hsla = parse_ok("#ff8800").to_hsla();
    assert_close(hsla.h.value, 32.0, 0.01);
    assert_close(hsla.s.fraction(), 1.0, 1e-9);
    assert_close(hsla.l.fraction(), 0.5, 1e-9);
}

#[test]
fn text_forms() {
    insta::assert_snapshot!(parse_ok("#ff8800").to_string(), @"rgb(255,136,0,1)");
    insta::assert_snapshot!(parse_ok("lab(0, 0, 0)").to_string(), @"rgb(0,0,0,1)");
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn failure_returns_sentinel() {
    let (color, errors) = parse("rgba(1,2,3,4,5)");
    assert_eq!(color, ColorSpace::Rgba(Rgba::zero()));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].category, ParseErrorCategory::RgbaParsing);
}

#[test]
fn empty_input() {
    for input in ["", "    "] {
        let (color, errors) = parse(input);
        assert_eq!(color, ColorSpace::Rgba(Rgba::zero()));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].category, ParseErrorCategory::TooShortNodes);
    }
}

#[test]
fn try_parse_collects_errors() {
    let err = try_parse("rgb(1,,2)").unwrap_err();
    assert_eq!(
        err.categories(),
        vec![ParseErrorCategory::RgbaParsing, ParseErrorCategory::RgbaParsing]
    );
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid RGBA syntax. too many commas.; invalid RGBA syntax. invalid number of values"
    );
}

#[test]
fn try_parse_success() {
    let color = try_parse("hsl(120, 1, 0.5)").expect("valid");
    let rgba = color.to_rgba();
    assert_eq!((rgba.r, rgba.g, rgba.b), (0.0, 255.0, 0.0));
}
