//! Tests for the facade crate and the helpers behind the `colorexpr-demo` binary.

use colorexpr_rs::log::LevelFilter;
use colorexpr_rs::{CliError, describe, parse, parse_log_level, processing};

#[test]
fn describe_red() {
    let (color, errors) = parse("#ff0000");
    assert!(errors.is_empty());
    insta::assert_snapshot!(describe(&color), @r"
    rgba: rgb(255,0,0,1)
    hsla: hsl(0 100% 50% / 1)
    hwb:  hwb(0 0% 0% / 1)
    xyz:  0.41246 0.21267 0.01933
    lab:  53.24 80.09 67.20
    contrast vs white: 4.00
    ");
}

#[test]
fn describe_has_one_line_per_space() {
    let (color, _) = parse("lab(50, -20, 30)");
    assert_eq!(describe(&color).lines().count(), 6);
}

#[test]
fn log_levels() {
    assert_eq!(parse_log_level("error").unwrap(), LevelFilter::Error);
    assert_eq!(parse_log_level(" Debug ").unwrap(), LevelFilter::Debug);
    assert!(matches!(
        parse_log_level("verbose"),
        Err(CliError::InvalidLogLevel(name)) if name == "verbose"
    ));
}

#[test]
fn facade_reexports_processing() {
    let (black, _) = parse("black");
    let (white, _) = parse("white");
    let ratio = processing::contrast_ratio(&black, &white);
    assert!((ratio - 21.0).abs() < 0.01);
}

#[test]
fn failure_message() {
    let err = CliError::Failed {
        failed: 1,
        total: 3,
    };
    assert_eq!(err.to_string(), "1 of 3 expressions failed to parse");
}
