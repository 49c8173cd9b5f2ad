//! Tests for length values and breakpoints.

use wallaby_css::{Breakpoint, Length, LengthExt, Unit};

#[test]
fn test_length_renders_with_unit_suffix() {
    assert_eq!(Length::px(10.0).to_string(), "10px");
    assert_eq!(Length::percent(50.0).to_string(), "50%");
    assert_eq!(Length::new(1.5, Unit::Em).to_string(), "1.5em");
}

#[test]
fn test_length_drops_trailing_zero() {
    assert_eq!(Length::px(12.0).to_string(), "12px");
    assert_eq!(Length::px(12.25).to_string(), "12.25px");
}

#[test]
fn test_negation_preserves_unit() {
    let value = 10.percent();
    let negated = value.neg();

    assert_eq!(negated.value(), -10.0);
    assert_eq!(negated.unit(), Unit::Percent);
    assert_eq!(negated.neg(), value);
}

#[test]
fn test_abs_and_is_zero() {
    assert_eq!((-4).px().abs().to_string(), "4px");
    assert!(0.px().is_zero());
    assert!(!(0.1).px().is_zero());
}

#[test]
fn test_length_ext_sugar() {
    assert_eq!(10.px(), Length::px(10.0));
    assert_eq!(10.5.px(), Length::px(10.5));
    assert_eq!(100.percent(), Length::percent(100.0));
}

#[test]
fn test_named_breakpoint_queries() {
    assert_eq!(
        Breakpoint::extra_small().media_query(),
        "all and (max-width: 575px)"
    );
    assert_eq!(
        Breakpoint::small().media_query(),
        "all and (min-width: 576px) and (max-width: 767px)"
    );
    assert_eq!(
        Breakpoint::extra_extra_large().media_query(),
        "all and (min-width: 1400px)"
    );
}

#[test]
fn test_media_query_list_joins_with_commas() {
    let list =
        Breakpoint::media_query_list(&[Breakpoint::extra_small(), Breakpoint::small()]);
    assert_eq!(
        list,
        "all and (max-width: 575px), all and (min-width: 576px) and (max-width: 767px)"
    );
}

#[test]
fn test_class_token_sanitizes_forbidden_characters() {
    let custom = Breakpoint::custom("min-width: 30em", Some(Length::new(30.0, Unit::Em)), None);
    assert_eq!(custom.class_token(), "min_width__30em");
    assert_eq!(Breakpoint::medium().class_token(), "m");
}
