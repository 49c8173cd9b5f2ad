//! Tests for the absolute layout setters: anchor math, reactive
//! propagation, spacing custom properties, and breakpoint scoping.

use std::rc::Rc;

use wallaby_css::{Breakpoint, Length, LengthExt, PositionValue, SheetRule};
use wallaby_dom::{Document, ElementId};
use wallaby_layout::{Autolayout, HorizontalSide, VerticalSide};
use wallaby_reactive::Value;

/// A document with one attached element plus its engine.
fn setup() -> (Autolayout, ElementId, String) {
    let document = Rc::new(Document::new());
    let element = document.create_element("div");
    document.append_child(document.root(), element);
    let uid = document.uid(element);
    (Autolayout::new(document), element, uid)
}

#[test]
fn test_top_anchor_math() {
    let (layout, element, uid) = setup();
    let view = layout.view(element);

    let _ = view.top(10.px(), VerticalSide::Center, 1.0, &[]);
    assert_eq!(
        layout.engine().declaration(&format!("{uid}_top"), "top"),
        Some("calc(50% + 10px)".to_string())
    );

    let _ = view.top((-10).px(), VerticalSide::Center, 1.0, &[]);
    assert_eq!(
        layout.engine().declaration(&format!("{uid}_top"), "top"),
        Some("calc(50% - 10px)".to_string())
    );

    let _ = view.top(0.px(), VerticalSide::Top, 1.0, &[]);
    assert_eq!(
        layout.engine().declaration(&format!("{uid}_top"), "top"),
        Some("0px".to_string())
    );
}

#[test]
fn test_right_uses_mirrored_anchor() {
    let (layout, element, uid) = setup();

    let _ = layout.view(element).right(10.px(), HorizontalSide::Left, 1.0, &[]);
    assert_eq!(
        layout.engine().declaration(&format!("{uid}_right"), "right"),
        Some("calc(100% + 10px)".to_string())
    );
}

#[test]
fn test_multiplier_wraps_the_whole_expression() {
    let (layout, element, uid) = setup();

    let _ = layout.view(element).top(10.px(), VerticalSide::Bottom, 2.0, &[]);
    assert_eq!(
        layout.engine().declaration(&format!("{uid}_top"), "top"),
        Some("calc((100% + 10px) * 2)".to_string())
    );
}

#[test]
fn test_class_assignment_is_idempotent() {
    let (layout, element, uid) = setup();
    let view = layout.view(element);

    let _ = view.top(10.px(), VerticalSide::Top, 1.0, &[]);
    let _ = view.top(20.px(), VerticalSide::Top, 1.0, &[]);

    let class = format!("{uid}_top");
    let classes = layout.document().classes(element);
    assert_eq!(
        classes.iter().filter(|c| **c == class).count(),
        1,
        "class must not be duplicated"
    );
    assert_eq!(layout.engine().rule_count(), 1);
}

#[test]
fn test_reactive_value_propagates_same_tick() {
    let (layout, element, uid) = setup();
    let view = layout.view(element);
    let top_value = Value::new(Length::px(10.0));

    let _ = view.top(&top_value, VerticalSide::Top, 1.0, &[]);
    let _ = view.left(5.px(), HorizontalSide::Left, 1.0, &[]);

    top_value.set(Length::px(42.0));

    assert_eq!(
        layout.engine().declaration(&format!("{uid}_top"), "top"),
        Some("42px".to_string())
    );
    // Sibling properties are untouched by the write.
    assert_eq!(
        layout.engine().declaration(&format!("{uid}_left"), "left"),
        Some("5px".to_string())
    );
}

#[test]
fn test_reactive_side_and_multiplier_retrigger() {
    let (layout, element, uid) = setup();
    let side = Value::new(VerticalSide::Top);
    let multiplier = Value::new(1.0_f64);

    let _ = layout.view(element).top(10.px(), &side, &multiplier, &[]);

    side.set(VerticalSide::Center);
    assert_eq!(
        layout.engine().declaration(&format!("{uid}_top"), "top"),
        Some("calc(50% + 10px)".to_string())
    );

    multiplier.set(3.0);
    assert_eq!(
        layout.engine().declaration(&format!("{uid}_top"), "top"),
        Some("calc((50% + 10px) * 3)".to_string())
    );
}

#[test]
fn test_padding_sides_do_not_clobber_each_other() {
    let (layout, element, uid) = setup();
    let view = layout.view(element);

    let _ = view.padding_top(5.px(), &[]);
    let _ = view.padding_left(3.px(), &[]);

    let shorthand =
        "var(--padding-top, 0) var(--padding-right, 0) var(--padding-bottom, 0) var(--padding-left, 0)";

    let top_class = format!("{uid}_padding-top");
    assert_eq!(
        layout.engine().declaration(&top_class, "--padding-top"),
        Some("5px".to_string())
    );
    assert_eq!(
        layout.engine().declaration(&top_class, "padding"),
        Some(shorthand.to_string())
    );

    let left_class = format!("{uid}_padding-left");
    assert_eq!(
        layout.engine().declaration(&left_class, "--padding-left"),
        Some("3px".to_string())
    );
    assert_eq!(
        layout.engine().declaration(&left_class, "padding"),
        Some(shorthand.to_string())
    );

    // The first side's rule is still installed.
    assert_eq!(layout.engine().rule_count(), 2);
}

#[test]
fn test_margin_aggregate_sets_all_four_sides() {
    let (layout, element, uid) = setup();

    let _ = layout.view(element).margin(4.px(), &[]);

    for side in ["top", "right", "bottom", "left"] {
        let class = format!("{uid}_margin-{side}");
        assert_eq!(
            layout.engine().declaration(&class, &format!("--margin-{side}")),
            Some("4px".to_string()),
            "margin-{side} missing"
        );
    }
}

#[test]
fn test_center_x_writes_anchor_and_translate_companion() {
    let (layout, element, uid) = setup();

    let _ = layout
        .view(element)
        .center_x(0.px(), HorizontalSide::Center, 1.0, &[]);

    assert_eq!(
        layout.engine().declaration(&format!("{uid}_left"), "left"),
        Some("50%".to_string())
    );
    let translate = format!("{uid}_translate-x");
    assert_eq!(
        layout.engine().declaration(&translate, "--translate-x"),
        Some("-50%".to_string())
    );
    assert_eq!(
        layout.engine().declaration(&translate, "translate"),
        Some("var(--translate-x, 0) var(--translate-y, 0)".to_string())
    );
}

#[test]
fn test_center_both_axes_keeps_both_translate_rules() {
    let (layout, element, uid) = setup();

    let _ = layout.view(element).center(0.px(), 1.0, &[]);

    assert_eq!(
        layout
            .engine()
            .declaration(&format!("{uid}_translate-x"), "--translate-x"),
        Some("-50%".to_string())
    );
    assert_eq!(
        layout
            .engine()
            .declaration(&format!("{uid}_translate-y"), "--translate-y"),
        Some("-50%".to_string())
    );
}

#[test]
fn test_center_with_offset_always_renders_full_calc() {
    let (layout, element, uid) = setup();

    let _ = layout
        .view(element)
        .center_y(10.px(), VerticalSide::Center, 1.0, &[]);

    assert_eq!(
        layout.engine().declaration(&format!("{uid}_top"), "top"),
        Some("calc((50% + 10px) * 1)".to_string())
    );
}

#[test]
fn test_width_to_parent_forms() {
    let (layout, element, uid) = setup();
    let view = layout.view(element);
    let class = format!("{uid}_width");

    let _ = view.width_to_parent(0.px(), 1.0, &[]);
    assert_eq!(
        layout.engine().declaration(&class, "width"),
        Some("100%".to_string())
    );

    let _ = view.width_to_parent(8.px(), 1.0, &[]);
    assert_eq!(
        layout.engine().declaration(&class, "width"),
        Some("calc(100% + 8px)".to_string())
    );

    let _ = view.width_to_parent((-8).px(), 1.0, &[]);
    assert_eq!(
        layout.engine().declaration(&class, "width"),
        Some("calc(100% - 8px)".to_string())
    );

    let _ = view.width_to_parent(0.px(), 0.5, &[]);
    assert_eq!(
        layout.engine().declaration(&class, "width"),
        Some("50%".to_string())
    );
}

#[test]
fn test_edges_negates_far_sides() {
    let (layout, element, uid) = setup();

    let _ = layout.view(element).edges(10.px(), &[]);

    let engine = layout.engine();
    assert_eq!(
        engine.declaration(&format!("{uid}_top"), "top"),
        Some("10px".to_string())
    );
    assert_eq!(
        engine.declaration(&format!("{uid}_left"), "left"),
        Some("10px".to_string())
    );
    assert_eq!(
        engine.declaration(&format!("{uid}_right"), "right"),
        Some("-10px".to_string())
    );
    assert_eq!(
        engine.declaration(&format!("{uid}_bottom"), "bottom"),
        Some("-10px".to_string())
    );
}

#[test]
fn test_reactive_edges_track_negation() {
    let (layout, element, uid) = setup();
    let inset = Value::new(Length::px(10.0));

    let _ = layout.view(element).edges(&inset, &[]);
    inset.set(Length::px(4.0));

    assert_eq!(
        layout.engine().declaration(&format!("{uid}_top"), "top"),
        Some("4px".to_string())
    );
    assert_eq!(
        layout.engine().declaration(&format!("{uid}_bottom"), "bottom"),
        Some("-4px".to_string())
    );
}

#[test]
fn test_breakpoint_scoped_rule_is_media_grouped_and_important() {
    let (layout, element, uid) = setup();
    let breakpoints = [Breakpoint::extra_small()];

    let _ = layout
        .view(element)
        .top(10.px(), VerticalSide::Top, 1.0, &breakpoints);

    let class = format!("{uid}_top_xs");
    match layout.engine().rule_for_class(&class) {
        Some(SheetRule::Media(media)) => {
            assert_eq!(media.rule.value_of("top"), Some("10px!important"));
        }
        other => panic!("expected a media rule, got {other:?}"),
    }
    // The scoped class is distinct from the unscoped one.
    assert!(layout.document().classes(element).contains(&class));
}

#[test]
fn test_keyword_and_opacity_setters() {
    let (layout, element, uid) = setup();
    let view = layout.view(element);

    let _ = view.position(PositionValue::Absolute, &[]);
    let _ = view.opacity(0.5, &[]);

    assert_eq!(
        layout
            .engine()
            .declaration(&format!("{uid}_position"), "position"),
        Some("absolute".to_string())
    );
    assert_eq!(
        layout.engine().declaration(&format!("{uid}_opacity"), "opacity"),
        Some("0.5".to_string())
    );
}

#[test]
fn test_reactive_keyword_retriggers() {
    let (layout, element, uid) = setup();
    let position = Value::new(PositionValue::Relative);

    let _ = layout.view(element).position(&position, &[]);
    position.set(PositionValue::Fixed);

    assert_eq!(
        layout
            .engine()
            .declaration(&format!("{uid}_position"), "position"),
        Some("fixed".to_string())
    );
}

#[test]
fn test_disposed_handle_stops_updates() {
    let (layout, element, uid) = setup();
    let top_value = Value::new(Length::px(10.0));

    let handle = layout.view(element).top(&top_value, VerticalSide::Top, 1.0, &[]);
    handle.dispose();

    top_value.set(Length::px(99.0));

    // The last written declaration stays installed but no longer updates.
    assert_eq!(
        layout.engine().declaration(&format!("{uid}_top"), "top"),
        Some("10px".to_string())
    );
    assert_eq!(top_value.subscriber_count(), 0);
}
