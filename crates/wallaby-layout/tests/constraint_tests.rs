//! Tests for relative constraints: solver arithmetic, fan-in, the
//! static-position guard, attach deferral, and disposal.

use std::rc::Rc;

use wallaby_css::LengthExt;
use wallaby_dom::{BoxMetrics, Document, ElementId};
use wallaby_layout::{
    Autolayout, ConstraintAttribute, DimensionSide, HorizontalSide, LayoutError, SymbolicRelation,
    VerticalSide,
};

/// Shorthand for an absolute rect.
fn rect(left: f64, top: f64, width: f64, height: f64) -> BoxMetrics {
    BoxMetrics {
        left,
        top,
        width,
        height,
    }
}

/// A positioned parent with two absolutely positioned children.
struct Scene {
    layout: Autolayout,
    a: ElementId,
    b: ElementId,
    a_uid: String,
}

fn setup() -> Scene {
    let document = Rc::new(Document::new());
    let parent = document.create_element("div");
    let a = document.create_element("div");
    let b = document.create_element("div");
    document.append_child(document.root(), parent);
    document.append_child(parent, a);
    document.append_child(parent, b);

    document.set_computed_style(parent, "position", "relative");
    document.set_computed_style(a, "position", "absolute");
    document.set_computed_style(b, "position", "absolute");

    document.set_metrics(parent, rect(0.0, 0.0, 800.0, 600.0));
    document.set_metrics(a, rect(20.0, 10.0, 50.0, 40.0));
    document.set_metrics(b, rect(100.0, 200.0, 100.0, 80.0));

    let a_uid = document.uid(a);
    Scene {
        layout: Autolayout::new(document),
        a,
        b,
        a_uid,
    }
}

#[test]
fn test_right_to_left_subtracts_own_width() {
    let scene = setup();
    let layout = &scene.layout;

    let _ = layout
        .view(scene.a)
        .right_to(HorizontalSide::Left, scene.b, 0.px(), 1.0)
        .unwrap();

    // a's computed left must equal b.absolute_left - a.client_width.
    let class = format!("{}_left", scene.a_uid);
    assert_eq!(
        layout.engine().declaration(&class, "left"),
        Some("50px".to_string())
    );

    // Moving b re-triggers the computation through its box observer.
    layout
        .document()
        .set_metrics(scene.b, rect(150.0, 200.0, 100.0, 80.0));
    assert_eq!(
        layout.engine().declaration(&class, "left"),
        Some("100px".to_string())
    );
}

#[test]
fn test_far_edge_relation_tracks_own_resize() {
    let scene = setup();
    let layout = &scene.layout;

    let _ = layout
        .view(scene.a)
        .right_to(HorizontalSide::Left, scene.b, 0.px(), 1.0)
        .unwrap();

    // Growing a moves its own right edge, so the same relation must
    // re-fire from a's box observer and re-subtract the new width.
    layout
        .document()
        .set_metrics(scene.a, rect(20.0, 10.0, 60.0, 40.0));

    let class = format!("{}_left", scene.a_uid);
    assert_eq!(
        layout.engine().declaration(&class, "left"),
        Some("40px".to_string())
    );
}

#[test]
fn test_left_to_left_tracks_destination_edge() {
    let scene = setup();
    let layout = &scene.layout;

    let _ = layout
        .view(scene.a)
        .left_to(HorizontalSide::Left, scene.b, 4.px(), 1.0)
        .unwrap();

    // offset_in_parent(20) + (b.left(100) - a.left(20)) + 4 = 104
    let class = format!("{}_left", scene.a_uid);
    assert_eq!(
        layout.engine().declaration(&class, "left"),
        Some("104px".to_string())
    );
}

#[test]
fn test_center_to_center_alignment() {
    let scene = setup();
    let layout = &scene.layout;

    let _ = layout
        .view(scene.a)
        .center_x_to(HorizontalSide::Center, scene.b, 0.px(), 1.0)
        .unwrap();

    // a center = 45, b center = 150: left moves by the difference.
    let class = format!("{}_left", scene.a_uid);
    assert_eq!(
        layout.engine().declaration(&class, "left"),
        Some("125px".to_string())
    );
}

#[test]
fn test_vertical_relation_drives_top() {
    let scene = setup();
    let layout = &scene.layout;

    let _ = layout
        .view(scene.a)
        .top_to(VerticalSide::Bottom, scene.b, 0.px(), 1.0)
        .unwrap();

    // offset_top(10) + (b.bottom(280) - a.top(10)) = 280
    let class = format!("{}_top", scene.a_uid);
    assert_eq!(
        layout.engine().declaration(&class, "top"),
        Some("280px".to_string())
    );
}

#[test]
fn test_dimension_relation_multiplies_destination_size() {
    let scene = setup();
    let layout = &scene.layout;

    let _ = layout
        .view(scene.a)
        .width_to(DimensionSide::Width, scene.b, 10.px(), 2.0)
        .unwrap();

    let class = format!("{}_width", scene.a_uid);
    assert_eq!(
        layout.engine().declaration(&class, "width"),
        Some("210px".to_string())
    );

    // Resizing the destination re-triggers.
    layout
        .document()
        .set_metrics(scene.b, rect(100.0, 200.0, 60.0, 80.0));
    assert_eq!(
        layout.engine().declaration(&class, "width"),
        Some("130px".to_string())
    );
}

#[test]
fn test_cross_axis_relation_is_an_explicit_error() {
    let scene = setup();

    let result = scene.layout.view(scene.a).relate(
        ConstraintAttribute::Left,
        ConstraintAttribute::Top,
        scene.b,
        0.px(),
        1.0,
    );

    assert_eq!(
        result.err(),
        Some(LayoutError::UnsupportedRelation {
            source_attribute: ConstraintAttribute::Left,
            destination_attribute: ConstraintAttribute::Top,
        })
    );

    let dimension_to_edge = scene.layout.view(scene.a).relate(
        ConstraintAttribute::Width,
        ConstraintAttribute::Left,
        scene.b,
        0.px(),
        1.0,
    );
    assert!(dimension_to_edge.is_err());
}

#[test]
fn test_fan_in_collapses_to_one_stored_constraint() {
    let scene = setup();
    let layout = &scene.layout;
    let c = layout.document().create_element("div");
    layout.document().append_child(layout.document().root(), c);
    layout.document().set_computed_style(c, "position", "absolute");

    let _ = layout
        .view(scene.a)
        .left_to(HorizontalSide::Left, scene.b, 0.px(), 1.0)
        .unwrap();
    let _ = layout
        .view(c)
        .left_to(HorizontalSide::Left, scene.b, 0.px(), 1.0)
        .unwrap();

    // Two dependents, same (destination, relation): one stored entry,
    // two handlers, one observer.
    let relation =
        SymbolicRelation::new(ConstraintAttribute::Left, ConstraintAttribute::Left);
    assert_eq!(layout.registry().stored_count(scene.b), 1);
    assert_eq!(layout.registry().handler_count(scene.b, relation), 2);
    assert!(layout.registry().has_observer(scene.b));
}

#[test]
fn test_static_position_guard_warns_once_and_rearms() {
    let scene = setup();
    let layout = &scene.layout;
    let document = layout.document();

    // Make a static: the constraint must not write, and must warn once.
    document.set_computed_style(scene.a, "position", "static");

    let _ = layout
        .view(scene.a)
        .left_to(HorizontalSide::Left, scene.b, 0.px(), 1.0)
        .unwrap();

    let class = format!("{}_left", scene.a_uid);
    assert_eq!(layout.engine().declaration(&class, "left"), None);
    assert_eq!(layout.warnings().emitted().len(), 1);

    // Further triggers while static stay silent.
    document.set_metrics(scene.b, rect(120.0, 200.0, 100.0, 80.0));
    assert_eq!(layout.warnings().emitted().len(), 1);
    assert_eq!(layout.engine().declaration(&class, "left"), None);

    // Once positioned, the next trigger writes and re-arms the warning.
    document.set_computed_style(scene.a, "position", "absolute");
    document.set_metrics(scene.b, rect(140.0, 200.0, 100.0, 80.0));
    assert!(layout.engine().declaration(&class, "left").is_some());
    assert_eq!(layout.warnings().emitted().len(), 1);

    // Going static again warns anew on the next trigger.
    document.set_computed_style(scene.a, "position", "static");
    document.set_metrics(scene.b, rect(160.0, 200.0, 100.0, 80.0));
    assert_eq!(layout.warnings().emitted().len(), 2);
}

#[test]
fn test_detached_source_defers_first_update_until_attach() {
    let document = Rc::new(Document::new());
    let parent = document.create_element("div");
    let orphan = document.create_element("div");
    let b = document.create_element("div");
    document.append_child(document.root(), parent);
    document.append_child(parent, b);

    document.set_computed_style(parent, "position", "relative");
    document.set_computed_style(orphan, "position", "absolute");
    document.set_metrics(parent, rect(0.0, 0.0, 800.0, 600.0));
    document.set_metrics(b, rect(100.0, 200.0, 100.0, 80.0));
    document.set_metrics(orphan, rect(20.0, 10.0, 50.0, 40.0));

    let layout = Autolayout::new(Rc::clone(&document));
    let uid = document.uid(orphan);

    let _ = layout
        .view(orphan)
        .left_to(HorizontalSide::Left, b, 0.px(), 1.0)
        .unwrap();

    // Detached: no write yet.
    let class = format!("{uid}_left");
    assert_eq!(layout.engine().declaration(&class, "left"), None);

    // Attaching runs the deferred first update.
    document.append_child(parent, orphan);
    assert_eq!(
        layout.engine().declaration(&class, "left"),
        Some("100px".to_string())
    );
}

#[test]
fn test_disposed_constraint_stops_tracking() {
    let scene = setup();
    let layout = &scene.layout;

    let handle = layout
        .view(scene.a)
        .left_to(HorizontalSide::Left, scene.b, 0.px(), 1.0)
        .unwrap();

    let class = format!("{}_left", scene.a_uid);
    assert_eq!(
        layout.engine().declaration(&class, "left"),
        Some("100px".to_string())
    );

    handle.dispose();
    layout
        .document()
        .set_metrics(scene.b, rect(300.0, 200.0, 100.0, 80.0));

    // The last written declaration stays but no longer tracks.
    assert_eq!(
        layout.engine().declaration(&class, "left"),
        Some("100px".to_string())
    );

    let relation =
        SymbolicRelation::new(ConstraintAttribute::Left, ConstraintAttribute::Left);
    assert_eq!(layout.registry().handler_count(scene.b, relation), 0);
}

#[test]
fn test_superview_relation_resolves_at_attach() {
    let document = Rc::new(Document::new());
    let parent = document.create_element("div");
    let child = document.create_element("div");
    document.append_child(document.root(), parent);

    document.set_computed_style(parent, "position", "relative");
    document.set_computed_style(child, "position", "absolute");
    document.set_metrics(parent, rect(0.0, 50.0, 800.0, 600.0));
    document.set_metrics(child, rect(0.0, 70.0, 50.0, 40.0));

    let layout = Autolayout::new(Rc::clone(&document));
    let uid = document.uid(child);

    let _ = layout.view(child).top_to_superview(5.px(), 1.0);

    // Detached: a no-op, not an error.
    let class = format!("{uid}_top");
    assert_eq!(layout.engine().declaration(&class, "top"), None);

    // offset_top(20) + (parent.top(50) - child.top(70)) + 5 = 5
    document.append_child(parent, child);
    assert_eq!(
        layout.engine().declaration(&class, "top"),
        Some("5px".to_string())
    );
}

#[test]
fn test_width_to_superview_tracks_parent_resize() {
    let document = Rc::new(Document::new());
    let parent = document.create_element("div");
    let child = document.create_element("div");
    document.append_child(document.root(), parent);
    document.append_child(parent, child);

    document.set_computed_style(parent, "position", "relative");
    document.set_metrics(parent, rect(0.0, 0.0, 400.0, 300.0));

    let layout = Autolayout::new(Rc::clone(&document));
    let uid = document.uid(child);

    let _ = layout.view(child).width_to_superview(0.px(), 0.5);

    let class = format!("{uid}_width");
    assert_eq!(
        layout.engine().declaration(&class, "width"),
        Some("200px".to_string())
    );

    document.set_metrics(parent, rect(0.0, 0.0, 600.0, 300.0));
    assert_eq!(
        layout.engine().declaration(&class, "width"),
        Some("300px".to_string())
    );
}
