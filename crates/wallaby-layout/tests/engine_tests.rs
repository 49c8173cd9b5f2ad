//! Tests for the style engine's rule cache invariants.

use wallaby_css::{Breakpoint, SheetRule};
use wallaby_layout::{class_name, StyleEngine};

#[test]
fn test_set_rule_installs_one_rule() {
    let engine = StyleEngine::new();

    engine.set_rule("e1_top", &[], |rule| rule.declare("top", "10px"));

    assert_eq!(engine.rule_count(), 1);
    assert_eq!(engine.declaration("e1_top", "top"), Some("10px".to_string()));
}

#[test]
fn test_repeated_set_rule_replaces_instead_of_duplicating() {
    let engine = StyleEngine::new();

    for px in 1..=5 {
        let text = format!("{px}px");
        engine.set_rule("e1_top", &[], |rule| rule.declare("top", &text));
    }

    // After N sequential writes the sheet holds exactly one rule for the
    // class, containing the Nth value.
    assert_eq!(engine.rule_count(), 1);
    assert_eq!(engine.declaration("e1_top", "top"), Some("5px".to_string()));
}

#[test]
fn test_stale_cached_index_falls_back_to_selector_lookup() {
    let engine = StyleEngine::new();

    engine.set_rule("first", &[], |rule| rule.declare("top", "1px"));
    engine.set_rule("second", &[], |rule| rule.declare("top", "2px"));

    // Rewriting "first" deletes index 0, shifting "second" down and
    // making its cached index stale.
    engine.set_rule("first", &[], |rule| rule.declare("top", "3px"));
    engine.set_rule("second", &[], |rule| rule.declare("top", "4px"));

    assert_eq!(engine.rule_count(), 2);
    assert_eq!(engine.declaration("first", "top"), Some("3px".to_string()));
    assert_eq!(engine.declaration("second", "top"), Some("4px".to_string()));
}

#[test]
fn test_failed_insertion_is_not_cached() {
    let engine = StyleEngine::new();

    // A builder that declares nothing produces an uninsertable rule.
    engine.set_rule("empty", &[], |rule| rule);
    assert_eq!(engine.rule_count(), 0);

    // The next call for the class inserts fresh.
    engine.set_rule("empty", &[], |rule| rule.declare("top", "1px"));
    assert_eq!(engine.rule_count(), 1);
    assert_eq!(engine.declaration("empty", "top"), Some("1px".to_string()));
}

#[test]
fn test_breakpoints_produce_a_single_media_group() {
    let engine = StyleEngine::new();
    let breakpoints = [Breakpoint::extra_small(), Breakpoint::small()];

    engine.set_rule("e1_top_xs_s", &breakpoints, |rule| {
        rule.declare("top", "10px!important")
    });

    assert_eq!(engine.rule_count(), 1);
    match engine.rule_for_class("e1_top_xs_s") {
        Some(SheetRule::Media(media)) => {
            assert_eq!(media.breakpoints.len(), 2);
            assert_eq!(media.rule.value_of("top"), Some("10px!important"));
        }
        other => panic!("expected a media rule, got {other:?}"),
    }
}

#[test]
fn test_media_rule_replacement_keeps_single_group() {
    let engine = StyleEngine::new();
    let breakpoints = [Breakpoint::medium()];

    engine.set_rule("e1_top_m", &breakpoints, |rule| {
        rule.declare("top", "1px!important")
    });
    engine.set_rule("e1_top_m", &breakpoints, |rule| {
        rule.declare("top", "2px!important")
    });

    assert_eq!(engine.rule_count(), 1);
    assert_eq!(
        engine.declaration("e1_top_m", "top"),
        Some("2px!important".to_string())
    );
}

#[test]
fn test_class_name_derivation() {
    assert_eq!(class_name("e3", "top", &[]), "e3_top");
    assert_eq!(
        class_name("e3", "top", &[Breakpoint::extra_small()]),
        "e3_top_xs"
    );
    assert_eq!(
        class_name("e3", "padding-left", &[Breakpoint::small(), Breakpoint::medium()]),
        "e3_padding-left_s_m"
    );
}

#[test]
fn test_breakpoint_order_changes_class_name() {
    let forward = class_name("e3", "top", &[Breakpoint::extra_small(), Breakpoint::small()]);
    let reversed = class_name("e3", "top", &[Breakpoint::small(), Breakpoint::extra_small()]);

    // The order-sensitive join is longstanding observable behavior: the
    // same set in a different order is a distinct rule.
    assert_ne!(forward, reversed);
}

#[test]
fn test_clear_empties_sheet_and_cache() {
    let engine = StyleEngine::new();
    engine.set_rule("e1_top", &[], |rule| rule.declare("top", "10px"));

    engine.clear();

    assert_eq!(engine.rule_count(), 0);
    assert_eq!(engine.declaration("e1_top", "top"), None);

    engine.set_rule("e1_top", &[], |rule| rule.declare("top", "11px"));
    assert_eq!(engine.rule_count(), 1);
}
