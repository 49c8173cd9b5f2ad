//! The style engine: a stylesheet plus its rule cache.
//!
//! The engine owns the single stylesheet every layout declaration writes
//! into, and the cache mapping each generated class name to the index of
//! its currently installed rule. The cache is what makes setters
//! idempotent over an element's lifetime: re-running a setter replaces the
//! class's one rule instead of appending a duplicate, so the sheet never
//! grows past one rule (or one media group) per class name.
//!
//! The engine is an owned instance, not a process global: a composition
//! root constructs one and shares it, and each test gets its own.

use std::cell::RefCell;
use std::collections::HashMap;

use wallaby_css::{Breakpoint, MediaRule, SheetRule, StyleRule, Stylesheet};

/// Stylesheet plus rule cache, enforcing at most one live rule per
/// generated class name.
#[derive(Debug, Default)]
pub struct StyleEngine {
    sheet: RefCell<Stylesheet>,
    /// Class name → index of its live rule. An entry exists only while a
    /// rule for that class is believed to be installed; the index may go
    /// stale when an unrelated delete shifts the sheet.
    cache: RefCell<HashMap<String, usize>>,
}

impl StyleEngine {
    /// Create an engine with an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install (or replace) the rule for a class name.
    ///
    /// `build` receives an empty rule selecting `.{class_name}` and
    /// returns it with declarations attached. With breakpoints the rule is
    /// wrapped in a single media group whose query list covers every
    /// listed range, in caller order.
    ///
    /// # Algorithm
    ///
    /// STEP 1: Build the replacement rule (outside any sheet borrow, so a
    /// builder reading the engine cannot deadlock).
    ///
    /// STEP 2: Remove the class's previous rule, if one is installed.
    /// The cached index is trusted only if the rule at that index still
    /// carries this class's selector; otherwise fall back to a selector
    /// scan. If neither resolves, there is nothing to remove and the
    /// insert proceeds fresh.
    ///
    /// STEP 3: Insert the replacement and cache its index. A failed
    /// insertion (a rule with no declarations) caches nothing, so the next
    /// call attempts a fresh insert rather than a delete-then-insert.
    pub fn set_rule(
        &self,
        class_name: &str,
        breakpoints: &[Breakpoint],
        build: impl FnOnce(StyleRule) -> StyleRule,
    ) {
        // STEP 1: build first; the builder is caller code.
        let rule = build(StyleRule::for_class(class_name));
        let selector = format!(".{class_name}");

        // STEP 2: delete the previous rule for this class.
        let cached = self.cache.borrow_mut().remove(class_name);
        {
            let mut sheet = self.sheet.borrow_mut();
            let live = cached
                .filter(|&index| {
                    sheet
                        .rule(index)
                        .is_some_and(|installed| installed.selector() == selector)
                })
                .or_else(|| sheet.find_rule_index(&selector));
            if let Some(index) = live {
                sheet.delete_rule(index);
            }

            // STEP 3: insert the replacement.
            let inserted = if breakpoints.is_empty() {
                sheet.add_rule(rule)
            } else {
                sheet.add_media_rule(MediaRule::new(breakpoints, rule))
            };
            if let Some(index) = inserted {
                let _ = self.cache.borrow_mut().insert(class_name.to_string(), index);
            }
        }
    }

    /// Remove every rule and cache entry.
    pub fn clear(&self) {
        self.sheet.borrow_mut().clear();
        self.cache.borrow_mut().clear();
    }

    /// Number of rules currently installed.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.sheet.borrow().len()
    }

    /// A snapshot of the live rule for a class name, if one is installed.
    #[must_use]
    pub fn rule_for_class(&self, class_name: &str) -> Option<SheetRule> {
        let sheet = self.sheet.borrow();
        let index = sheet.find_rule_index(&format!(".{class_name}"))?;
        sheet.rule(index).cloned()
    }

    /// The value text of one declaration in a class's live rule.
    #[must_use]
    pub fn declaration(&self, class_name: &str, property: &str) -> Option<String> {
        self.rule_for_class(class_name)
            .and_then(|rule| rule.style_rule().value_of(property).map(str::to_string))
    }

    /// Serialize the whole sheet as CSS text.
    #[must_use]
    pub fn css_text(&self) -> String {
        self.sheet.borrow().css_text()
    }
}

/// Derive the deterministic class name for (element uid, method,
/// breakpoints).
///
/// The breakpoint list is joined in caller order, so the same set in a
/// different order yields a different class name. That order-sensitivity
/// is longstanding observable behavior and is preserved deliberately.
#[must_use]
pub fn class_name(uid: &str, method: &str, breakpoints: &[Breakpoint]) -> String {
    let mut name = format!("{uid}_{method}");
    for breakpoint in breakpoints {
        name.push('_');
        name.push_str(&breakpoint.class_token());
    }
    name
}
