//! Layout warnings with colored terminal output.
//!
//! Provides deduplication so the same condition is reported once, plus a
//! per-key reset so a warning can re-arm after the condition clears (a
//! constraint skipped on a statically positioned element warns again if
//! the element goes static a second time).
//!
//! The sink is an owned instance rather than process-global state, so each
//! engine (and each test) gets its own isolated warning history.

use std::cell::RefCell;
use std::collections::HashSet;

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Deduplicating warning sink.
///
/// A warning is identified by a caller-chosen key. The first `warn_once`
/// for a key prints and records it; further calls with the same key are
/// silent until [`WarningSink::reset`] re-arms that key.
#[derive(Debug, Default)]
pub struct WarningSink {
    /// Keys that have already fired and are currently armed against repeats.
    armed: RefCell<HashSet<String>>,
    /// Every message actually emitted, in emission order.
    emitted: RefCell<Vec<String>>,
}

impl WarningSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Warn about a condition, printing once per unique key.
    ///
    /// Returns `true` if the warning was emitted, `false` if the key had
    /// already fired and has not been reset since.
    pub fn warn_once(&self, key: &str, message: &str) -> bool {
        let fresh = self.armed.borrow_mut().insert(key.to_string());
        if fresh {
            eprintln!("{YELLOW}[Wallaby] \u{26a0} {message}{RESET}");
            self.emitted.borrow_mut().push(message.to_string());
        }
        fresh
    }

    /// Re-arm a single key so the next `warn_once` for it fires again.
    ///
    /// A no-op if the key never fired.
    pub fn reset(&self, key: &str) {
        let _ = self.armed.borrow_mut().remove(key);
    }

    /// Forget all fired keys and the emission log.
    pub fn clear(&self) {
        self.armed.borrow_mut().clear();
        self.emitted.borrow_mut().clear();
    }

    /// Messages emitted so far, in order. Intended for tests.
    #[must_use]
    pub fn emitted(&self) -> Vec<String> {
        self.emitted.borrow().clone()
    }
}
