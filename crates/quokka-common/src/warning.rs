//! Engine warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same diagnostic many times.
//! The style engine reports unsupported features and unimplemented
//! computed-style properties through here.

use std::collections::HashSet;
use std::hash::Hash;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// A process-wide, insert-if-absent set of already reported keys.
///
/// The set is guarded by a mutex so concurrent first insertions of the
/// same key resolve to exactly one winner. Owners decide the key type: the
/// global warning log keys on the formatted message, the computed-style
/// declaration keys on the property identifier.
#[derive(Debug)]
pub struct WarningSet<K> {
    seen: Mutex<Option<HashSet<K>>>,
}

impl<K: Eq + Hash> WarningSet<K> {
    /// Create an empty set. Usable in `static` position.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seen: Mutex::new(None),
        }
    }

    /// Record `key`, returning `true` only if it was not already present.
    pub fn insert_first(&self, key: K) -> bool {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_or_insert_with(HashSet::new)
            .insert(key)
    }

    /// Whether `key` has been recorded.
    pub fn contains(&self, key: &K) -> bool {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|set| set.contains(key))
    }

    /// Number of distinct keys recorded so far.
    pub fn len(&self) -> usize {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(0, HashSet::len)
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every recorded key.
    pub fn clear(&self) {
        if let Some(set) = self
            .seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_mut()
        {
            set.clear();
        }
    }
}

impl<K: Eq + Hash> Default for WarningSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: WarningSet<String> = WarningSet::new();

/// Print a warning for `component` unconditionally.
pub fn warn(component: &str, message: &str) {
    eprintln!("{}", format!("[Quokka {component}] ⚠ {message}").yellow());
}

/// Warn about an unsupported feature (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("CSS", "unsupported unit 'vmin' in line-height");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if WARNED.insert_first(format!("[{component}] {message}")) {
        warn(component, message);
    }
}

/// Clear all recorded warnings.
pub fn clear_warnings() {
    WARNED.clear();
}
