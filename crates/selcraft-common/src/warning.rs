//! Tool warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! The selector library never logs; front ends such as the CLI use this to
//! report questionable but accepted input.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record a warning, returning `true` the first time a given
/// `(component, message)` pair is seen.
#[must_use]
pub fn record_once(component: &str, message: &str) -> bool {
    let key = format!("[{component}] {message}");
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about questionable input (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("CLI", "non-standard combinator token '||'");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record_once(component, message) {
        eprintln!("{}", format!("[selcraft {component}] ⚠ {message}").yellow());
    }
}

/// Print an error line in red. Not deduplicated.
pub fn report_error(component: &str, message: &str) {
    eprintln!("{}", format!("[selcraft {component}] ✗ {message}").red());
}

/// Clear all recorded warnings
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
