//! Renderer warnings with colored terminal output.
//!
//! Deduplicates repeated messages so a stylesheet that uses an unsupported
//! feature hundreds of times produces a single line of output. Used by the
//! CSS components to report values they parse past but cannot represent.

use std::collections::HashSet;
use std::sync::Mutex;

use owo_colors::OwoColorize;

/// Global set of already-printed warnings, keyed by component and message.
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Warn about an unsupported feature (prints once per unique message).
///
/// # Example
/// ```ignore
/// warn_once("CSS", "unsupported unit 'ex' in value 2ex");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap()
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[Wombat {component}] ⚠ {message}").yellow());
    }
}
