//! Gardiner-style sort key for sign codes.
//!
//! Display-only: the pipeline stores and groups records in first-seen
//! order, and the dedup policy never consults this key. It exists so
//! listings can show `A1, A2, A10` instead of lexicographic `A1, A10, A2`.

use std::sync::OnceLock;

use regex::Regex;

static KEY_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Sort key for a sign code: leading uppercase-letter run, then the
/// numeric value of the following digit run (0 if absent).
///
/// Codes that do not start with an uppercase letter run key on the whole
/// code string with a numeric part of 0.
pub fn sort_key(code: &str) -> (String, u64) {
    let pattern =
        KEY_PATTERN.get_or_init(|| Regex::new(r"^([A-Z]+)(\d+)?").expect("valid pattern"));
    match pattern.captures(code) {
        Some(caps) => {
            let letters = caps[1].to_string();
            let number = caps
                .get(2)
                .and_then(|m| m.as_str().parse::<u64>().ok())
                .unwrap_or(0);
            (letters, number)
        }
        None => (code.to_string(), 0),
    }
}
