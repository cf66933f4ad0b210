//! Inline markup removal.

use regex::Regex;
use std::sync::LazyLock;

/// Opening, closing and self-closing forms of the inline formatting tags
/// that turn up in upstream text. Any other `<...>` span is left alone, so
/// inequalities such as `<approx 0.8` or `<1 mg` survive.
static TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(?:sub|sup|i|b|em|strong|u|small|a|br|span)(?:\s[^<>]*)?/?>")
        .expect("valid tag pattern")
});

/// Remove inline tags and surrounding whitespace.
///
/// Idempotent: stripping an already stripped string returns it unchanged.
pub fn strip_markup(text: &str) -> String {
    let mut current = TAG.replace_all(text, "").into_owned();
    // Removing one tag can join the halves of another, e.g. `<<b>i>`.
    while TAG.is_match(&current) {
        current = TAG.replace_all(&current, "").into_owned();
    }
    current.trim().to_string()
}
