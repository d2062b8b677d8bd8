//! Character filtering and separator handling (stages 4 to 6).

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Any single character outside the slug alphabet plus separators.
static INVALID_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9\s_-]").expect("invalid INVALID_CHAR regex"));

/// A run of separator-like characters.
static SEPARATOR_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("invalid SEPARATOR_RUN regex"));

/// Remove every character outside `a-z`, `0-9`, whitespace, `-` and `_`.
///
/// Removed characters leave no placeholder, so "h@#$x" becomes "hx". The one
/// exception is '.', which marks a word boundary and turns into a space.
pub fn filter_characters(text: &str) -> Cow<'_, str> {
    INVALID_CHAR.replace_all(text, |caps: &Captures| match &caps[0] {
        "." => " ",
        _ => "",
    })
}

/// Collapse each run of whitespace, `-` and `_` into one space, then trim.
pub fn collapse_separators(text: &str) -> String {
    SEPARATOR_RUN.replace_all(text, " ").trim().to_string()
}

/// Turn the single internal spaces left by [`collapse_separators`] into hyphens.
pub fn standardize_separators(text: &str) -> String {
    text.replace(' ', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_deletes_without_placeholder() {
        assert_eq!(filter_characters("h@#$x"), "hx");
        assert_eq!(filter_characters("$saver"), "saver");
        assert_eq!(filter_characters("ok-_ 9"), "ok-_ 9");
    }

    #[test]
    fn test_filter_removes_uppercase_and_non_ascii() {
        assert_eq!(filter_characters("aBc"), "ac");
        assert_eq!(filter_characters("привет x"), " x");
        assert_eq!(filter_characters("影x"), "x");
    }

    #[test]
    fn test_filter_dot_is_word_boundary() {
        assert_eq!(filter_characters("x.cxv."), "x cxv ");
    }

    #[test]
    fn test_collapse_separators() {
        assert_eq!(collapse_separators("  a --__ b\t\nc  "), "a b c");
        assert_eq!(collapse_separators("---___   "), "");
        assert_eq!(collapse_separators(""), "");
    }

    #[test]
    fn test_collapse_unicode_whitespace() {
        assert_eq!(collapse_separators("a\u{3000}\u{a0}b"), "a b");
    }

    #[test]
    fn test_standardize_separators() {
        assert_eq!(standardize_separators("john doe h"), "john-doe-h");
        assert_eq!(standardize_separators("single"), "single");
    }
}
