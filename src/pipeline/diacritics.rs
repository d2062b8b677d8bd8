//! Diacritic removal (stage 3): NFD, drop nonspacing marks, NFC.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::{is_nfd, UnicodeNormalization};

/// Unicode general category Mn.
static NONSPACING_MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Mn}").expect("invalid NONSPACING_MARK regex"));

/// Strip accents from text: "žůžo" becomes "zuzo".
///
/// The three steps run as a unit. Filtering marks without decomposing first
/// would leave precomposed letters such as 'é' untouched.
pub fn remove_diacritics(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        return Cow::Borrowed(text);
    }

    let decomposed: Cow<'_, str> = if is_nfd(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.nfd().collect())
    };

    let stripped = NONSPACING_MARK.replace_all(&decomposed, "");
    Cow::Owned(stripped.nfc().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_diacritics_latin() {
        assert_eq!(remove_diacritics("žůžo"), "zuzo");
        assert_eq!(remove_diacritics("é"), "e");
        assert_eq!(remove_diacritics("crème brûlée"), "creme brulee");
    }

    #[test]
    fn test_remove_diacritics_predecomposed() {
        // 'e' followed by U+0301 COMBINING ACUTE ACCENT
        assert_eq!(remove_diacritics("e\u{301}"), "e");
    }

    #[test]
    fn test_remove_diacritics_umlaut() {
        assert_eq!(remove_diacritics("über"), "uber");
        assert_eq!(remove_diacritics("naïve"), "naive");
    }

    #[test]
    fn test_ascii_is_borrowed() {
        assert!(matches!(remove_diacritics("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_letters_without_decomposition_survive() {
        // No canonical decomposition, so nothing is stripped.
        assert_eq!(remove_diacritics("ß"), "ß");
        assert_eq!(remove_diacritics("ø"), "ø");
    }
}
