//! Slug generation utilities.
//!
//! Provides the `slugify` entry point backed by a shared pipeline, plus
//! length-limited slugs and validation of existing slugs.

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::pipeline::Slugifier;

/// Shared pinyin pipeline, built on first use.
static DEFAULT_SLUGIFIER: Lazy<Slugifier> = Lazy::new(Slugifier::pinyin);

/// Reasons a string is not a well-formed slug.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlugError {
    #[error("slug must not be empty")]
    Empty,
    #[error("slug may only contain lowercase letters, digits, and hyphens (found {0:?})")]
    InvalidCharacter(char),
    #[error("slug must not start or end with a hyphen")]
    EdgeHyphen,
    #[error("slug must not contain consecutive hyphens")]
    ConsecutiveHyphens,
}

/// Convert text to a lowercase, ASCII-only, hyphen-separated slug.
///
/// Han characters become pinyin, accents are stripped, and everything else
/// outside `a-z0-9` is dropped. Does NOT truncate - use `slugify_truncate`
/// for length-limited slugs.
pub fn slugify(text: &str) -> String {
    DEFAULT_SLUGIFIER.slugify(text)
}

/// Convert text to a slug no longer than `max_len` bytes.
///
/// Truncates at word boundaries when possible.
pub fn slugify_truncate(text: &str, max_len: usize) -> String {
    let mut result = slugify(text);

    // Truncate if too long, preferring to break at word boundaries
    if result.len() > max_len {
        if result.as_bytes()[max_len] == b'-' {
            // The cut already falls on a word boundary
            result.truncate(max_len);
        } else {
            match result[..max_len].rfind('-') {
                Some(pos) => result.truncate(pos),
                None => result.truncate(max_len),
            }
        }
    }

    // Ensure no trailing dash after truncation
    while result.ends_with('-') {
        result.pop();
    }

    result
}

/// Check that `slug` is non-empty, uses only `[a-z0-9-]`, and has no
/// leading, trailing, or consecutive hyphens.
pub fn validate_slug(slug: &str) -> Result<(), SlugError> {
    if slug.is_empty() {
        return Err(SlugError::Empty);
    }
    if let Some(c) = slug
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(SlugError::InvalidCharacter(c));
    }
    if slug.starts_with('-') || slug.ends_with('-') {
        return Err(SlugError::EdgeHyphen);
    }
    if slug.contains("--") {
        return Err(SlugError::ConsecutiveHyphens);
    }
    Ok(())
}

pub fn is_slug(slug: &str) -> bool {
    validate_slug(slug).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Test 123!"), "test-123");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
    }

    #[test]
    fn test_slugify_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify(" -_- "), "");
        assert_eq!(slugify("@#$%"), "");
    }

    #[test]
    fn test_slugify_truncate_long_input() {
        let long_task = "Add MCP server configuration support with bundled recipes environment variables";
        let slug = slugify_truncate(long_task, 30);
        assert!(slug.len() <= 30);
        assert!(!slug.ends_with('-'));
        assert_eq!(slug, "add-mcp-server-configuration");
    }

    #[test]
    fn test_slugify_truncate_short_input() {
        assert_eq!(slugify_truncate("Add auth", 30), "add-auth");
    }

    #[test]
    fn test_slugify_truncate_at_exact_boundary() {
        assert_eq!(slugify_truncate("add auth x", 8), "add-auth");
        assert_eq!(slugify_truncate("add auth x", 7), "add");
        assert_eq!(slugify_truncate("add auth x", 3), "add");
    }

    #[test]
    fn test_slugify_truncate_single_long_word() {
        assert_eq!(slugify_truncate("abcdefghij", 4), "abcd");
    }

    #[test]
    fn test_slugify_truncate_zero() {
        assert_eq!(slugify_truncate("anything", 0), "");
    }

    #[test]
    fn test_validate_slug_valid() {
        assert!(validate_slug("my-cool-space").is_ok());
        assert!(validate_slug("abc123").is_ok());
        assert!(validate_slug("a").is_ok());
    }

    #[test]
    fn test_validate_slug_empty() {
        assert_eq!(validate_slug(""), Err(SlugError::Empty));
    }

    #[test]
    fn test_validate_slug_invalid_characters() {
        assert_eq!(validate_slug("Hello"), Err(SlugError::InvalidCharacter('H')));
        assert_eq!(validate_slug("hello world"), Err(SlugError::InvalidCharacter(' ')));
        assert_eq!(validate_slug("hello_world"), Err(SlugError::InvalidCharacter('_')));
    }

    #[test]
    fn test_validate_slug_hyphens() {
        assert_eq!(validate_slug("-abc"), Err(SlugError::EdgeHyphen));
        assert_eq!(validate_slug("abc-"), Err(SlugError::EdgeHyphen));
        assert_eq!(validate_slug("a--b"), Err(SlugError::ConsecutiveHyphens));
    }

    #[test]
    fn test_is_slug() {
        assert!(is_slug("john-doe"));
        assert!(!is_slug("John Doe"));
    }
}
