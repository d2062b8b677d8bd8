//! Han to Latin transliteration (stage 2).
//!
//! Every code point in the Han script is replaced by its primary pinyin
//! reading. Readings are plain lowercase ASCII with tones dropped and `ü`
//! spelled `v`; only the first candidate is ever used, with no word
//! segmentation or context.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use pinyin::ToPinyin;
use regex::{Captures, Regex};
use tracing::debug;

/// Matches a single Han code point. No quantifier, so every match is exactly
/// one character and replacements stay in input order.
static HAN_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Han}").expect("invalid HAN_CHAR regex"));

/// Source of phonetic Latin readings for Han characters.
pub trait Transliterator: Send + Sync {
    /// Primary (most common) reading of `c`, or `None` if the character has
    /// no known romanization.
    fn primary_reading(&self, c: char) -> Option<&'static str>;
}

/// Transliterator backed by the `pinyin` crate's Unihan tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct PinyinTransliterator;

impl Transliterator for PinyinTransliterator {
    fn primary_reading(&self, c: char) -> Option<&'static str> {
        c.to_pinyin().map(|p| ascii_syllable(p.plain()))
    }
}

/// Spell the ü finals with `v`, the usual ASCII input form.
fn ascii_syllable(plain: &'static str) -> &'static str {
    match plain {
        "lü" => "lv",
        "nü" => "nv",
        "lüe" => "lve",
        "nüe" => "nve",
        other => other,
    }
}

/// Whether `c` belongs to the Han script.
pub fn is_han(c: char) -> bool {
    let mut buf = [0u8; 4];
    HAN_CHAR.is_match(c.encode_utf8(&mut buf))
}

/// Replace each Han character with its primary reading.
///
/// Non-Han characters pass through untouched. Han characters without a
/// reading are kept literally; the character filter removes them later.
pub fn transliterate_han<'a, T>(text: &'a str, transliterator: &T) -> Cow<'a, str>
where
    T: Transliterator + ?Sized,
{
    HAN_CHAR.replace_all(text, |caps: &Captures| {
        let matched = &caps[0];
        let reading = matched
            .chars()
            .next()
            .and_then(|c| transliterator.primary_reading(c));

        match reading {
            Some(reading) => reading.to_string(),
            None => {
                debug!("No reading for Han character {:?}, keeping it", matched);
                matched.to_string()
            }
        }
    })
}
