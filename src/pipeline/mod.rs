//! The slug pipeline.
//!
//! Text flows through six stages in a fixed order:
//!
//! 1. case folding
//! 2. Han transliteration
//! 3. diacritic removal
//! 4. character filtering
//! 5. separator collapsing
//! 6. separator standardization
//!
//! The order matters. Filtering before transliteration would delete Han
//! characters, and filtering before diacritic removal would delete accented
//! letters instead of reducing them to their base form.

mod diacritics;
mod separators;
mod transliterate;

pub use diacritics::remove_diacritics;
pub use separators::{collapse_separators, filter_characters, standardize_separators};
pub use transliterate::{is_han, transliterate_han, PinyinTransliterator, Transliterator};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// One step of the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    CaseFold,
    Transliterate,
    RemoveDiacritics,
    FilterCharacters,
    CollapseSeparators,
    StandardizeSeparators,
}

impl Stage {
    /// All stages, in execution order.
    pub const ALL: [Stage; 6] = [
        Stage::CaseFold,
        Stage::Transliterate,
        Stage::RemoveDiacritics,
        Stage::FilterCharacters,
        Stage::CollapseSeparators,
        Stage::StandardizeSeparators,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::CaseFold => "case-fold",
            Stage::Transliterate => "transliterate",
            Stage::RemoveDiacritics => "remove-diacritics",
            Stage::FilterCharacters => "filter-characters",
            Stage::CollapseSeparators => "collapse-separators",
            Stage::StandardizeSeparators => "standardize-separators",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text as it left a stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOutput {
    pub stage: Stage,
    pub text: String,
}

/// Lowercase the whole input with simple, locale independent case mapping.
///
/// Each code point maps to exactly one code point, so 'İ' becomes 'i' rather
/// than 'i' plus a combining dot.
pub fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| c.to_lowercase().next().unwrap_or(c))
        .collect()
}

/// Runs text through every stage.
///
/// Holds nothing but the transliterator, which is read-only, so one instance
/// can be shared across threads.
#[derive(Debug, Clone)]
pub struct Slugifier<T = PinyinTransliterator> {
    transliterator: T,
}

impl Slugifier {
    /// Pipeline that reads Han characters as pinyin.
    pub fn pinyin() -> Self {
        Self::new(PinyinTransliterator)
    }
}

impl Default for Slugifier {
    fn default() -> Self {
        Self::pinyin()
    }
}

impl<T: Transliterator> Slugifier<T> {
    pub fn new(transliterator: T) -> Self {
        Self { transliterator }
    }

    /// Apply a single stage to `text`.
    pub fn apply(&self, stage: Stage, text: &str) -> String {
        match stage {
            Stage::CaseFold => fold_case(text),
            Stage::Transliterate => transliterate_han(text, &self.transliterator).into_owned(),
            Stage::RemoveDiacritics => remove_diacritics(text).into_owned(),
            Stage::FilterCharacters => filter_characters(text).into_owned(),
            Stage::CollapseSeparators => collapse_separators(text),
            Stage::StandardizeSeparators => standardize_separators(text),
        }
    }

    /// Convert `text` into a slug matching `[a-z0-9]([a-z0-9-]*[a-z0-9])?`
    /// or the empty string. Never fails.
    pub fn slugify(&self, text: &str) -> String {
        Stage::ALL.iter().fold(text.to_string(), |current, &stage| {
            let next = self.apply(stage, &current);
            trace!(stage = %stage, output = %next, "applied stage");
            next
        })
    }

    /// Like [`Slugifier::slugify`], but keeps the text produced by each stage.
    ///
    /// The last entry always holds the final slug.
    pub fn trace(&self, text: &str) -> Vec<StageOutput> {
        let mut outputs: Vec<StageOutput> = Vec::with_capacity(Stage::ALL.len());
        for stage in Stage::ALL {
            let input = outputs.last().map(|o| o.text.as_str()).unwrap_or(text);
            let next = self.apply(stage, input);
            trace!(stage = %stage, output = %next, "applied stage");
            outputs.push(StageOutput { stage, text: next });
        }
        outputs
    }
}
