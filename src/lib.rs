pub mod config;
pub mod output;
pub mod pipeline;
pub mod slug;

// Re-export main types
pub use config::{CliConfig, InputConfig, OutputConfig, OutputFormat};
pub use output::{JsonWriter, OutputWriter, PlainWriter};
pub use pipeline::{
    collapse_separators, filter_characters, fold_case, is_han, remove_diacritics,
    standardize_separators, transliterate_han, PinyinTransliterator, Slugifier, Stage,
    StageOutput, Transliterator,
};

// Re-export slug utilities
pub use slug::{is_slug, slugify, slugify_truncate, validate_slug, SlugError};
