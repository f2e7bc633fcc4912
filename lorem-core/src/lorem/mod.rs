//! Placeholder-text generation.
//!
//! - `generator`: the `Lorem` generator and its default counts
//! - `format`: string helpers shared by the generator (capitalisation, tag dedup)

/// Character, word, sentence, paragraph, title and tag generation.
pub mod generator;

/// String helpers used to assemble generated text.
pub mod format;

pub use generator::{DEFAULT_CHAR_COUNT, DEFAULT_MIN_SENTENCE_COUNT, DEFAULT_MIN_WORD_COUNT, Lorem};
