//! Random placeholder-text ("lorem ipsum") generation library.
//!
//! This crate provides:
//! - A `Lorem` generator producing characters, words, sentences,
//!   paragraphs, content titles and content tag lists
//! - An immutable `WordCorpus` loaded once and shared read-only
//! - A `RandomSource` contract with thread-local and seeded implementations
//!
//! The corpus and the random source are injected into the generator, so
//! tests can swap in a seeded source for reproducible output.

/// Text generation operations.
pub mod lorem;

/// Word corpus resource (embedded list, text files, binary snapshots).
pub mod corpus;

/// Random source contract and implementations.
pub mod random;

/// Error type shared by generation and corpus loading.
pub mod error;

/// I/O utilities (file loading, path helpers).
///
/// Not exposed
pub(crate) mod io;

pub use corpus::{DEFAULT_SEPARATOR, WordCorpus};
pub use error::{LoremError, Result};
pub use lorem::Lorem;
pub use random::{RandomSource, SeededRandom, ThreadRandom};
