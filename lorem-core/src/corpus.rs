use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{LoremError, Result};
use crate::io::{build_output_path, read_file};

/// Separator used by the embedded word list.
pub const DEFAULT_SEPARATOR: char = ',';

const EMBEDDED_WORDS: &str = include_str!("../resources/lorem_words.txt");

/// Immutable list of candidate words used to synthesize text.
///
/// The source string is split once at construction; generators only
/// read `words` afterwards.
///
/// # Invariants
/// - `words` is never empty
/// - no entry is empty or carries surrounding whitespace
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct WordCorpus {
	separator: char,
	words: Vec<String>,
}

impl WordCorpus {
	/// Splits `text` on `separator` into a corpus.
	///
	/// Tokens are trimmed and empty tokens are dropped.
	///
	/// # Errors
	/// Returns `LoremError::EmptyCorpus` if no word remains.
	pub fn parse(text: &str, separator: char) -> Result<Self> {
		Self::from_words(text.split(separator), separator)
	}

	/// Builds a corpus from raw tokens, trimming them and dropping blank ones.
	fn from_words<I, S>(tokens: I, separator: char) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let words: Vec<String> = tokens
			.into_iter()
			.map(|token| token.as_ref().trim().to_owned())
			.filter(|word| !word.is_empty())
			.collect();

		if words.is_empty() {
			return Err(LoremError::EmptyCorpus);
		}

		Ok(Self { separator, words })
	}

	/// Loads a corpus from a text file.
	///
	/// - A `.bin` snapshot next to the file is used when it was built with the
	///   same `separator` and is not older than the text file.
	/// - Otherwise the text is parsed and the snapshot is (re)written with
	///   `postcard` for faster loading next time. Failing to write it is not fatal.
	///
	/// # Errors
	/// Returns an error if the file cannot be read, the snapshot is corrupt,
	/// or the corpus is empty.
	pub fn from_file<P: AsRef<Path>>(filepath: P, separator: char) -> Result<Self> {
		let filepath = filepath.as_ref();
		let snapshot_path = build_output_path(filepath, "bin")?;

		if let Some(corpus) = Self::read_snapshot(filepath, &snapshot_path, separator)? {
			debug!("loaded {} words from snapshot {}", corpus.len(), snapshot_path.display());
			return Ok(corpus);
		}

		let corpus = Self::parse(&read_file(filepath)?, separator)?;
		debug!("parsed {} words from {}", corpus.len(), filepath.display());

		match postcard::to_stdvec(&corpus) {
			Ok(bytes) => {
				if let Err(e) = std::fs::write(&snapshot_path, bytes) {
					warn!("could not write corpus snapshot {}: {e}", snapshot_path.display());
				}
			}
			Err(e) => warn!("could not encode corpus snapshot: {e}"),
		}

		Ok(corpus)
	}

	/// Reads a usable snapshot, or `None` when it is missing, stale, or was
	/// split on another separator.
	///
	/// Snapshot words go through the same trimming as parsed text, so the
	/// corpus invariants hold whatever the snapshot contains.
	fn read_snapshot(text_path: &Path, snapshot_path: &Path, separator: char) -> Result<Option<Self>> {
		if !snapshot_path.exists() {
			return Ok(None);
		}

		// A missing text file leaves the snapshot as the only source
		if let (Ok(text_meta), Ok(snapshot_meta)) = (std::fs::metadata(text_path), std::fs::metadata(snapshot_path)) {
			if let (Ok(text_time), Ok(snapshot_time)) = (text_meta.modified(), snapshot_meta.modified()) {
				if text_time > snapshot_time {
					debug!("snapshot {} is older than {}", snapshot_path.display(), text_path.display());
					return Ok(None);
				}
			}
		}

		let bytes = std::fs::read(snapshot_path)?;
		let snapshot: WordCorpus = postcard::from_bytes(&bytes)?;
		if snapshot.separator != separator {
			debug!(
				"snapshot {} was split on {:?}, {:?} requested",
				snapshot_path.display(),
				snapshot.separator,
				separator
			);
			return Ok(None);
		}

		Self::from_words(snapshot.words, separator).map(Some)
	}

	/// All candidate words, in corpus order.
	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn separator(&self) -> char {
		self.separator
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	/// Always `false` for a constructed corpus.
	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}

	pub fn contains(&self, word: &str) -> bool {
		self.words.iter().any(|w| w == word)
	}

	/// Word at `index`, as drawn by a generator.
	pub(crate) fn get(&self, index: usize) -> &str {
		&self.words[index % self.words.len()]
	}
}

impl Default for WordCorpus {
	/// The embedded latin word list.
	fn default() -> Self {
		Self::parse(EMBEDDED_WORDS, DEFAULT_SEPARATOR).expect("embedded word list is not empty")
	}
}
