use std::sync::Arc;

use log::trace;

use super::format::{capitalise, distinct_tags};
use crate::corpus::WordCorpus;
use crate::error::{LoremError, Result};
use crate::random::{RandomSource, SeededRandom, ThreadRandom};

/// Default length of `characters`.
pub const DEFAULT_CHAR_COUNT: i32 = 255;
/// Default minimum number of words in a sentence.
pub const DEFAULT_MIN_WORD_COUNT: i32 = 4;
/// Default minimum number of sentences in a paragraph.
pub const DEFAULT_MIN_SENTENCE_COUNT: i32 = 3;

/// Placeholder-text generator.
///
/// Composes characters, words, sentences and paragraphs from a shared
/// `WordCorpus` and an injected `RandomSource`.
///
/// # Layers
/// - `characters` and `words` draw directly from the random source
/// - `sentence(s)` are built from words, `paragraph(s)` from sentences
/// - `content_title` and `content_tags` are built from words
///
/// # Validation
/// Every operation except `content_title` and `content_tags` rejects a
/// non-positive count with `LoremError::InvalidArgument` before drawing
/// anything. Those two substitute a random count instead.
#[derive(Debug, Clone)]
pub struct Lorem<R: RandomSource = ThreadRandom> {
	corpus: Arc<WordCorpus>,
	random: R,
}

impl<R: RandomSource> Lorem<R> {
	/// Creates a generator reading `corpus` and drawing from `random`.
	pub fn new(corpus: Arc<WordCorpus>, random: R) -> Self {
		Self { corpus, random }
	}

	pub fn corpus(&self) -> &WordCorpus {
		&self.corpus
	}

	pub fn random(&self) -> &R {
		&self.random
	}

	/// Generates `char_count` printable ASCII characters (codes 33 to 126).
	///
	/// # Errors
	/// `InvalidArgument` if `char_count <= 0`.
	pub fn characters(&self, char_count: i32) -> Result<String> {
		if char_count <= 0 {
			return Err(LoremError::invalid("char_count", "character count must be more than zero"));
		}

		Ok(self.draw_characters(char_count))
	}

	/// `characters` with the default length of 255.
	pub fn default_characters(&self) -> String {
		self.draw_characters(DEFAULT_CHAR_COUNT)
	}

	/// Draws `count` words from the corpus, with replacement, in draw order.
	///
	/// # Errors
	/// `InvalidArgument` if `count <= 0`.
	pub fn words(&self, count: i32) -> Result<Vec<String>> {
		if count <= 0 {
			return Err(LoremError::invalid("count", "count must be greater than zero"));
		}
		Ok(self.draw_words(count))
	}

	/// Generates a capitalised sentence ending with a period.
	///
	/// The sentence holds between `min_word_count` and `min_word_count + 5` words.
	///
	/// # Errors
	/// `InvalidArgument` if `min_word_count <= 0`.
	pub fn sentence(&self, min_word_count: i32) -> Result<String> {
		if min_word_count <= 0 {
			return Err(LoremError::invalid(
				"min_word_count",
				"minimum word count must be greater than zero",
			));
		}
		Ok(self.draw_sentence(min_word_count))
	}

	/// `sentence` with at least four words.
	pub fn default_sentence(&self) -> String {
		self.draw_sentence(DEFAULT_MIN_WORD_COUNT)
	}

	/// Generates `sentence_count` independent default sentences.
	///
	/// # Errors
	/// `InvalidArgument` if `sentence_count <= 0`.
	pub fn sentences(&self, sentence_count: i32) -> Result<Vec<String>> {
		if sentence_count <= 0 {
			return Err(LoremError::invalid(
				"sentence_count",
				"sentence count must be greater than zero",
			));
		}
		Ok(self.draw_sentences(sentence_count))
	}

	/// Generates a paragraph of `min_sentence_count` to `min_sentence_count + 2`
	/// space-separated sentences.
	///
	/// # Errors
	/// `InvalidArgument` if `min_sentence_count <= 0`.
	pub fn paragraph(&self, min_sentence_count: i32) -> Result<String> {
		if min_sentence_count <= 0 {
			return Err(LoremError::invalid(
				"min_sentence_count",
				"minimum sentence count must be greater than zero",
			));
		}
		Ok(self.draw_paragraph(min_sentence_count))
	}

	/// `paragraph` with at least three sentences.
	pub fn default_paragraph(&self) -> String {
		self.draw_paragraph(DEFAULT_MIN_SENTENCE_COUNT)
	}

	/// Generates `paragraph_count` independent default paragraphs.
	///
	/// # Errors
	/// `InvalidArgument` if `paragraph_count <= 0`.
	pub fn paragraphs(&self, paragraph_count: i32) -> Result<Vec<String>> {
		if paragraph_count <= 0 {
			return Err(LoremError::invalid(
				"paragraph_count",
				"paragraph count must be greater than zero",
			));
		}
		Ok((0..paragraph_count)
			.map(|_| self.draw_paragraph(DEFAULT_MIN_SENTENCE_COUNT))
			.collect())
	}

	/// Generates a capitalised title of `number_of_words` words.
	///
	/// A non-positive `number_of_words` is replaced by a random count
	/// between 3 and 7; this operation never fails.
	pub fn content_title(&self, number_of_words: i32) -> String {
		let number_of_words = if number_of_words <= 0 {
			let substituted = self.random.next_range(3, 8);
			trace!("content title word count {number_of_words} replaced by {substituted}");
			substituted
		} else {
			number_of_words
		};

		capitalise(&self.draw_words(number_of_words).join(" "))
	}

	/// `content_title` with a random word count.
	pub fn default_content_title(&self) -> String {
		self.content_title(0)
	}

	/// Generates a comma-separated list of distinct tags.
	///
	/// A non-positive `number_of_tags` is replaced by a random count between
	/// 2 and 4. Blank and repeated words are dropped, so the result may hold
	/// fewer tags than requested.
	pub fn content_tags(&self, number_of_tags: i32) -> String {
		let number_of_tags = if number_of_tags <= 0 {
			let substituted = self.random.next_range(2, 5);
			trace!("content tag count {number_of_tags} replaced by {substituted}");
			substituted
		} else {
			number_of_tags
		};

		distinct_tags(self.draw_words(number_of_tags)).join(",")
	}

	/// `content_tags` with a random tag count.
	pub fn default_content_tags(&self) -> String {
		self.content_tags(0)
	}

	fn draw_characters(&self, char_count: i32) -> String {
		(0..char_count)
			.map(|_| self.random.next_range(33, 127) as u8 as char)
			.collect()
	}

	fn draw_words(&self, count: i32) -> Vec<String> {
		let len = i32::try_from(self.corpus.len()).unwrap_or(i32::MAX);
		(0..count)
			.map(|_| self.corpus.get(self.random.next(len) as usize).to_owned())
			.collect()
	}

	fn draw_sentence(&self, min_word_count: i32) -> String {
		let word_count = min_word_count.saturating_add(self.random.next(6));
		let mut sentence = capitalise(&self.draw_words(word_count).join(" "));
		sentence.push('.');
		sentence
	}

	fn draw_sentences(&self, sentence_count: i32) -> Vec<String> {
		(0..sentence_count)
			.map(|_| self.draw_sentence(DEFAULT_MIN_WORD_COUNT))
			.collect()
	}

	fn draw_paragraph(&self, min_sentence_count: i32) -> String {
		let sentence_count = min_sentence_count.saturating_add(self.random.next(3));
		self.draw_sentences(sentence_count).join(" ")
	}
}

impl Default for Lorem<ThreadRandom> {
	/// Embedded corpus with the thread-local random source.
	fn default() -> Self {
		Self::new(Arc::new(WordCorpus::default()), ThreadRandom)
	}
}

impl Lorem<SeededRandom> {
	/// Embedded corpus with a deterministic source seeded by `seed`.
	pub fn seeded(seed: u64) -> Self {
		Self::new(Arc::new(WordCorpus::default()), SeededRandom::new(seed))
	}
}
