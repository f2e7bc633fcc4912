use thiserror::Error;

/// Errors produced by the lorem generator and its corpus loader.
///
/// Generation itself can only fail with `InvalidArgument`. The other
/// variants are raised while building a `WordCorpus`.
#[derive(Debug, Error)]
pub enum LoremError {
	/// A count-like parameter was zero or negative.
	#[error("{name}: {message}")]
	InvalidArgument {
		/// Name of the rejected parameter.
		name: &'static str,
		message: &'static str,
	},

	#[error("word corpus must contain at least one word")]
	EmptyCorpus,

	#[error("corpus I/O error: {0}")]
	Io(#[from] std::io::Error),

	#[error("corpus snapshot error: {0}")]
	Snapshot(#[from] postcard::Error),
}

impl LoremError {
	pub(crate) fn invalid(name: &'static str, message: &'static str) -> Self {
		Self::InvalidArgument { name, message }
	}

	/// Returns `true` for argument validation failures.
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, Self::InvalidArgument { .. })
	}
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, LoremError>;
