use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use lorem_core::DEFAULT_SEPARATOR;

/// Default cap on `count` query parameters.
pub const DEFAULT_MAX_COUNT: i32 = 10_000;

/// Server configuration loaded from environment variables.
///
/// A `.env` file in the working directory is read first when present.
#[derive(Debug, Clone)]
pub struct ServerConfig {
	pub host: String,
	pub port: u16,
	pub workers: usize,
	/// Corpus text file; the embedded word list is used when unset.
	pub corpus: Option<PathBuf>,
	pub separator: char,
	/// Seed for a deterministic random source.
	pub seed: Option<u64>,
	/// Largest `count` accepted by the generation endpoints.
	pub max_count: i32,
	pub rust_log: String,
}

impl ServerConfig {
	pub fn from_env() -> Result<Self> {
		dotenvy::dotenv().ok();
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds the configuration from any key lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let port = match lookup("LOREM_PORT") {
			Some(port) => port.parse::<u16>().context("LOREM_PORT must be a valid port number")?,
			None => 5000,
		};

		let workers = match lookup("LOREM_WORKERS") {
			Some(workers) => workers
				.parse::<usize>()
				.context("LOREM_WORKERS must be a positive integer")?,
			None => num_cpus::get(),
		};
		if workers == 0 {
			bail!("LOREM_WORKERS must be a positive integer");
		}

		let separator = match lookup("LOREM_SEPARATOR") {
			Some(separator) => parse_separator(&separator)?,
			None => DEFAULT_SEPARATOR,
		};

		let max_count = match lookup("LOREM_MAX_COUNT") {
			Some(max) => max
				.parse::<i32>()
				.context("LOREM_MAX_COUNT must be a positive integer")?,
			None => DEFAULT_MAX_COUNT,
		};
		if max_count <= 0 {
			bail!("LOREM_MAX_COUNT must be a positive integer");
		}

		let seed = lookup("LOREM_SEED")
			.map(|seed| seed.parse::<u64>().context("LOREM_SEED must be an unsigned integer"))
			.transpose()?;

		Ok(Self {
			host: lookup("LOREM_HOST").unwrap_or_else(|| "127.0.0.1".to_owned()),
			port,
			workers,
			corpus: lookup("LOREM_CORPUS").filter(|p| !p.trim().is_empty()).map(PathBuf::from),
			separator,
			seed,
			max_count,
			rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_owned()),
		})
	}
}

fn parse_separator(value: &str) -> Result<char> {
	let mut chars = value.chars();
	match (chars.next(), chars.next()) {
		(Some(c), None) => Ok(c),
		_ => bail!("LOREM_SEPARATOR must be a single character, got {value:?}"),
	}
}
