use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random integers consumed by the generator.
///
/// Every range is half-open: `next_range(low, high)` yields a value in
/// `[low, high)`. Implementations must be callable from any thread holding
/// the generator, either because they are thread-local or because they
/// serialize access internally.
pub trait RandomSource: Send + Sync {
	/// Uniform integer in `[low, high)`. Returns `low` when the range is empty.
	fn next_range(&self, low: i32, high: i32) -> i32;

	/// Uniform integer in `[0, max)`.
	fn next(&self, max: i32) -> i32 {
		self.next_range(0, max)
	}
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
	fn next_range(&self, low: i32, high: i32) -> i32 {
		(**self).next_range(low, high)
	}
}

/// Production source drawing from the thread-local `rand::rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
	fn next_range(&self, low: i32, high: i32) -> i32 {
		if high <= low {
			return low;
		}
		rand::rng().random_range(low..high)
	}
}

/// Deterministic source seeded once, for reproducible output.
///
/// The underlying `StdRng` is not shareable, so draws go through a mutex.
#[derive(Debug)]
pub struct SeededRandom {
	seed: u64,
	rng: Mutex<StdRng>,
}

impl SeededRandom {
	pub fn new(seed: u64) -> Self {
		Self {
			seed,
			rng: Mutex::new(StdRng::seed_from_u64(seed)),
		}
	}

	/// Seed this source was created with.
	pub fn seed(&self) -> u64 {
		self.seed
	}
}

impl RandomSource for SeededRandom {
	fn next_range(&self, low: i32, high: i32) -> i32 {
		if high <= low {
			return low;
		}
		// A panic while holding the lock cannot leave the rng in a broken state
		let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
		rng.random_range(low..high)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn thread_random_stays_in_half_open_range() {
		let random = ThreadRandom;
		for _ in 0..1000 {
			let v = random.next_range(33, 127);
			assert!((33..127).contains(&v));
		}
		for _ in 0..1000 {
			assert!((0..6).contains(&random.next(6)));
		}
	}

	#[test]
	fn empty_range_returns_low() {
		assert_eq!(ThreadRandom.next_range(5, 5), 5);
		assert_eq!(SeededRandom::new(1).next_range(9, 3), 9);
		assert_eq!(ThreadRandom.next(0), 0);
	}

	#[test]
	fn seeded_sources_are_reproducible() {
		let a = SeededRandom::new(42);
		let b = SeededRandom::new(42);
		for _ in 0..100 {
			assert_eq!(a.next_range(0, 1000), b.next_range(0, 1000));
		}
		assert_eq!(a.seed(), 42);
	}

	#[test]
	fn boxed_source_delegates() {
		let boxed: Box<dyn RandomSource> = Box::new(SeededRandom::new(7));
		let plain = SeededRandom::new(7);
		for _ in 0..20 {
			assert_eq!(boxed.next(100), plain.next(100));
		}
	}

	#[test]
	fn seeded_source_is_shareable_across_threads() {
		let random = std::sync::Arc::new(SeededRandom::new(3));
		let handles: Vec<_> = (0..4)
			.map(|_| {
				let random = random.clone();
				std::thread::spawn(move || (0..250).map(|_| random.next(10)).collect::<Vec<_>>())
			})
			.collect();
		for handle in handles {
			let values = handle.join().expect("worker panicked");
			assert!(values.iter().all(|v| (0..10).contains(v)));
		}
	}
}
