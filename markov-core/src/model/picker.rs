use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed candidate indices.
///
/// The generator never touches a random number generator directly; it asks
/// a picker for an index into the candidate list of the current state.
pub trait IndexPicker {
	/// Returns an index in `0..len`. `len` is always strictly positive.
	fn pick_index(&mut self, len: usize) -> usize;
}

/// Picker backed by a `rand` generator.
#[derive(Debug)]
pub struct RandomPicker<R: Rng> {
	rng: R,
}

impl<R: Rng> RandomPicker<R> {
	pub fn new(rng: R) -> Self {
		Self { rng }
	}
}

impl RandomPicker<ThreadRng> {
	/// Picker seeded from the operating system, different on every run.
	pub fn from_thread_rng() -> Self {
		Self::new(rand::rng())
	}
}

impl RandomPicker<StdRng> {
	/// Picker that replays the same sequence for the same seed.
	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> IndexPicker for RandomPicker<R> {
	fn pick_index(&mut self, len: usize) -> usize {
		self.rng.random_range(0..len)
	}
}

/// Picker replaying a fixed list of indices, cycling when exhausted.
///
/// Each scripted index is reduced modulo the candidate count, so any script
/// is valid for any chain.
#[derive(Clone, Debug)]
pub struct ScriptedPicker {
	script: Vec<usize>,
	position: usize,
}

impl ScriptedPicker {
	/// Creates a picker from `script`. An empty script always picks 0.
	pub fn new(script: Vec<usize>) -> Self {
		Self { script, position: 0 }
	}

	/// Picker that always selects the first candidate.
	pub fn first() -> Self {
		Self::new(vec![0])
	}
}

impl IndexPicker for ScriptedPicker {
	fn pick_index(&mut self, len: usize) -> usize {
		if self.script.is_empty() {
			return 0;
		}
		let index = self.script[self.position % self.script.len()];
		self.position += 1;
		index % len
	}
}
