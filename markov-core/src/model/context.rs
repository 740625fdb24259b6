use std::fmt;

/// Number of normalized words that make up a chain key.
pub const CONTEXT_LEN: usize = 3;

/// Sliding window over the last [`CONTEXT_LEN`] normalized words.
///
/// Words are stored oldest first; the newest word is always at the tail.
/// The default value (all empty strings) is both the key under which the
/// first token of every source is recorded and the start state of a walk.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Context([String; CONTEXT_LEN]);

impl Context {
	/// Shifts `word` in at the tail, dropping the oldest word.
	pub fn push(&mut self, word: String) {
		self.0.rotate_left(1);
		self.0[CONTEXT_LEN - 1] = word;
	}

	/// Returns the words of the window, oldest first.
	pub fn words(&self) -> &[String] {
		&self.0
	}

	/// Returns `true` for the start context.
	pub fn is_start(&self) -> bool {
		self.0.iter().all(String::is_empty)
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}", self.0)
	}
}
