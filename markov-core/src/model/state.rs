use crate::error::ChainError;

use super::context::Context;
use super::picker::IndexPicker;

/// Represents a state in the word chain.
///
/// A `State` corresponds to one [`Context`] (`key`) and stores every raw
/// token observed right after that context, in observation order.
///
/// Conceptually, this is a node in a Markov chain where each outgoing edge
/// appears once per observation; a follower seen twice is twice as likely
/// to be picked.
///
/// ## Invariants
/// - All followers belong to the same `key`
/// - Followers are raw tokens (never normalized), duplicates retained
#[derive(Clone, Debug)]
pub struct State {
	/// Identifier of the state.
	key: Context,
	/// Raw tokens that followed `key`, in the order they were seen.
	followers: Vec<String>,
}

impl State {
	/// Creates a new empty state for the given context.
	pub fn new(key: Context) -> Self {
		Self { key, followers: Vec::new() }
	}

	pub fn key(&self) -> &Context {
		&self.key
	}

	pub fn followers(&self) -> &[String] {
		&self.followers
	}

	/// Records one more occurrence of `word` after this state's key.
	pub fn add_follower(&mut self, word: &str) {
		self.followers.push(word.to_owned());
	}

	/// Picks a follower uniformly over all observations.
	///
	/// Returns `None` if the state has no followers.
	pub fn pick(&self, picker: &mut impl IndexPicker) -> Option<&str> {
		if self.followers.is_empty() {
			return None;
		}
		let index = picker.pick_index(self.followers.len());
		self.followers.get(index).map(String::as_str)
	}

	/// Merges another state into this one by appending its followers.
	///
	/// # Errors
	/// Returns [`ChainError::KeyMismatch`] if the state keys differ.
	pub fn merge(&mut self, other: &Self) -> Result<(), ChainError> {
		if self.key != other.key {
			return Err(ChainError::KeyMismatch { expected: self.key.clone(), found: other.key.clone() });
		}
		self.followers.extend_from_slice(&other.followers);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::picker::ScriptedPicker;

	#[test]
	fn followers_keep_duplicates_in_order() {
		let mut state = State::new(Context::default());
		for word in ["a", "b", "a"] {
			state.add_follower(word);
		}
		assert_eq!(state.followers(), ["a", "b", "a"]);

		let mut picker = ScriptedPicker::new(vec![2, 1]);
		assert_eq!(state.pick(&mut picker), Some("a"));
		assert_eq!(state.pick(&mut picker), Some("b"));
	}

	#[test]
	fn empty_state_picks_nothing() {
		let state = State::new(Context::default());
		assert_eq!(state.pick(&mut ScriptedPicker::first()), None);
	}

	#[test]
	fn merge_requires_matching_keys() {
		let mut left = State::new(Context::default());
		left.add_follower("x");

		let mut right = State::new(Context::default());
		right.add_follower("y");
		left.merge(&right).unwrap();
		assert_eq!(left.followers(), ["x", "y"]);

		let mut other_key = Context::default();
		other_key.push("z".to_owned());
		let stranger = State::new(other_key);
		assert!(matches!(left.merge(&stranger), Err(ChainError::KeyMismatch { .. })));
	}
}
