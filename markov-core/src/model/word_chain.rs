use std::collections::HashMap;

use log::trace;

use crate::error::ChainError;

use super::context::Context;
use super::normalizer::normalize;
use super::state::State;

/// Represents a fixed-order word chain.
///
/// The `WordChain` maps each [`Context`] (the last three normalized words)
/// to the [`State`] holding every raw token seen right after it.
///
/// # Responsibilities
/// - Build the chain from token sequences, one training pass per source
/// - Look up the followers of a context during generation
/// - Merge with another chain built from other sources
///
/// # Invariants
/// - Each state in `states` is stored under its own key
/// - The chain only grows; nothing is ever removed
#[derive(Clone, Debug, Default)]
pub struct WordChain {
	/// Mapping from a context to its corresponding state
	states: HashMap<Context, State>,
}

impl WordChain {
	/// Creates an empty chain.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds one source's tokens to the chain.
	///
	/// Each raw token is recorded under the context formed by the normalized
	/// tokens before it, then shifted into that context. The context starts
	/// empty on every call, so the first token of a source is always recorded
	/// under the start context and sources never share context.
	///
	/// # Notes
	/// - Tokens are stored raw; only the keys are normalized.
	/// - An empty sequence leaves the chain untouched.
	pub fn train<I, S>(&mut self, tokens: I)
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut context = Context::default();
		for token in tokens {
			let token = token.as_ref();
			self.states
				.entry(context.clone())
				.or_insert_with(|| State::new(context.clone()))
				.add_follower(token);
			context.push(normalize(token));
		}
		trace!("chain now holds {} states", self.states.len());
	}

	/// Returns the state stored under `context`, if any.
	pub fn successors(&self, context: &Context) -> Option<&State> {
		self.states.get(context)
	}

	/// Returns the raw followers of `context`; empty when the context is unknown.
	pub fn followers(&self, context: &Context) -> &[String] {
		match self.successors(context) {
			Some(state) => state.followers(),
			None => &[],
		}
	}

	/// Returns `true` if some source has been trained, i.e. the start context exists.
	pub fn has_start(&self) -> bool {
		self.states.contains_key(&Context::default())
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Merges another chain into this one.
	///
	/// # Notes
	/// - Followers of matching contexts are concatenated, `self` first.
	/// - Contexts only present in `other` are cloned.
	///
	/// # Errors
	/// Returns an error if a state is stored under a foreign key.
	pub fn merge(&mut self, other: &Self) -> Result<(), ChainError> {
		for (key, state) in &other.states {
			if let Some(existing) = self.states.get_mut(key) {
				existing.merge(state)?;
			} else {
				self.states.insert(key.clone(), state.clone());
			}
		}
		Ok(())
	}
}
