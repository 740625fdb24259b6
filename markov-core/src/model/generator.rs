use log::debug;

use crate::error::ChainError;
use crate::model::context::Context;
use crate::model::generation_input::GenerationInput;
use crate::model::normalizer::{is_sentence_terminal, normalize, LINE_END};
use crate::model::picker::IndexPicker;
use crate::model::word_chain::WordChain;

/// High-level generator walking a trained [`WordChain`].
///
/// # Responsibilities
/// - Own the trained chain; it is never modified after training
/// - Walk the chain from the start context, picking followers through an
///   injected [`IndexPicker`]
/// - Stop on the first sentence end once the minimum length is exceeded
#[derive(Debug)]
pub struct Generator {
	chain: WordChain,
}

impl Generator {
	pub fn new(chain: WordChain) -> Self {
		Self { chain }
	}

	pub fn chain(&self) -> &WordChain {
		&self.chain
	}

	/// Generates text of at least `min_length + 1` steps.
	///
	/// # Behavior
	/// - Starts from the empty context.
	/// - At each step, picks a follower of the current context; an unknown
	///   context yields the empty word.
	/// - Words are separated by one space, except after a line-final word.
	/// - Stops right after a word whose normalized form ends with `"."`, once
	///   the step counter exceeds `min_length`.
	///
	/// # Notes
	/// This never returns if the walk cannot reach a sentence end, e.g. when
	/// nothing was trained. Use [`Generator::generate_bounded`] to cap the walk.
	pub fn generate(&self, min_length: usize, picker: &mut impl IndexPicker) -> String {
		match self.walk(min_length, None, picker) {
			Ok(text) => text,
			Err(_) => unreachable!("an uncapped walk never fails"),
		}
	}

	/// Same walk as [`Generator::generate`], with the optional step cap of `input`.
	///
	/// # Errors
	/// Returns [`ChainError::StepLimit`] when the step counter reaches the cap
	/// without stopping on a sentence end.
	pub fn generate_bounded(
		&self,
		input: &GenerationInput,
		picker: &mut impl IndexPicker,
	) -> Result<String, ChainError> {
		self.walk(input.min_length(), input.max_steps(), picker)
	}

	fn walk(
		&self,
		min_length: usize,
		max_steps: Option<usize>,
		picker: &mut impl IndexPicker,
	) -> Result<String, ChainError> {
		let mut text = String::new();
		let mut context = Context::default();
		let mut step: usize = 0;

		loop {
			// Dead end: an unknown context yields the empty word
			let word = match self.chain.successors(&context) {
				Some(state) => state.pick(&mut *picker).unwrap_or_default(),
				None => "",
			};

			text.push_str(word);
			if !word.is_empty() && !word.ends_with(LINE_END) {
				text.push(' ');
			}

			let normalized = normalize(word);
			if step > min_length && is_sentence_terminal(&normalized) {
				break;
			}
			if let Some(limit) = max_steps {
				if step >= limit {
					return Err(ChainError::StepLimit { limit });
				}
			}

			context.push(normalized);
			step += 1;
		}

		debug!("generated {} steps", step + 1);
		if text.ends_with(' ') {
			text.pop();
		}
		Ok(text)
	}
}
