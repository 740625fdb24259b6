use crate::error::ChainError;

/// Input parameters for a bounded generation run.
///
/// # Responsibilities
/// - Track the minimum number of steps before a sentence end may stop the walk
/// - Track an optional step cap that turns a runaway walk into an error
///
/// # Invariants
/// - When set, `max_steps` is strictly greater than `min_length`
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationInput {
	/// Steps that must be exceeded before a sentence end is honored.
	min_length: usize,

	/// Optional hard cap on the number of steps.
	max_steps: Option<usize>,
}

impl GenerationInput {
	/// Creates an uncapped input, equivalent to [`Generator::generate`](super::generator::Generator::generate).
	pub fn new(min_length: usize) -> Self {
		Self { min_length, max_steps: None }
	}

	pub fn min_length(&self) -> usize {
		self.min_length
	}

	pub fn max_steps(&self) -> Option<usize> {
		self.max_steps
	}

	/// Caps the walk at `limit` steps.
	///
	/// # Errors
	/// Returns an error if `limit <= min_length`: such a walk could never stop
	/// on a sentence end.
	pub fn set_max_steps(&mut self, limit: usize) -> Result<(), ChainError> {
		if limit <= self.min_length {
			return Err(ChainError::InvalidStepLimit { limit, min_length: self.min_length });
		}
		self.max_steps = Some(limit);
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_input_is_uncapped() {
		let input = GenerationInput::new(12);
		assert_eq!(input.min_length(), 12);
		assert_eq!(input.max_steps(), None);
	}

	#[test]
	fn step_cap_must_exceed_min_length() {
		let mut input = GenerationInput::new(5);
		assert!(matches!(
			input.set_max_steps(5),
			Err(ChainError::InvalidStepLimit { limit: 5, min_length: 5 })
		));
		assert_eq!(input.max_steps(), None);

		input.set_max_steps(6).unwrap();
		assert_eq!(input.max_steps(), Some(6));
	}
}
