use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::model::context::Context;

/// Errors raised by chain construction, generation and source loading.
///
/// Normalization never fails: a token that folds to nothing keeps its
/// original text as the key body instead.
#[derive(Debug, Error)]
pub enum ChainError {
	/// A text source could not be opened or read.
	#[error("failed to read {}: {source}", path.display())]
	Source {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// Two states with different keys were merged.
	#[error("state key mismatch: {expected} != {found}")]
	KeyMismatch { expected: Context, found: Context },

	/// Bounded generation reached its step cap before a sentence end.
	#[error("no sentence end reached within {limit} steps")]
	StepLimit { limit: usize },

	/// A step cap was requested that can never allow a normal stop.
	#[error("step limit {limit} must be greater than the minimum length {min_length}")]
	InvalidStepLimit { limit: usize, min_length: usize },
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn source_error_names_the_path() {
		let error = ChainError::Source {
			path: PathBuf::from("missing.txt"),
			source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
		};
		let message = error.to_string();
		assert!(message.contains("missing.txt"));
		assert!(message.contains("no such file"));
	}

	#[test]
	fn step_limit_errors_display_their_bounds() {
		let error = ChainError::InvalidStepLimit { limit: 3, min_length: 5 };
		assert_eq!(error.to_string(), "step limit 3 must be greater than the minimum length 5");
		assert_eq!(ChainError::StepLimit { limit: 10 }.to_string(), "no sentence end reached within 10 steps");
	}
}
