//! Word-level Markov chain text generation library.
//!
//! This crate provides the pieces of a fixed-order word chain:
//! - Word normalization used to build chain keys
//! - Chain construction from whitespace-delimited tokens
//! - Stochastic generation that stops on a sentence boundary
//! - Tokenization of text sources into chain input
//!
//! Randomness is injected through [`model::picker::IndexPicker`], so a
//! generation run can be replayed exactly with a scripted picker.

/// Chain model, normalization and generation logic.
pub mod model;

/// Text source loading and tokenization.
pub mod io;

/// Error type shared by the whole crate.
pub mod error;

pub use error::ChainError;
