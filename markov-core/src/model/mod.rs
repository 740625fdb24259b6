//! Top-level module for the word chain.
//!
//! This module provides a fixed-order word-level Markov chain, including:
//! - Key normalization (`normalizer`)
//! - The chain key (`Context`) and its entries (`State`)
//! - Chain construction and merging (`WordChain`)
//! - Generation parameters (`GenerationInput`)
//! - A high-level generation interface (`Generator`)

/// High-level interface walking a trained chain to produce text.
///
/// Stops on a sentence end once a minimum number of steps is exceeded,
/// with an optional step cap.
pub mod generator;

/// Generation parameters: minimum length and optional step cap.
pub mod generation_input;

/// Fixed-order word chain mapping contexts to observed followers.
///
/// Handles training from token sequences, lookups and merging.
pub mod word_chain;

/// Sliding window of the last normalized words, used as chain key.
pub mod context;

/// A single chain entry: one context and its raw followers.
pub mod state;

/// Word normalization used to build chain keys.
pub mod normalizer;

/// Request-URI recognition used by the normalizer.
pub mod request_uri;

/// Injected sources of candidate indices.
pub mod picker;
