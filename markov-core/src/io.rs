use std::fs;
use std::path::Path;

use log::debug;

use crate::error::ChainError;
use crate::model::normalizer::LINE_END;

/// Reads a text file and returns its tokens.
///
/// - Reads the entire file into memory
/// - Invalid UTF-8 sequences are replaced rather than rejected
/// - See [`split_words`] for the tokenization rules
pub fn read_words<P: AsRef<Path>>(path: P) -> Result<Vec<String>, ChainError> {
	let path = path.as_ref();
	let bytes = fs::read(path).map_err(|source| ChainError::Source { path: path.to_path_buf(), source })?;
	let words = split_words(&String::from_utf8_lossy(&bytes));
	debug!("read {} words from {}", words.len(), path.display());
	Ok(words)
}

/// Splits text into whitespace-delimited tokens, line by line.
///
/// The last token of every non-empty line gets [`LINE_END`] appended, which
/// is how line and paragraph ends reach the normalizer. Blank lines yield
/// nothing.
///
/// Example:
/// `"Hello world\n\nBye"` → `["Hello", "world\n", "Bye\n"]`
pub fn split_words(text: &str) -> Vec<String> {
	let mut words = Vec::new();
	for line in text.lines() {
		let start = words.len();
		words.extend(line.split_whitespace().map(str::to_owned));
		if let Some(last) = words[start..].last_mut() {
			last.push(LINE_END);
		}
	}
	words
}
