use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};
use icu_properties::{maps, sets, GeneralCategory, GeneralCategoryGroup};

use super::request_uri::is_request_uri;

/// Marker appended by tokenization to the last token of every line.
pub const LINE_END: char = '\n';

/// Key used in place of any token shaped like a URI.
pub const URL_SENTINEL: &str = "<URL>";

/// Converts a raw token into the canonical word used in chain keys.
///
/// - Empty tokens stay empty.
/// - URI-shaped tokens become [`URL_SENTINEL`]; this wins over every other rule.
/// - Everything else is folded (see [`fold`]), and gets a trailing `"."`
///   when the raw token ends a line or a sentence (see [`is_sentence_end`]).
///
/// The result is only ever used as a key, never displayed.
pub fn normalize(token: &str) -> String {
	if token.is_empty() {
		return String::new();
	}
	if is_request_uri(token) {
		return URL_SENTINEL.to_owned();
	}

	let mut word = fold(token);
	if is_sentence_end(token) {
		word.push('.');
	}
	word
}

/// Folds a token: NFD, strip nonspacing marks and punctuation, NFKC, lowercase.
///
/// Falls back to the unchanged token when nothing survives folding.
pub fn fold(token: &str) -> String {
	let general_category = maps::general_category();
	let stripped: String = DecomposingNormalizer::new_nfd()
		.normalize(token)
		.chars()
		.filter(|&c| {
			let category = general_category.get(c);
			category != GeneralCategory::NonspacingMark && !GeneralCategoryGroup::Punctuation.contains(category)
		})
		.collect();

	let folded: String = ComposingNormalizer::new_nfkc()
		.normalize(&stripped)
		.chars()
		.flat_map(char::to_lowercase)
		.collect();

	if folded.is_empty() { token.to_owned() } else { folded }
}

/// Returns `true` when the token's last code point is [`LINE_END`] or a
/// Unicode sentence terminal (`.`, `!`, `?`, `。`, `।`, ...).
pub fn is_sentence_end(token: &str) -> bool {
	token
		.chars()
		.next_back()
		.is_some_and(|last| last == LINE_END || sets::sentence_terminal().contains(last))
}

/// Returns `true` for a normalized word that may end generation.
pub fn is_sentence_terminal(normalized: &str) -> bool {
	normalized.ends_with('.')
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn empty_token_normalizes_to_empty() {
		assert_eq!(normalize(""), "");
	}

	#[test]
	fn uris_become_the_sentinel() {
		assert_eq!(normalize("https://example.com/path"), URL_SENTINEL);
		assert_eq!(normalize("/usr/bin"), URL_SENTINEL);
		// The sentinel wins over the sentence end rule
		assert_eq!(normalize("https://example.com/."), URL_SENTINEL);
		assert_eq!(normalize("see:"), URL_SENTINEL);
	}

	#[test]
	fn diacritics_punctuation_and_case_are_folded() {
		assert_eq!(normalize("Crème"), "creme");
		assert_eq!(normalize("\"Hello,"), "hello");
		assert_eq!(normalize("NAÏVE"), "naive");
		assert_eq!(normalize("don't"), "dont");
		assert_eq!(normalize("ﬁne"), "fine");
	}

	#[test]
	fn sentence_terminals_append_a_period() {
		assert_eq!(normalize("fox."), "fox.");
		assert_eq!(normalize("Why?"), "why.");
		assert_eq!(normalize("Stop!"), "stop.");
		assert_eq!(normalize("終わり。"), "終わり.");
		assert_eq!(normalize("fox,"), "fox");
	}

	#[test]
	fn line_end_marker_appends_a_period() {
		assert_eq!(normalize("fox\n"), "fox\n.");
		assert_eq!(normalize("fox.\n"), "fox\n.");
		// A line-final URI carries a control character and is folded instead
		assert_eq!(normalize("/usr/bin\n"), "usrbin\n.");
	}

	#[test]
	fn unfoldable_tokens_keep_their_text() {
		assert_eq!(fold("—"), "—");
		assert_eq!(normalize("..."), "....");
		assert_eq!(normalize("-"), "-");
	}

	#[test]
	fn terminal_check_looks_at_the_normalized_tail() {
		assert!(is_sentence_terminal(&normalize("end.")));
		assert!(is_sentence_terminal(&normalize("line\n")));
		assert!(!is_sentence_terminal(&normalize("middle")));
		assert!(!is_sentence_terminal(""));
	}

	proptest! {
		#[test]
		fn folding_is_idempotent(token in "[a-zA-Z0-9à-öø-ÿÀ-ÖØ-Þ.,;:!?'\"()-]{0,16}") {
			let once = fold(&token);
			prop_assert_eq!(fold(&once), once);
		}

		#[test]
		fn line_final_tokens_are_always_terminal(body in "\\PC{0,12}") {
			let token = format!("{body}{LINE_END}");
			prop_assert!(is_sentence_terminal(&normalize(&token)));
		}
	}
}
