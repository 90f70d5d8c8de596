//! Feature construction - turns raw ingredient and tag text into the
//! canonical tokens the vectorizer consumes

use crate::config::{PREP_WORDS, TAG_PREFIX};
use crate::core::Record;

/// Normalize one ingredient phrase into a single opaque token.
///
/// Preparation qualifiers are stripped wherever they occur in the phrase,
/// not just as a prefix: "fresh diced onion" and "diced fresh onion" both
/// reduce to the same token. Remaining interior whitespace becomes
/// underscores so the phrase survives whitespace tokenization as one term.
pub fn normalize_ingredient(raw: &str) -> String {
	let mut cleaned = raw.to_string();
	for word in PREP_WORDS {
		cleaned = cleaned.replace(word, "");
	}
	join_words(&cleaned)
}

/// Normalize one tag into a namespaced token. The prefix keeps tag terms
/// from colliding with ingredient terms in the shared vocabulary.
pub fn normalize_tag(raw: &str) -> String {
	let token = join_words(raw);
	if token.is_empty() {
		return token;
	}
	format!("{}{}", TAG_PREFIX, token)
}

/// One feature string per record: normalized ingredients first, namespaced
/// tags second, single-space separated. Pure function of the record; empty
/// tokens from empty source entries are dropped.
pub fn build_feature_string(record: &Record) -> String {
	let tokens: Vec<String> = record
		.ingredients
		.iter()
		.map(|i| normalize_ingredient(i))
		.chain(record.tags.iter().map(|t| normalize_tag(t)))
		.filter(|t| !t.is_empty())
		.collect();

	tokens.join(" ")
}

/// Free-text query counterpart of [`build_feature_string`]: each
/// whitespace-separated word stands on its own, so "diced onion rice"
/// becomes "onion rice" and lines up with single-word vocabulary terms.
/// Standalone qualifier words carry no signal and are dropped.
pub fn build_query_string(text: &str) -> String {
	text.split_whitespace()
		.filter(|w| !PREP_WORDS.iter().any(|p| p.trim_end() == *w))
		.collect::<Vec<_>>()
		.join(" ")
}

/// Trim and collapse interior whitespace runs into single underscores.
fn join_words(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join("_")
}
