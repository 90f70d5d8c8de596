//! Similarity query against a fitted galaxy
//!
//! Free text goes through the same normalization and the frozen vector
//! space as the corpus, then every record is ranked by cosine similarity.
//! The query is a total function: out-of-vocabulary text still returns up
//! to `top_k` entries, just flagged as weak matches.

use crate::core::build_query_string;
use crate::pipeline::GalaxyMap;

/// One ranked hit. `index` points into the map's record order.
#[derive(Debug, Clone)]
pub struct SimilarityMatch {
	pub index: usize,
	pub score: f32,
}

impl SimilarityMatch {
	/// Whether the hit clears the caller's score threshold. Weak matches
	/// are reported, not suppressed, so rank output keeps its length.
	pub fn is_strong(&self, min_score: f32) -> bool {
		self.score > min_score
	}
}

/// Rank all fitted records against `query_text` and return the top `top_k`
/// by descending score. Ties keep original record order (stable sort).
pub fn search(map: &GalaxyMap, query_text: &str, top_k: usize) -> Vec<SimilarityMatch> {
	let query = build_query_string(query_text);
	let query_vector = map.vectorizer().transform_one(&query);

	let mut matches: Vec<SimilarityMatch> = map
		.vectors()
		.iter()
		.enumerate()
		.map(|(index, vector)| SimilarityMatch {
			index,
			score: query_vector.cosine_similarity(vector),
		})
		.collect();

	matches.sort_by(|a, b| {
		b.score
			.partial_cmp(&a.score)
			.unwrap_or(std::cmp::Ordering::Equal)
	});
	matches.truncate(top_k);

	matches
}
