//! TF-IDF vector space model
//!
//! Fits once over the whole corpus, then the vocabulary and IDF weights are
//! frozen: re-transforming training documents and transforming ad hoc query
//! strings go through the same code path, and tokens outside the frozen
//! vocabulary contribute nothing.

use std::collections::HashMap;

use crate::config::{DEFAULT_MAX_DF, DEFAULT_MIN_DF};
use crate::core::FeatureVector;
use crate::error::GalaxyError;

/// Document-frequency bounds applied before weighting.
#[derive(Debug, Clone, Copy)]
pub struct VectorParams {
	/// Terms in more than this fraction of documents are dropped as
	/// ubiquitous stopword-like noise.
	pub max_df: f64,
	/// Terms in fewer than this many documents are dropped as typos/noise.
	pub min_df: usize,
}

impl Default for VectorParams {
	fn default() -> Self {
		Self {
			max_df: DEFAULT_MAX_DF,
			min_df: DEFAULT_MIN_DF,
		}
	}
}

/// A fitted vectorizer: frozen vocabulary with stable column indices and
/// per-term IDF weights.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
	vocabulary: HashMap<String, u32>,
	idf: Vec<f32>,
	terms: Vec<String>,
}

impl TfidfVectorizer {
	/// Fit over the whole corpus in one batch. Document frequency is
	/// counted once per document per term, the bounds are enforced, and
	/// surviving terms get smoothed IDF weights:
	/// ln((1 + n) / (1 + df)) + 1.
	pub fn fit(documents: &[String], params: VectorParams) -> Result<Self, GalaxyError> {
		let n_docs = documents.len();

		let mut doc_freq: HashMap<&str, usize> = HashMap::new();
		for doc in documents {
			let mut seen: Vec<&str> = doc.split_whitespace().collect();
			seen.sort_unstable();
			seen.dedup();
			for term in seen {
				*doc_freq.entry(term).or_insert(0) += 1;
			}
		}

		let df_ceiling = params.max_df * n_docs as f64;
		let mut surviving: Vec<(&str, usize)> = doc_freq
			.into_iter()
			.filter(|&(_, df)| df >= params.min_df && df as f64 <= df_ceiling)
			.collect();

		if surviving.is_empty() {
			return Err(GalaxyError::EmptyVocabulary { documents: n_docs });
		}

		// Alphabetical column order keeps indices stable across runs.
		surviving.sort_unstable_by(|a, b| a.0.cmp(b.0));

		let mut vocabulary = HashMap::with_capacity(surviving.len());
		let mut idf = Vec::with_capacity(surviving.len());
		let mut terms = Vec::with_capacity(surviving.len());

		for (column, (term, df)) in surviving.into_iter().enumerate() {
			vocabulary.insert(term.to_string(), column as u32);
			idf.push((((1 + n_docs) as f32) / ((1 + df) as f32)).ln() + 1.0);
			terms.push(term.to_string());
		}

		Ok(Self {
			vocabulary,
			idf,
			terms,
		})
	}

	/// Number of surviving vocabulary terms (column count).
	pub fn vocabulary_size(&self) -> usize {
		self.terms.len()
	}

	/// The term behind a column index.
	pub fn term(&self, column: u32) -> &str {
		&self.terms[column as usize]
	}

	/// Transform one document into the frozen vector space. Weight =
	/// term count in the document x the term's IDF; unknown tokens are
	/// silently ignored.
	pub fn transform_one(&self, document: &str) -> FeatureVector {
		let mut counts: HashMap<u32, f32> = HashMap::new();
		for token in document.split_whitespace() {
			if let Some(&column) = self.vocabulary.get(token) {
				*counts.entry(column).or_insert(0.0) += 1.0;
			}
		}

		FeatureVector::new(
			counts
				.into_iter()
				.map(|(column, tf)| (column, tf * self.idf[column as usize]))
				.collect(),
		)
	}

	/// Transform a batch, preserving input order.
	pub fn transform(&self, documents: &[String]) -> Vec<FeatureVector> {
		documents.iter().map(|d| self.transform_one(d)).collect()
	}
}
