//! Error taxonomy for the mapping pipeline
//!
//! All three variants are fatal: the pipeline is a one-shot batch transform
//! with no partial-success mode, so any of these aborts the whole run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GalaxyError {
	/// An input record field could not be parsed. Reports the 1-based data
	/// row so the offending line is easy to find in the source file.
	#[error("malformed record at row {row}, field '{field}': {reason}")]
	MalformedRecord {
		row: usize,
		field: &'static str,
		reason: String,
	},

	/// Fitting the vectorizer left no surviving vocabulary terms, either
	/// because the corpus was empty or the document-frequency bounds
	/// filtered everything out.
	#[error("vectorizer fit produced an empty vocabulary (corpus of {documents} documents, every term filtered)")]
	EmptyVocabulary { documents: usize },

	/// A 3D layout is undefined for fewer than two points.
	#[error("embedding needs at least 2 records, got {0}")]
	DegenerateEmbeddingInput(usize),
}
