//! Application configuration and constants

// === Dataset ===
pub const DEFAULT_ROW_LIMIT: usize = 5000;

// === Vectorizer Defaults ===
pub const DEFAULT_MAX_DF: f64 = 0.90;
pub const DEFAULT_MIN_DF: usize = 5;

// === Embedding Defaults ===
pub const OUTPUT_DIMENSIONS: usize = 3;
pub const DEFAULT_NEIGHBORS: usize = 15;
pub const DEFAULT_MIN_DIST: f32 = 0.1;
pub const DEFAULT_SEED: u64 = 42;

// === Search Defaults ===
pub const DEFAULT_TOP_K: usize = 10;
pub const DEFAULT_MIN_SCORE: f32 = 0.0;

// === Density Report Defaults ===
pub const DEFAULT_MIN_SUPPORT: usize = 10;

// === Feature Construction ===
pub const TAG_PREFIX: &str = "TAG_";

/// Preparation-state qualifiers stripped from ingredient phrases. The
/// trailing space is part of the pattern: "ground " matches the qualifier,
/// plain "ground" inside another word does not.
pub const PREP_WORDS: &[&str] = &[
	"diced ", "chopped ", "crushed ", "minced ", "sliced ", "ground ",
];

// === Ontology Fallbacks ===
pub const EMPTY_TAGS_CLUSTER: &str = "Uncharted Space";
pub const CATCH_ALL_CLUSTER: &str = "General Savory Space";
pub const FALLBACK_COLOR: &str = "#444444";
