//! Batch pipeline - feature construction, vectorization, projection and
//! labeling in one pass
//!
//! The [`GalaxyMap`] owns the record set, the fitted vectorizer and the
//! embedding. Every stage runs to completion before the next begins; once
//! built, the map is read-only and freely shared by searches and reports.

use crate::core::{
	build_feature_string, Assignment, FeatureVector, Ontology, Position, Record, StarRecord,
};
use crate::error::GalaxyError;
use crate::processing::umap::{reduce_vectors, EmbedParams};
use crate::processing::{TfidfVectorizer, VectorParams};
use crate::ui;

/// Everything configurable about one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct PipelineParams {
	pub vector: VectorParams,
	pub embed: EmbedParams,
	pub ontology: Ontology,
}

/// A fully fitted recipe galaxy. Index i everywhere refers to input
/// record i.
#[derive(Debug)]
pub struct GalaxyMap {
	records: Vec<Record>,
	vectorizer: TfidfVectorizer,
	vectors: Vec<FeatureVector>,
	positions: Vec<Position>,
	assignments: Vec<Assignment>,
}

impl GalaxyMap {
	/// Run the whole batch transform: normalize and vectorize features,
	/// project to 3D, classify tags. Fails outright on an empty vocabulary
	/// or a degenerate (< 2 record) input; no partial output exists.
	pub fn build(records: Vec<Record>, params: &PipelineParams) -> Result<Self, GalaxyError> {
		ui::info(&format!("Building galaxy from {} recipes", records.len()));

		let features: Vec<String> = records.iter().map(build_feature_string).collect();

		ui::debug(&format!(
			"Vectorizing (max_df={}, min_df={})",
			params.vector.max_df, params.vector.min_df
		));
		let vectorizer = TfidfVectorizer::fit(&features, params.vector)?;
		ui::success(&format!(
			"Vocabulary: {} terms",
			vectorizer.vocabulary_size()
		));

		let vectors = vectorizer.transform(&features);

		let positions = reduce_vectors(&vectors, vectorizer.vocabulary_size(), params.embed)?;

		let assignments: Vec<Assignment> = records
			.iter()
			.map(|r| params.ontology.classify(&r.tags))
			.collect();

		Ok(Self {
			records,
			vectorizer,
			vectors,
			positions,
			assignments,
		})
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}

	pub fn records(&self) -> &[Record] {
		&self.records
	}

	pub fn vectorizer(&self) -> &TfidfVectorizer {
		&self.vectorizer
	}

	pub fn vectors(&self) -> &[FeatureVector] {
		&self.vectors
	}

	pub fn positions(&self) -> &[Position] {
		&self.positions
	}

	pub fn assignments(&self) -> &[Assignment] {
		&self.assignments
	}

	/// Merge records, coordinates and labels into viewer-ready export rows,
	/// in input order.
	pub fn export_records(&self) -> Vec<StarRecord> {
		self.records
			.iter()
			.zip(self.positions.iter())
			.zip(self.assignments.iter())
			.map(|((record, &position), assignment)| StarRecord::new(record, position, assignment))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_records() -> Vec<Record> {
		vec![
			Record {
				id: "11".into(),
				name: "green bowl".into(),
				ingredients: vec!["diced onion".into(), "rice".into()],
				tags: vec!["vegan".into(), "easy".into()],
				steps: vec!["mix".into()],
			},
			Record {
				id: "22".into(),
				name: "simple cake".into(),
				ingredients: vec!["flour".into(), "sugar".into()],
				tags: vec!["dessert".into(), "cake".into()],
				steps: vec!["bake".into()],
			},
			Record {
				id: "33".into(),
				name: "plain chicken".into(),
				ingredients: vec!["chicken".into()],
				tags: vec![],
				steps: vec!["roast it".into()],
			},
		]
	}

	fn loose_params() -> PipelineParams {
		PipelineParams {
			vector: VectorParams {
				max_df: 1.0,
				min_df: 1,
			},
			embed: EmbedParams {
				n_neighbors: 2,
				seed: 42,
				..EmbedParams::default()
			},
			ontology: Ontology::default(),
		}
	}

	#[test]
	fn export_preserves_input_order_and_ids() {
		let map = GalaxyMap::build(sample_records(), &loose_params()).unwrap();
		let export = map.export_records();
		let ids: Vec<&str> = export.iter().map(|r| r.id.as_str()).collect();
		assert_eq!(ids, vec!["11", "22", "33"]);
	}

	#[test]
	fn labels_follow_the_ontology() {
		let map = GalaxyMap::build(sample_records(), &loose_params()).unwrap();
		let clusters: Vec<&str> = map
			.assignments()
			.iter()
			.map(|a| a.cluster.as_str())
			.collect();
		assert_eq!(
			clusters,
			vec!["Vegan Cluster", "Dessert Nebula", "Uncharted Space"]
		);
	}

	#[test]
	fn export_applies_display_conventions() {
		let map = GalaxyMap::build(sample_records(), &loose_params()).unwrap();
		let export = map.export_records();
		assert_eq!(export[0].name, "Green Bowl");
		assert_eq!(export[0].ingredients, vec!["Diced onion", "Rice"]);
		assert_eq!(export[2].steps, vec!["Roast it"]);
		assert_eq!(export[2].star_color, crate::config::FALLBACK_COLOR);
	}

	#[test]
	fn building_from_one_record_fails() {
		let records = vec![sample_records().remove(0)];
		let err = GalaxyMap::build(records, &loose_params()).unwrap_err();
		assert!(matches!(err, GalaxyError::DegenerateEmbeddingInput(1)));
	}

	#[test]
	fn positions_align_with_records() {
		let map = GalaxyMap::build(sample_records(), &loose_params()).unwrap();
		assert_eq!(map.positions().len(), map.len());
		assert_eq!(map.vectors().len(), map.len());
	}
}
