//! # Command Implementations
//!
//! Each submodule handles one CLI command (map, search, density). All three
//! share the same fit path: load the dataset, build the galaxy, then hand
//! the read-only map to the command body.

pub mod density;
pub mod map;
pub mod search;

use anyhow::Result;

use crate::cli::FitArgs;
use crate::core::Ontology;
use crate::pipeline::{GalaxyMap, PipelineParams};
use crate::processing::umap::EmbedParams;
use crate::processing::VectorParams;
use crate::storage;

fn pipeline_params(fit: &FitArgs) -> Result<PipelineParams> {
	let ontology = match &fit.ontology {
		Some(path) => Ontology::from_file(path)?,
		None => Ontology::default(),
	};

	Ok(PipelineParams {
		vector: VectorParams {
			max_df: fit.max_df,
			min_df: fit.min_df,
		},
		embed: EmbedParams {
			n_neighbors: fit.neighbors,
			min_dist: fit.min_dist,
			seed: fit.seed,
		},
		ontology,
	})
}

/// Load the dataset and run the full batch fit.
fn build_map(fit: &FitArgs) -> Result<GalaxyMap> {
	let params = pipeline_params(fit)?;
	let records = storage::load_records(&fit.data, fit.rows)?;
	let map = GalaxyMap::build(records, &params)?;
	Ok(map)
}
