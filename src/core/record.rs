//! Input and export record shapes

use serde::{Deserialize, Serialize};

/// 3D coordinates assigned to a record by the embedding engine.
pub type Position = [f32; 3];

/// One input recipe. Immutable once loaded; everything downstream is derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
	pub id: String,
	pub name: String,
	pub ingredients: Vec<String>,
	pub tags: Vec<String>,
	pub steps: Vec<String>,
}

/// One exported star for the external viewer. Row i of the export
/// corresponds to row i of the input dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarRecord {
	pub id: String,
	pub name: String,
	pub x: f32,
	pub y: f32,
	pub z: f32,
	pub galaxy_cluster: String,
	pub star_color: String,
	pub ingredients: Vec<String>,
	pub steps: Vec<String>,
}

impl StarRecord {
	/// Merge a record with its position and cluster assignment, applying
	/// the viewer's display conventions (title-cased name, capitalized
	/// ingredient and step text).
	pub fn new(record: &Record, position: Position, assignment: &crate::core::Assignment) -> Self {
		Self {
			id: record.id.clone(),
			name: title_case(&record.name),
			x: position[0],
			y: position[1],
			z: position[2],
			galaxy_cluster: assignment.cluster.clone(),
			star_color: assignment.color.clone(),
			ingredients: record.ingredients.iter().map(|s| capitalize(s)).collect(),
			steps: record.steps.iter().map(|s| capitalize(s)).collect(),
		}
	}
}

/// Uppercase the first letter of every whitespace-separated word.
pub fn title_case(text: &str) -> String {
	text.split_whitespace()
		.map(capitalize)
		.collect::<Vec<_>>()
		.join(" ")
}

/// Uppercase the first letter, leave the rest untouched.
pub fn capitalize<S: AsRef<str>>(text: S) -> String {
	let text = text.as_ref();
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
		None => String::new(),
	}
}
