//! Tag ontology - ordered keyword rules mapping recipe tags to a named
//! cluster and a display color
//!
//! Matching is first-match over an ordered rule list, so the table's order
//! decides precedence for multi-tag recipes (a recipe tagged both "vegan"
//! and "dessert" lands in whichever rule is listed first). The table is
//! data, not logic: it can be swapped out from a JSON file without touching
//! the matcher.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{CATCH_ALL_CLUSTER, EMPTY_TAGS_CLUSTER, FALLBACK_COLOR};

/// One classification rule: any-of keyword set, cluster name, display color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OntologyRule {
	pub keywords: Vec<String>,
	pub cluster: String,
	pub color: String,
}

/// Cluster label and color assigned to one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
	pub cluster: String,
	pub color: String,
}

/// An ordered rule table. Evaluation order is the listing order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ontology {
	pub rules: Vec<OntologyRule>,
}

impl Ontology {
	/// Load a rule table from a JSON file.
	pub fn from_file(path: &Path) -> Result<Self> {
		let content = fs::read_to_string(path)
			.with_context(|| format!("Failed to read ontology file {}", path.display()))?;
		let ontology: Self = serde_json::from_str(&content)
			.with_context(|| format!("Invalid ontology JSON in {}", path.display()))?;
		Ok(ontology)
	}

	/// Assign a cluster to a tag list. Total function: empty tag lists get
	/// the "Uncharted Space" fallback, unmatched ones the savory catch-all.
	pub fn classify(&self, tags: &[String]) -> Assignment {
		if tags.is_empty() {
			return Assignment {
				cluster: EMPTY_TAGS_CLUSTER.to_string(),
				color: FALLBACK_COLOR.to_string(),
			};
		}

		let scan: String = tags
			.iter()
			.map(|t| t.to_lowercase())
			.collect::<Vec<_>>()
			.join(" ");

		for rule in &self.rules {
			if rule.keywords.iter().any(|k| scan.contains(k.as_str())) {
				return Assignment {
					cluster: rule.cluster.clone(),
					color: rule.color.clone(),
				};
			}
		}

		Assignment {
			cluster: CATCH_ALL_CLUSTER.to_string(),
			color: FALLBACK_COLOR.to_string(),
		}
	}
}

impl Default for Ontology {
	/// Built-in rule table. Dietary rules outrank cuisine rules, which
	/// outrank protein rules; colors follow the viewer's palette (greens
	/// for plant-based, warm colors for cuisines, blues for proteins).
	fn default() -> Self {
		let table: &[(&[&str], &str, &str)] = &[
			(&["vegan"], "Vegan Cluster", "#00ff00"),
			(&["vegetarian"], "Vegetarian Cluster", "#228b22"),
			(&["gluten-free"], "Gluten-Free Cluster", "#7cfc00"),
			(&["asian", "chinese", "japanese", "thai"], "Asian Cuisine", "#ff8c00"),
			(&["mexican", "southwestern"], "Mexican Cuisine", "#ff4500"),
			(&["italian"], "Italian Cuisine", "#dc143c"),
			(&["indian"], "Indian Cuisine", "#ffd700"),
			(&["dessert", "baking", "cake", "cookie", "brownie"], "Dessert Nebula", "#ff00ff"),
			(&["breakfast", "brunch", "pancake"], "Breakfast System", "#ffb6c1"),
			(&["beverages", "smoothie", "drink"], "Beverage System", "#9370db"),
			(&["seafood", "fish", "shrimp"], "Seafood Sector", "#00ffff"),
			(&["poultry", "chicken", "turkey"], "Poultry Sector", "#1e90ff"),
			(&["beef", "pork", "meat"], "Meat Sector", "#000080"),
			(&["pasta"], "Pasta Sector", "#f08080"),
		];

		let rules = table
			.iter()
			.map(|(keywords, cluster, color)| OntologyRule {
				keywords: keywords.iter().map(|k| k.to_string()).collect(),
				cluster: cluster.to_string(),
				color: color.to_string(),
			})
			.collect();

		Self { rules }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tags(list: &[&str]) -> Vec<String> {
		list.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn empty_tags_fall_back_to_uncharted_space() {
		let assignment = Ontology::default().classify(&[]);
		assert_eq!(assignment.cluster, EMPTY_TAGS_CLUSTER);
		assert_eq!(assignment.color, FALLBACK_COLOR);
	}

	#[test]
	fn unmatched_tags_land_in_the_catch_all() {
		let assignment = Ontology::default().classify(&tags(&["xyz-unknown-tag"]));
		assert_eq!(assignment.cluster, CATCH_ALL_CLUSTER);
		assert_eq!(assignment.color, FALLBACK_COLOR);
	}

	#[test]
	fn first_listed_rule_wins() {
		// The default table lists vegan before dessert, so a recipe tagged
		// with both resolves to the vegan rule.
		let assignment = Ontology::default().classify(&tags(&["vegan", "dessert"]));
		assert_eq!(assignment.cluster, "Vegan Cluster");

		let assignment = Ontology::default().classify(&tags(&["dessert", "vegan"]));
		assert_eq!(assignment.cluster, "Vegan Cluster");
	}

	#[test]
	fn matching_is_case_insensitive_substring() {
		let assignment = Ontology::default().classify(&tags(&["30-minutes-or-less", "Thai-Style"]));
		assert_eq!(assignment.cluster, "Asian Cuisine");
	}

	#[test]
	fn custom_table_order_controls_precedence() {
		let ontology = Ontology {
			rules: vec![
				OntologyRule {
					keywords: vec!["dessert".into()],
					cluster: "Sweets First".into(),
					color: "#ffffff".into(),
				},
				OntologyRule {
					keywords: vec!["vegan".into()],
					cluster: "Vegan Second".into(),
					color: "#000000".into(),
				},
			],
		};
		let assignment = ontology.classify(&tags(&["vegan", "dessert"]));
		assert_eq!(assignment.cluster, "Sweets First");
	}

	#[test]
	fn rule_table_round_trips_through_json() {
		let ontology = Ontology::default();
		let json = serde_json::to_string(&ontology).unwrap();
		let back: Ontology = serde_json::from_str(&json).unwrap();
		assert_eq!(back.rules.len(), ontology.rules.len());
		assert_eq!(back.rules[0].cluster, "Vegan Cluster");
	}
}
