//! Tag density analysis over the fitted 3D galaxy
//!
//! For each sufficiently common tag, measures how tightly its recipes sit
//! together relative to the global spread. A density score above 1.0 means
//! the tag forms a tighter-than-average region of the map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::core::{Position, Record};

/// Per-tag clustering statistics, ranked by density.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagDensityReport {
	#[serde(rename = "Tag")]
	pub tag: String,
	#[serde(rename = "Recipe_Count")]
	pub recipe_count: usize,
	#[serde(rename = "Average_Spread")]
	pub average_spread: f32,
	#[serde(rename = "Density_Score")]
	pub density_score: f32,
}

/// Evaluate every tag with at least `min_support` member recipes against
/// the global spread. `positions[i]` must correspond to `records[i]`.
/// Output is sorted by descending density score (alphabetical on ties so
/// runs are comparable).
pub fn evaluate_tag_density(
	records: &[Record],
	positions: &[Position],
	min_support: usize,
) -> Vec<TagDensityReport> {
	debug_assert_eq!(records.len(), positions.len());
	if positions.is_empty() {
		return Vec::new();
	}

	let global_centroid = centroid(positions);
	let global_spread = average_spread(positions, global_centroid);

	// Tag -> member row indices, in input order
	let mut membership: HashMap<&str, Vec<usize>> = HashMap::new();
	for (i, record) in records.iter().enumerate() {
		for tag in &record.tags {
			membership.entry(tag.as_str()).or_default().push(i);
		}
	}

	let mut reports: Vec<TagDensityReport> = membership
		.into_iter()
		.filter(|(_, members)| members.len() >= min_support)
		.map(|(tag, members)| {
			let member_points: Vec<Position> = members.iter().map(|&i| positions[i]).collect();
			let tag_centroid = centroid(&member_points);
			let spread = average_spread(&member_points, tag_centroid);

			// Coincident members have zero spread; score 0 by convention
			// rather than dividing by zero.
			let density_score = if spread > 0.0 {
				global_spread / spread
			} else {
				0.0
			};

			TagDensityReport {
				tag: tag.to_string(),
				recipe_count: members.len(),
				average_spread: spread,
				density_score,
			}
		})
		.collect();

	reports.sort_by(|a, b| {
		b.density_score
			.partial_cmp(&a.density_score)
			.unwrap_or(std::cmp::Ordering::Equal)
			.then_with(|| a.tag.cmp(&b.tag))
	});

	reports
}

fn centroid(points: &[Position]) -> Position {
	let mut sum = [0.0f32; 3];
	for point in points {
		for (axis, value) in point.iter().enumerate() {
			sum[axis] += value;
		}
	}
	let n = points.len() as f32;
	[sum[0] / n, sum[1] / n, sum[2] / n]
}

fn average_spread(points: &[Position], center: Position) -> f32 {
	let total: f32 = points.iter().map(|p| euclidean(*p, center)).sum();
	total / points.len() as f32
}

fn euclidean(a: Position, b: Position) -> f32 {
	a.iter()
		.zip(b.iter())
		.map(|(x, y)| (x - y) * (x - y))
		.sum::<f32>()
		.sqrt()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn record(id: &str, tags: &[&str]) -> Record {
		Record {
			id: id.into(),
			name: id.into(),
			ingredients: vec![],
			tags: tags.iter().map(|s| s.to_string()).collect(),
			steps: vec![],
		}
	}

	#[test]
	fn zero_spread_tag_scores_zero_by_convention() {
		let records = vec![
			record("a", &["pinned"]),
			record("b", &["pinned"]),
			record("c", &["spread"]),
			record("d", &["spread"]),
		];
		// "pinned" members coincide exactly; "spread" members do not.
		let positions = vec![
			[1.0, 1.0, 1.0],
			[1.0, 1.0, 1.0],
			[-4.0, 0.0, 0.0],
			[4.0, 0.0, 0.0],
		];

		let reports = evaluate_tag_density(&records, &positions, 2);
		let pinned = reports.iter().find(|r| r.tag == "pinned").unwrap();
		let spread = reports.iter().find(|r| r.tag == "spread").unwrap();

		assert_eq!(pinned.density_score, 0.0);
		assert_eq!(pinned.average_spread, 0.0);
		assert!(spread.density_score > 0.0);
	}

	#[test]
	fn tag_covering_all_records_scores_one() {
		// A tag on every record has the global centroid and spread, so its
		// density is the global/global ratio.
		let records = vec![
			record("a", &["everything"]),
			record("b", &["everything"]),
			record("c", &["everything"]),
		];
		let positions = vec![
			[0.0, 0.0, 0.0],
			[2.0, 0.0, 0.0],
			[0.0, 2.0, 0.0],
		];

		let reports = evaluate_tag_density(&records, &positions, 2);
		assert_eq!(reports.len(), 1);
		assert!((reports[0].density_score - 1.0).abs() < 1e-6);
	}

	#[test]
	fn rare_tags_fall_below_min_support() {
		let records = vec![
			record("a", &["common", "rare"]),
			record("b", &["common"]),
			record("c", &["common"]),
		];
		let positions = vec![
			[0.0, 0.0, 0.0],
			[1.0, 0.0, 0.0],
			[0.0, 1.0, 0.0],
		];

		let reports = evaluate_tag_density(&records, &positions, 2);
		assert_eq!(reports.len(), 1);
		assert_eq!(reports[0].tag, "common");
		assert_eq!(reports[0].recipe_count, 3);
	}

	#[test]
	fn tighter_tags_rank_first() {
		let records = vec![
			record("a", &["tight"]),
			record("b", &["tight"]),
			record("c", &["loose"]),
			record("d", &["loose"]),
		];
		let positions = vec![
			[0.0, 0.0, 0.0],
			[0.1, 0.0, 0.0],
			[-9.0, 0.0, 0.0],
			[9.0, 0.0, 0.0],
		];

		let reports = evaluate_tag_density(&records, &positions, 2);
		assert_eq!(reports[0].tag, "tight");
		assert!(reports[0].density_score > reports[1].density_score);
	}

	#[test]
	fn empty_input_yields_empty_report() {
		assert!(evaluate_tag_density(&[], &[], 1).is_empty());
	}
}
