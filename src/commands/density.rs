//! Density command - rank tags by how tightly they cluster in the map

use std::path::Path;

use anyhow::Result;
use colored::*;

use crate::cli::FitArgs;
use crate::processing::evaluate_tag_density;
use crate::storage;
use crate::ui;

const PREVIEW_COUNT: usize = 10;

pub fn run(fit: &FitArgs, min_support: usize, export: Option<&Path>) -> Result<()> {
	let map = super::build_map(fit)?;

	ui::debug(&format!("Evaluating tags with support >= {}", min_support));
	let reports = evaluate_tag_density(map.records(), map.positions(), min_support);

	if reports.is_empty() {
		ui::warn(&format!(
			"No tag reached the support threshold of {}",
			min_support
		));
		return Ok(());
	}

	ui::success(&format!("Evaluated {} tags", reports.len()));

	ui::header("Tightest clusters");
	println!(
		"  {:<28} {:>7} {:>10} {:>10}",
		"TAG".dimmed(),
		"COUNT".dimmed(),
		"SPREAD".dimmed(),
		"DENSITY".dimmed()
	);
	for report in reports.iter().take(PREVIEW_COUNT) {
		println!(
			"  {:<28} {:>7} {:>10.4} {}",
			report.tag.bright_white(),
			report.recipe_count,
			report.average_spread,
			format!("{:>9.4}x", report.density_score).bright_cyan()
		);
	}
	if reports.len() > PREVIEW_COUNT {
		println!(
			"  {}",
			format!("... and {} more", reports.len() - PREVIEW_COUNT).dimmed()
		);
	}

	if let Some(export_path) = export {
		storage::write_density_csv(&reports, export_path)?;
	}

	Ok(())
}
