//! Search command - rank recipes against a free-text query

use anyhow::Result;
use colored::*;

use crate::cli::FitArgs;
use crate::search::search;
use crate::ui;

pub fn run(query: &str, fit: &FitArgs, limit: usize, min_score: f32) -> Result<()> {
	let search_start = std::time::Instant::now();

	ui::info(&format!("Searching for: \"{}\"", query));

	let map = super::build_map(fit)?;
	let matches = search(&map, query, limit);

	if matches.is_empty() {
		ui::warn("No records to search");
		return Ok(());
	}

	ui::header("Results");

	for (i, m) in matches.iter().enumerate() {
		let record = &map.records()[m.index];
		let assignment = &map.assignments()[m.index];
		let percentage = (m.score * 100.0).round() as u32;

		let marker = if m.is_strong(min_score) {
			format!("{}%", percentage).dimmed()
		} else {
			"no strong match".bright_yellow().dimmed()
		};

		println!(
			"{}. {} {} {}",
			format!("{:2}", i + 1).bright_blue().bold(),
			record.name.bright_white(),
			format!("[{}]", assignment.cluster).dimmed(),
			marker
		);
	}

	let search_duration = search_start.elapsed().as_millis() as f32;

	println!();
	ui::success(&format!(
		"Ranked {} recipes in {:.0}ms",
		map.len(),
		search_duration
	));

	Ok(())
}
