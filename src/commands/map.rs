//! Map command - build the 3D galaxy and export it for the viewer

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use colored::*;

use crate::cli::FitArgs;
use crate::storage;
use crate::ui;

pub fn run(fit: &FitArgs, output: &Path) -> Result<()> {
	let start = Instant::now();

	let map = super::build_map(fit)?;

	let export = map.export_records();
	storage::write_json(&export, output)?;

	// Quick cluster census so a run's output is sanity-checkable at a glance
	let mut census: Vec<(&str, usize)> = Vec::new();
	for assignment in map.assignments() {
		match census.iter_mut().find(|(name, _)| *name == assignment.cluster) {
			Some((_, count)) => *count += 1,
			None => census.push((assignment.cluster.as_str(), 1)),
		}
	}
	census.sort_by(|a, b| b.1.cmp(&a.1));

	ui::header("Clusters");
	for (name, count) in census.iter().take(10) {
		println!(
			"  {} {}",
			format!("{:5}", count).bright_cyan(),
			name.bright_white()
		);
	}
	if census.len() > 10 {
		println!("  {}", format!("... and {} more", census.len() - 10).dimmed());
	}

	eprintln!(
		"\n{}",
		format!("Completed in {:.1}s", start.elapsed().as_secs_f32()).dimmed()
	);

	Ok(())
}
