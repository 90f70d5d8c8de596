//! Export writers for the viewer JSON and the density report CSV

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::processing::TagDensityReport;
use crate::ui;

/// Write any serializable payload as pretty JSON. A path of `-` (or an
/// empty path) writes to stdout instead of a file.
pub fn write_json<T: Serialize>(payload: &T, path: &Path) -> Result<()> {
	let json = serde_json::to_string_pretty(payload).context("Failed to serialize export")?;

	if path.to_str() == Some("-") || path.as_os_str().is_empty() {
		println!("{}", json);
	} else {
		fs::write(path, json)
			.with_context(|| format!("Failed to write {}", path.display()))?;
		ui::success(&format!("Exported to {}", path.display()));
	}

	Ok(())
}

/// Write the tag density report as CSV
/// (Tag, Recipe_Count, Average_Spread, Density_Score).
pub fn write_density_csv(reports: &[TagDensityReport], path: &Path) -> Result<()> {
	let mut writer = csv::Writer::from_path(path)
		.with_context(|| format!("Failed to create {}", path.display()))?;

	for report in reports {
		writer.serialize(report)?;
	}
	writer.flush()?;

	ui::success(&format!("Report saved to {}", path.display()));
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn density_csv_round_trips() {
		let dir = std::env::temp_dir().join("galaxy-export-test");
		fs::create_dir_all(&dir).unwrap();
		let path = dir.join("report.csv");

		let reports = vec![TagDensityReport {
			tag: "vegan".into(),
			recipe_count: 12,
			average_spread: 0.5,
			density_score: 2.0,
		}];

		write_density_csv(&reports, &path).unwrap();
		let content = fs::read_to_string(&path).unwrap();
		assert!(content.starts_with("Tag,Recipe_Count,Average_Spread,Density_Score"));
		assert!(content.contains("vegan,12,0.5,2.0"));

		fs::remove_dir_all(&dir).ok();
	}
}
