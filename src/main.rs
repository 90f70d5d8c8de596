//! Recipe Galaxy - recipe cartography for a 3D viewer
//!
//! Builds TF-IDF features over recipe ingredients and tags, projects them
//! into 3D with UMAP, labels each recipe through an ordered tag ontology,
//! and exports the result for an external renderer.

use anyhow::Result;
use clap::Parser;

use recipe_galaxy::cli::{Cli, Command};
use recipe_galaxy::commands;
use recipe_galaxy::ui;

fn main() -> Result<()> {
	let cli = Cli::parse();

	ui::Log::set_verbose(cli.verbose);

	if ui::Log::is_verbose() {
		ui::print_logo();
	}

	match cli.command {
		Command::Map { fit, output } => commands::map::run(&fit, &output),
		Command::Search {
			query,
			fit,
			limit,
			min_score,
		} => commands::search::run(&query, &fit, limit, min_score),
		Command::Density {
			fit,
			min_support,
			export,
		} => commands::density::run(&fit, min_support, export.as_deref()),
	}
}
