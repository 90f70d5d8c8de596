use clap::builder::styling;
use clap::{builder::Styles, Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

use crate::config;

fn styles() -> Styles {
	Styles::styled()
		.header(styling::Style::new().bold().fg_color(Some(styling::Color::Ansi(styling::AnsiColor::Blue))))
		.usage(styling::Style::new().bold().fg_color(Some(styling::Color::Ansi(styling::AnsiColor::Blue))))
		.literal(styling::Style::new().fg_color(Some(styling::Color::Ansi(styling::AnsiColor::Blue))))
		.placeholder(styling::Style::new().fg_color(Some(styling::Color::Ansi(styling::AnsiColor::Yellow))))
		.valid(styling::Style::new().fg_color(Some(styling::Color::Ansi(styling::AnsiColor::Blue))))
		.invalid(styling::Style::new().fg_color(Some(styling::Color::Ansi(styling::AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "galaxy",
	author,
	version,
	about = "Recipe cartography - TF-IDF + UMAP recipe maps",
	styles = styles(),
	disable_help_subcommand = true,
	after_help = format!(
		"{title}
  {galaxy} {map}      {map_args}   {map_desc}
  {galaxy} {search}   {search_args}        {search_desc}
  {galaxy} {density}  {density_args}    {density_desc}",
		title = "Examples:".bright_blue().bold(),
		galaxy = "galaxy".bright_blue(),
		map = "map".yellow(),
		map_args = "-d RAW_recipes.csv -o galaxy_data.json",
		map_desc = "Build the 3D map".dimmed(),
		search = "search".yellow(),
		search_args = "\"onion rice\" -d RAW_recipes.csv",
		search_desc = "Find similar recipes".dimmed(),
		density = "density".yellow(),
		density_args = "-d RAW_recipes.csv --min-support 10",
		density_desc = "Rank tag clusters".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

/// Fit-time options shared by every subcommand: the pipeline is a one-shot
/// batch transform, so each invocation re-fits from the dataset.
#[derive(Args, Debug, Clone)]
pub struct FitArgs {
	/// Recipe dataset (RAW_recipes-style CSV)
	#[arg(short = 'd', long = "data", value_name = "CSV")]
	pub data: PathBuf,

	/// Only load the first N rows of the dataset
	#[arg(long = "rows", default_value_t = config::DEFAULT_ROW_LIMIT)]
	pub rows: usize,

	/// Drop terms present in more than this fraction of recipes
	#[arg(long = "max-df", default_value_t = config::DEFAULT_MAX_DF)]
	pub max_df: f64,

	/// Drop terms present in fewer than this many recipes
	#[arg(long = "min-df", default_value_t = config::DEFAULT_MIN_DF)]
	pub min_df: usize,

	/// Neighborhood size for the UMAP connectivity graph
	#[arg(short = 'k', long = "neighbors", default_value_t = config::DEFAULT_NEIGHBORS)]
	pub neighbors: usize,

	/// Minimum spacing the layout keeps between close points; larger
	/// values spread neighborhoods out
	#[arg(long = "min-dist", default_value_t = config::DEFAULT_MIN_DIST)]
	pub min_dist: f32,

	/// Seed for the layout; a fixed seed reproduces coordinates exactly
	#[arg(long = "seed", default_value_t = config::DEFAULT_SEED)]
	pub seed: u64,

	/// Ontology rule table (JSON); defaults to the built-in table
	#[arg(long = "ontology", value_name = "JSON")]
	pub ontology: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Build the full 3D map and export it for the viewer
	Map {
		#[command(flatten)]
		fit: FitArgs,

		/// Output JSON path ('-' for stdout)
		#[arg(short = 'o', long = "output", default_value = "galaxy_data.json")]
		output: PathBuf,
	},

	/// Search recipes by free-text ingredient query
	Search {
		/// Search query, e.g. "onion rice"
		#[arg(value_name = "QUERY")]
		query: String,

		#[command(flatten)]
		fit: FitArgs,

		/// Number of results
		#[arg(short = 'n', long = "limit", default_value_t = config::DEFAULT_TOP_K)]
		limit: usize,

		/// Score threshold below which a hit is reported as weak
		#[arg(short = 's', long = "score", default_value_t = config::DEFAULT_MIN_SCORE)]
		min_score: f32,
	},

	/// Rank tags by how tightly their recipes cluster in the map
	Density {
		#[command(flatten)]
		fit: FitArgs,

		/// Ignore tags with fewer member recipes than this
		#[arg(long = "min-support", default_value_t = config::DEFAULT_MIN_SUPPORT)]
		min_support: usize,

		/// Write the full report as CSV to this path
		#[arg(long = "export", value_name = "CSV")]
		export: Option<PathBuf>,
	},
}
