//! Dataset loading and export

pub mod dataset;
pub mod export;

pub use dataset::load_records;
pub use export::{write_density_csv, write_json};
