//! Core domain types

pub mod features;
pub mod ontology;
pub mod record;
pub mod vector;

pub use features::{build_feature_string, build_query_string, normalize_ingredient, normalize_tag};
pub use ontology::{Assignment, Ontology, OntologyRule};
pub use record::{Position, Record, StarRecord};
pub use vector::FeatureVector;
