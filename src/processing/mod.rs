//! Pipeline stages: vectorization, projection, density analysis

pub mod density;
pub mod umap;
pub mod vectorize;

pub use density::{evaluate_tag_density, TagDensityReport};
pub use umap::reduce_vectors;
pub use vectorize::{TfidfVectorizer, VectorParams};
