//! Sparse TF-IDF feature vectors

/// Sparse weighted vector over the fitted vocabulary. Entries are
/// (column index, weight) pairs sorted by index; absent columns are zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector(Vec<(u32, f32)>);

impl FeatureVector {
	/// Build from entries. Callers must supply unique indices; ordering is
	/// normalized here.
	pub fn new(mut entries: Vec<(u32, f32)>) -> Self {
		entries.sort_by_key(|&(idx, _)| idx);
		Self(entries)
	}

	pub fn entries(&self) -> &[(u32, f32)] {
		&self.0
	}

	pub fn is_zero(&self) -> bool {
		self.0.is_empty()
	}

	/// Euclidean norm.
	pub fn norm(&self) -> f32 {
		self.0.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
	}

	/// Dot product via sorted-index merge.
	pub fn dot(&self, other: &Self) -> f32 {
		let (mut i, mut j) = (0, 0);
		let mut sum = 0.0;
		while i < self.0.len() && j < other.0.len() {
			match self.0[i].0.cmp(&other.0[j].0) {
				std::cmp::Ordering::Less => i += 1,
				std::cmp::Ordering::Greater => j += 1,
				std::cmp::Ordering::Equal => {
					sum += self.0[i].1 * other.0[j].1;
					i += 1;
					j += 1;
				}
			}
		}
		sum
	}

	/// Cosine similarity in [0, 1] (weights are non-negative). Zero vectors
	/// have no direction and score 0 against everything.
	pub fn cosine_similarity(&self, other: &Self) -> f32 {
		let denom = self.norm() * other.norm();
		if denom > 0.0 {
			self.dot(other) / denom
		} else {
			0.0
		}
	}

	/// Cosine distance, the metric the embedding's neighbor graph uses.
	pub fn cosine_distance(&self, other: &Self) -> f32 {
		1.0 - self.cosine_similarity(other)
	}
}
