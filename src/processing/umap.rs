//! UMAP projection of the sparse feature space into 3D galaxy coordinates
//!
//! The projection is fully seeded: the neighbor graph is exact and
//! index-tiebroken, and every random draw (layout initialization, negative
//! sampling) comes from one `StdRng`, so a fixed seed reproduces the same
//! coordinates on every run.

use std::collections::HashMap;

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use rayon::prelude::*;

use crate::config::{DEFAULT_MIN_DIST, DEFAULT_NEIGHBORS, DEFAULT_SEED, OUTPUT_DIMENSIONS};
use crate::core::{FeatureVector, Position};
use crate::error::GalaxyError;
use crate::ui;

/// Neighbor-graph and layout parameters.
#[derive(Debug, Clone, Copy)]
pub struct EmbedParams {
	/// Nearest neighbors used to build the local connectivity graph.
	/// Clamped to the number of available distinct points.
	pub n_neighbors: usize,
	/// How tightly the layout may pack close points; larger values spread
	/// neighborhoods out.
	pub min_dist: f32,
	/// Seed for the layout initialization and negative sampling.
	pub seed: u64,
}

impl Default for EmbedParams {
	fn default() -> Self {
		Self {
			n_neighbors: DEFAULT_NEIGHBORS,
			min_dist: DEFAULT_MIN_DIST,
			seed: DEFAULT_SEED,
		}
	}
}

/// Spread of the output membership curve; min_dist is relative to this.
const SPREAD: f32 = 1.0;
const LEARNING_RATE: f32 = 1.0;
const NEGATIVE_SAMPLE_RATE: f32 = 5.0;
const GRADIENT_CLIP: f32 = 4.0;

/// Reduce TF-IDF vectors to 3D coordinates using UMAP over a cosine-distance
/// neighbor graph. Row i of the output corresponds to vector i of the input.
pub fn reduce_vectors(
	vectors: &[FeatureVector],
	vocabulary_size: usize,
	params: EmbedParams,
) -> Result<Vec<Position>, GalaxyError> {
	let n_samples = vectors.len();
	if n_samples < 2 {
		return Err(GalaxyError::DegenerateEmbeddingInput(n_samples));
	}

	// Fewer points than the requested neighborhood is not an error; the
	// graph just gets smaller effective neighborhoods.
	let n_neighbors = params.n_neighbors.min(n_samples - 1);
	if n_neighbors < params.n_neighbors {
		ui::debug(&format!(
			"Clamped neighborhood size from {} to {} ({} samples)",
			params.n_neighbors, n_neighbors, n_samples
		));
	}

	ui::info(&format!(
		"Reducing {}D to {}D using UMAP",
		vocabulary_size, OUTPUT_DIMENSIONS
	));
	ui::debug(&format!(
		"UMAP neighbors: {}, min_dist: {}, seed: {}",
		n_neighbors, params.min_dist, params.seed
	));

	ui::debug("Computing K-nearest neighbors (cosine)...");
	let (knn_indices, knn_distances) = compute_knn(vectors, n_neighbors);

	ui::debug("Building fuzzy neighborhood graph...");
	let edges = fuzzy_graph(&knn_indices, &knn_distances);

	let (a, b) = fit_output_curve(params.min_dist, SPREAD);
	ui::debug(&format!("Output curve: a={:.4}, b={:.4}", a, b));

	let n_epochs = if n_samples < 10_000 { 500 } else { 200 };

	let mut rng = StdRng::seed_from_u64(params.seed);
	let mut layout = initialize_layout(n_samples, &mut rng);

	ui::debug("Running UMAP optimization...");
	optimize_layout(&mut layout, &edges, n_samples, a, b, n_epochs, &mut rng);

	let positions: Vec<Position> = (0..n_samples)
		.map(|i| [layout[[i, 0]], layout[[i, 1]], layout[[i, 2]]])
		.collect();

	ui::success("UMAP reduction complete");

	Ok(positions)
}

type KnnResult = (Vec<Vec<usize>>, Vec<Vec<f32>>);

/// Brute-force K-nearest neighbors under cosine distance. Exact, and fast
/// enough for the in-memory batch sizes this pipeline targets. Distance
/// ties break on index so runs are reproducible.
fn compute_knn(vectors: &[FeatureVector], k: usize) -> KnnResult {
	let n_samples = vectors.len();

	ui::debug(&format!(
		"Computing KNN (brute force) for {} samples, k={}",
		n_samples, k
	));

	let results: Vec<(Vec<usize>, Vec<f32>)> = (0..n_samples)
		.into_par_iter()
		.map(|i| {
			let mut distances: Vec<(usize, f32)> = (0..n_samples)
				.filter(|&j| i != j)
				.map(|j| (j, vectors[i].cosine_distance(&vectors[j])))
				.collect();

			distances.sort_by(|a, b| {
				a.1.partial_cmp(&b.1)
					.unwrap_or(std::cmp::Ordering::Equal)
					.then(a.0.cmp(&b.0))
			});
			distances.truncate(k);

			let indices: Vec<usize> = distances.iter().map(|(idx, _)| *idx).collect();
			let dists: Vec<f32> = distances.iter().map(|(_, d)| *d).collect();

			(indices, dists)
		})
		.collect();

	let knn_indices = results.iter().map(|(idx, _)| idx.clone()).collect();
	let knn_distances = results.iter().map(|(_, dist)| dist.clone()).collect();

	(knn_indices, knn_distances)
}

/// One directed edge of the fuzzy neighborhood graph. Symmetric pairs are
/// emitted in both directions with the combined weight.
#[derive(Debug, Clone, Copy)]
struct Edge {
	head: usize,
	tail: usize,
	weight: f32,
}

/// Convert raw neighbor distances into symmetric fuzzy membership weights.
/// Per point, distances are shifted by the nearest-neighbor distance and
/// scaled so the total membership hits log2(k) (UMAP's smooth-knn
/// calibration), then directed memberships are merged with the
/// probabilistic t-conorm w1 + w2 - w1*w2.
fn fuzzy_graph(knn_indices: &[Vec<usize>], knn_distances: &[Vec<f32>]) -> Vec<Edge> {
	let mut directed: HashMap<(usize, usize), f32> = HashMap::new();

	for (i, (indices, distances)) in knn_indices.iter().zip(knn_distances).enumerate() {
		let rho = distances
			.iter()
			.copied()
			.filter(|&d| d > 0.0)
			.fold(f32::INFINITY, f32::min);
		let rho = if rho.is_finite() { rho } else { 0.0 };
		let sigma = calibrate_sigma(distances, rho);

		for (&j, &d) in indices.iter().zip(distances) {
			let weight = (-((d - rho).max(0.0)) / sigma).exp();
			directed.insert((i, j), weight);
		}
	}

	let mut edges = Vec::new();
	for (&(i, j), &w_ij) in &directed {
		let w_ji = directed.get(&(j, i)).copied();

		// Each unordered pair contributes once; when both directions
		// exist, the lower-index side owns the merge.
		if i < j {
			let w_ji = w_ji.unwrap_or(0.0);
			let weight = w_ij + w_ji - w_ij * w_ji;
			edges.push(Edge { head: i, tail: j, weight });
			edges.push(Edge { head: j, tail: i, weight });
		} else if w_ji.is_none() {
			edges.push(Edge { head: i, tail: j, weight: w_ij });
			edges.push(Edge { head: j, tail: i, weight: w_ij });
		}
	}

	// The map's iteration order is arbitrary; sorting pins the sampling
	// order (and with it the RNG stream) for a given graph.
	edges.sort_by_key(|e| (e.head, e.tail));
	edges
}

/// Binary search the bandwidth so the smoothed membership sum hits the
/// log2(k) target.
fn calibrate_sigma(distances: &[f32], rho: f32) -> f32 {
	let target = (distances.len() as f32).log2();
	let mut lo = 0.0f32;
	let mut hi = f32::INFINITY;
	let mut mid = 1.0f32;

	for _ in 0..64 {
		let sum: f32 = distances
			.iter()
			.map(|&d| (-((d - rho).max(0.0)) / mid).exp())
			.sum();

		if (sum - target).abs() < 1e-5 {
			break;
		}
		if sum > target {
			hi = mid;
			mid = (lo + hi) / 2.0;
		} else {
			lo = mid;
			mid = if hi.is_finite() { (lo + hi) / 2.0 } else { mid * 2.0 };
		}
	}

	mid.max(1e-3)
}

/// Fit the rational output kernel 1 / (1 + a*d^(2b)) to the ideal packing
/// curve: membership 1 inside min_dist, exp(-(d - min_dist) / spread)
/// beyond it. Coarse-to-fine grid search; the error surface is smooth with
/// a single basin, so four refinements land within plotting accuracy.
fn fit_output_curve(min_dist: f32, spread: f32) -> (f32, f32) {
	let xs: Vec<f32> = (1..=300).map(|i| i as f32 * spread * 3.0 / 300.0).collect();
	let target: Vec<f32> = xs
		.iter()
		.map(|&x| {
			if x < min_dist {
				1.0
			} else {
				(-(x - min_dist) / spread).exp()
			}
		})
		.collect();

	let sse = |a: f32, b: f32| -> f32 {
		xs.iter()
			.zip(&target)
			.map(|(&x, &y)| {
				let fit = 1.0 / (1.0 + a * x.powf(2.0 * b));
				(fit - y) * (fit - y)
			})
			.sum()
	};

	let (mut a, mut b) = (1.0f32, 1.0f32);
	let (mut a_span, mut b_span) = (2.0f32, 1.0f32);

	for _ in 0..4 {
		let (mut best_err, mut best_a, mut best_b) = (f32::INFINITY, a, b);
		for ai in 0..=40 {
			let ca = (a - a_span) + ai as f32 * (a_span / 20.0);
			if ca <= 0.0 {
				continue;
			}
			for bi in 0..=40 {
				let cb = (b - b_span) + bi as f32 * (b_span / 20.0);
				if cb <= 0.0 {
					continue;
				}
				let err = sse(ca, cb);
				if err < best_err {
					best_err = err;
					best_a = ca;
					best_b = cb;
				}
			}
		}
		a = best_a;
		b = best_b;
		a_span /= 5.0;
		b_span /= 5.0;
	}

	(a, b)
}

/// Seeded random layout in [-10, 10].
fn initialize_layout(n_samples: usize, rng: &mut StdRng) -> Array2<f32> {
	let mut init = Array2::<f32>::zeros((n_samples, OUTPUT_DIMENSIONS));
	for i in 0..n_samples {
		for j in 0..OUTPUT_DIMENSIONS {
			init[[i, j]] = rng.random_range(-10.0f32..10.0f32);
		}
	}

	init
}

/// Single-threaded SGD over the edge list: attractive moves along graph
/// edges scheduled by weight, repulsive moves against seeded random
/// points. Edge order is fixed and all sampling goes through the caller's
/// RNG, so the whole optimization is reproducible.
fn optimize_layout(
	layout: &mut Array2<f32>,
	edges: &[Edge],
	n_samples: usize,
	a: f32,
	b: f32,
	n_epochs: usize,
	rng: &mut StdRng,
) {
	if edges.is_empty() {
		return;
	}

	let max_weight = edges.iter().map(|e| e.weight).fold(0.0f32, f32::max);

	// Heavier edges are sampled more often, per UMAP's epoch scheduling
	let epochs_per_sample: Vec<f32> = edges.iter().map(|e| max_weight / e.weight).collect();
	let epochs_per_negative: Vec<f32> = epochs_per_sample
		.iter()
		.map(|e| e / NEGATIVE_SAMPLE_RATE)
		.collect();

	let mut next_sample = epochs_per_sample.clone();
	let mut next_negative = epochs_per_negative.clone();

	for epoch in 0..n_epochs {
		let alpha = LEARNING_RATE * (1.0 - epoch as f32 / n_epochs as f32);

		for (e, edge) in edges.iter().enumerate() {
			if next_sample[e] > epoch as f32 {
				continue;
			}

			// Pull the head toward its graph neighbor
			let d2 = squared_distance(layout, edge.head, edge.tail);
			if d2 > 0.0 {
				let coeff = (-2.0 * a * b * d2.powf(b - 1.0)) / (a * d2.powf(b) + 1.0);
				for dim in 0..OUTPUT_DIMENSIONS {
					let grad = clip(coeff * (layout[[edge.head, dim]] - layout[[edge.tail, dim]]));
					layout[[edge.head, dim]] += alpha * grad;
				}
			}
			next_sample[e] += epochs_per_sample[e];

			// Push the head away from random non-neighbors
			let n_negative =
				((epoch as f32 - next_negative[e]) / epochs_per_negative[e]) as usize;
			for _ in 0..n_negative {
				let other = rng.random_range(0..n_samples);
				if other == edge.head {
					continue;
				}

				let d2 = squared_distance(layout, edge.head, other);
				for dim in 0..OUTPUT_DIMENSIONS {
					let grad = if d2 > 0.0 {
						let coeff = (2.0 * b) / ((0.001 + d2) * (a * d2.powf(b) + 1.0));
						clip(coeff * (layout[[edge.head, dim]] - layout[[other, dim]]))
					} else {
						// Coincident points repel at full strength
						GRADIENT_CLIP
					};
					layout[[edge.head, dim]] += alpha * grad;
				}
			}
			next_negative[e] += n_negative as f32 * epochs_per_negative[e];
		}
	}
}

fn squared_distance(layout: &Array2<f32>, i: usize, j: usize) -> f32 {
	(0..OUTPUT_DIMENSIONS)
		.map(|dim| {
			let diff = layout[[i, dim]] - layout[[j, dim]];
			diff * diff
		})
		.sum()
}

fn clip(value: f32) -> f32 {
	value.clamp(-GRADIENT_CLIP, GRADIENT_CLIP)
}
