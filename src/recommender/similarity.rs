//! Cosine nearest-neighbor search over the embedding catalog.

use crate::catalog::{EmbeddingCatalog, TrackId};
use std::collections::HashSet;

/// Cosine similarity: dot product divided by the product of L2 norms.
///
/// A zero-norm vector compares as minimally similar to everything, so it is
/// only ever picked when nothing else is eligible.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return f32::NEG_INFINITY;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    dot / (norm_a * norm_b)
}

fn l2_norm(v: &[f32]) -> f32 {
    v.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Up to `k` track ids ordered by decreasing cosine similarity to `query`,
/// ties broken by ascending id, skipping anything in `exclude`.
///
/// Deterministic for identical inputs; never mutates the catalog.
pub fn nearest(
    catalog: &EmbeddingCatalog,
    query: &[f32],
    k: usize,
    exclude: &HashSet<TrackId>,
) -> Vec<TrackId> {
    if k == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(TrackId, f32)> = catalog
        .iter()
        .filter(|(id, _)| !exclude.contains(id))
        .map(|(id, vector)| (id, cosine_similarity(query, vector)))
        .collect();

    scored.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    scored.truncate(k);
    scored.into_iter().map(|(id, _)| id).collect()
}
