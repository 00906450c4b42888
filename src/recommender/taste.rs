//! Reduces a user's recent likes into a single taste vector.

use super::RecsysError;
use crate::catalog::{EmbeddingCatalog, TrackId, TrackNotFound};
use tracing::warn;

/// Component-wise arithmetic mean of the embeddings of `recent_likes`.
///
/// Liked tracks missing from the catalog are skipped. An empty input, or an
/// input where nothing resolves, yields `NoHistory` — a signal for the
/// caller's cold-start path, not a hard failure.
pub fn aggregate(
    catalog: &EmbeddingCatalog,
    recent_likes: &[TrackId],
) -> Result<Vec<f32>, RecsysError> {
    if recent_likes.is_empty() {
        return Err(RecsysError::NoHistory);
    }

    let mut sum = vec![0.0f32; catalog.dimension()];
    let mut resolved = 0usize;

    for &track_id in recent_likes {
        match catalog.vector_of(track_id) {
            Ok(vector) => {
                for (acc, x) in sum.iter_mut().zip(vector) {
                    *acc += x;
                }
                resolved += 1;
            }
            Err(TrackNotFound(id)) => {
                warn!("Liked track {} has no embedding, skipping", id);
            }
        }
    }

    if resolved == 0 {
        return Err(RecsysError::NoHistory);
    }

    for x in sum.iter_mut() {
        *x /= resolved as f32;
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_catalog(entries: Vec<(TrackId, Vec<f32>)>) -> EmbeddingCatalog {
        EmbeddingCatalog::from_entries(entries).unwrap()
    }

    #[test]
    fn test_aggregate_empty_input_is_no_history() {
        let catalog = make_catalog(vec![(1, vec![1.0, 0.0])]);
        assert_eq!(aggregate(&catalog, &[]), Err(RecsysError::NoHistory));
    }

    #[test]
    fn test_aggregate_exact_mean_of_three() {
        let catalog = make_catalog(vec![
            (1, vec![1.0, 0.0, 3.0]),
            (2, vec![0.0, 1.0, 3.0]),
            (3, vec![2.0, 2.0, 3.0]),
        ]);

        let taste = aggregate(&catalog, &[1, 2, 3]).unwrap();
        assert_eq!(taste, vec![1.0, 1.0, 3.0]);
    }

    #[test]
    fn test_aggregate_single_like_is_its_vector() {
        let catalog = make_catalog(vec![(1, vec![0.5, -0.5]), (2, vec![1.0, 1.0])]);
        assert_eq!(aggregate(&catalog, &[1]).unwrap(), vec![0.5, -0.5]);
    }

    #[test]
    fn test_aggregate_skips_unresolvable_tracks() {
        let catalog = make_catalog(vec![(1, vec![1.0, 0.0]), (2, vec![0.0, 1.0])]);

        // 99 is unknown: mean over the remaining two.
        let taste = aggregate(&catalog, &[1, 99, 2]).unwrap();
        assert_eq!(taste, vec![0.5, 0.5]);
    }

    #[test]
    fn test_aggregate_all_unresolvable_is_no_history() {
        let catalog = make_catalog(vec![(1, vec![1.0, 0.0])]);
        assert_eq!(aggregate(&catalog, &[98, 99]), Err(RecsysError::NoHistory));
    }
}
