//! The recommendation engine: taste aggregation, neighbor search and the
//! fallback policy that guarantees a track is always returned while the
//! catalog is non-empty.

use super::{similarity, taste, RecsysError};
use crate::catalog::{EmbeddingCatalog, Track, TrackId};
use crate::config::RecommenderSettings;
use rand::seq::IndexedRandom;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Picks the next track to present to a user.
///
/// Stateless across calls: the like history is supplied by the caller and
/// the catalog is immutable after load, so one engine instance can serve
/// concurrent requests for different users without locking.
pub struct RecommendationEngine {
    catalog: Arc<EmbeddingCatalog>,
    settings: RecommenderSettings,
}

impl RecommendationEngine {
    pub fn new(catalog: Arc<EmbeddingCatalog>, settings: RecommenderSettings) -> Self {
        Self { catalog, settings }
    }

    pub fn catalog(&self) -> &EmbeddingCatalog {
        &self.catalog
    }

    /// Pick the next track given the user's liked tracks, most-recent-last.
    pub fn pick_next(&self, recent_likes: &[Track]) -> Result<TrackId, RecsysError> {
        let ids: Vec<TrackId> = recent_likes.iter().map(|t| t.id).collect();
        self.pick_next_ids(&ids)
    }

    /// Same as [`pick_next`](Self::pick_next), taking track ids directly.
    ///
    /// Fallback ladder: the taste vector is built from the last
    /// `liked_window` likes, all supplied likes are excluded from the
    /// neighbor search, and if every candidate is excluded the single
    /// nearest track is returned without exclusion. With no usable history
    /// the pick is uniform random over the catalog — the only randomized
    /// path. Only an empty catalog is an error.
    pub fn pick_next_ids(&self, recent_likes: &[TrackId]) -> Result<TrackId, RecsysError> {
        if self.catalog.is_empty() {
            return Err(RecsysError::EmptyCatalog);
        }

        let window_start = recent_likes
            .len()
            .saturating_sub(self.settings.liked_window);
        let query = match taste::aggregate(&self.catalog, &recent_likes[window_start..]) {
            Ok(query) => query,
            Err(RecsysError::NoHistory) => return self.cold_start(),
            Err(other) => return Err(other),
        };

        let exclude: HashSet<TrackId> = recent_likes.iter().copied().collect();
        let neighbors = similarity::nearest(
            &self.catalog,
            &query,
            self.settings.neighbor_count,
            &exclude,
        );
        if let Some(&track_id) = neighbors.first() {
            debug!(
                "Picked track {} out of {} eligible neighbors",
                track_id,
                neighbors.len()
            );
            return Ok(track_id);
        }

        // Every candidate was excluded (tiny catalog): keep the player
        // alive by re-recommending the closest track.
        similarity::nearest(&self.catalog, &query, 1, &HashSet::new())
            .first()
            .copied()
            .ok_or(RecsysError::EmptyCatalog)
    }

    /// No usable history: uniform random choice over the whole catalog.
    fn cold_start(&self) -> Result<TrackId, RecsysError> {
        let ids = self.catalog.all_ids();
        ids.choose(&mut rand::rng())
            .copied()
            .ok_or(RecsysError::EmptyCatalog)
    }
}
