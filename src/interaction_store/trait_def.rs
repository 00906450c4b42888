//! InteractionStore trait definition.

use crate::catalog::{Interaction, TrackId};
use anyhow::Result;

/// Trait for interaction storage backends.
pub trait InteractionStore: Send + Sync {
    /// Append a user reaction. Interactions are never updated or deleted.
    fn record(&self, interaction: &Interaction) -> Result<()>;

    /// Track ids of the user's most recent likes, ordered oldest first
    /// (most-recent-last), limited to the `limit` most recent.
    fn recent_liked_track_ids(&self, user_id: i64, limit: usize) -> Result<Vec<TrackId>>;

    /// Total number of interactions recorded for the user.
    fn interaction_count(&self, user_id: i64) -> Result<usize>;
}
