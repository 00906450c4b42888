use super::TrackId;
use serde::{Deserialize, Serialize};

/// How a user reacted to a track.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionAction {
    Like,
    Dislike,
    Skip,
}

impl InteractionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionAction::Like => "like",
            InteractionAction::Dislike => "dislike",
            InteractionAction::Skip => "skip",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "like" => Some(InteractionAction::Like),
            "dislike" => Some(InteractionAction::Dislike),
            "skip" => Some(InteractionAction::Skip),
            _ => None,
        }
    }
}

/// Append-only record of a user reacting to a track. Never updated or
/// deleted; the recommender consumes only the `Like` subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: i64,
    pub track_id: TrackId,
    pub action: InteractionAction,
    /// Unix timestamp in seconds.
    pub created_at: i64,
}
