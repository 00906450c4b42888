use serde::{Deserialize, Serialize};

/// Stable track identifier, assigned at catalog-build time.
pub type TrackId = u32;

/// A track as known to the bot. Immutable once created.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,
    pub album: Option<String>,
    pub duration_ms: Option<u32>,
    /// Opaque storage location, used only by the playback side.
    pub local_path: String,
}
