//! Offline-computed track embeddings, loaded once at process start.

use super::TrackId;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the embeddings artifact.
///
/// Any inconsistency rejects the whole load; a partially valid catalog is
/// never exposed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read embeddings artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed embeddings artifact: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate track id {0} in embeddings artifact")]
    DuplicateTrack(TrackId),

    #[error("track {track_id} has a vector of dimension {got}, expected {expected}")]
    DimensionMismatch {
        track_id: TrackId,
        expected: usize,
        got: usize,
    },

    #[error("track {0} has an empty vector")]
    EmptyVector(TrackId),
}

/// A referenced track id is absent from the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("track {0} not found in embedding catalog")]
pub struct TrackNotFound(pub TrackId);

#[derive(Debug, Deserialize)]
struct ArtifactEntry {
    track_id: TrackId,
    vector: Vec<f32>,
}

#[derive(Debug, Deserialize)]
struct Artifact {
    tracks: Vec<ArtifactEntry>,
}

/// Immutable mapping from track id to its feature vector.
///
/// All vectors share one dimensionality for the lifetime of the catalog.
/// Read-only after load, so it can be shared across threads without locking.
#[derive(Debug)]
pub struct EmbeddingCatalog {
    vectors: HashMap<TrackId, Vec<f32>>,
    dimension: usize,
}

impl EmbeddingCatalog {
    /// Load the catalog from a JSON artifact:
    /// `{ "tracks": [ { "track_id": 1, "vector": [0.1, ...] }, ... ] }`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let artifact: Artifact = serde_json::from_str(&text)?;
        Self::from_entries(artifact.tracks.into_iter().map(|e| (e.track_id, e.vector)))
    }

    /// Build a catalog from in-memory (id, vector) pairs.
    pub fn from_entries<I>(entries: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = (TrackId, Vec<f32>)>,
    {
        let mut vectors = HashMap::new();
        let mut dimension = 0usize;
        for (track_id, vector) in entries {
            if vector.is_empty() {
                return Err(LoadError::EmptyVector(track_id));
            }
            if dimension == 0 {
                dimension = vector.len();
            } else if vector.len() != dimension {
                return Err(LoadError::DimensionMismatch {
                    track_id,
                    expected: dimension,
                    got: vector.len(),
                });
            }
            if vectors.insert(track_id, vector).is_some() {
                return Err(LoadError::DuplicateTrack(track_id));
            }
        }
        Ok(Self { vectors, dimension })
    }

    /// Feature vector of the given track.
    pub fn vector_of(&self, track_id: TrackId) -> Result<&[f32], TrackNotFound> {
        self.vectors
            .get(&track_id)
            .map(Vec::as_slice)
            .ok_or(TrackNotFound(track_id))
    }

    pub fn contains(&self, track_id: TrackId) -> bool {
        self.vectors.contains_key(&track_id)
    }

    /// All known track ids, ascending. Drives the cold-start fallback.
    pub fn all_ids(&self) -> Vec<TrackId> {
        let mut ids: Vec<TrackId> = self.vectors.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = (TrackId, &[f32])> {
        self.vectors.iter().map(|(id, v)| (*id, v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Shared dimensionality of all stored vectors; 0 for an empty catalog.
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}
