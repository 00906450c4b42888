//! Recommendation core for the music bot.
//!
//! Loads an offline-computed embedding catalog once at startup and picks the
//! next track to present to a user from their most recent likes. The engine
//! is a pure synchronous computation over the immutable catalog; interaction
//! history is supplied by the caller (or read from the interaction store).

pub mod catalog;
pub mod config;
pub mod interaction_store;
pub mod playback;
pub mod recommender;

// Re-export commonly used types for convenience
pub use catalog::{EmbeddingCatalog, Interaction, InteractionAction, LoadError, Track, TrackId};
pub use config::{AppConfig, RecommenderSettings};
pub use interaction_store::{InteractionStore, SqliteInteractionStore};
pub use recommender::{RecommendationEngine, RecsysError};
