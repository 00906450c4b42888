mod embeddings;
mod interaction;
mod load;
mod track;

pub use embeddings::{EmbeddingCatalog, LoadError, TrackNotFound};
pub use interaction::{Interaction, InteractionAction};
pub use load::load_embeddings;
pub use track::{Track, TrackId};
