use super::EmbeddingCatalog;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, warn};

pub fn load_embeddings<P: AsRef<Path>>(path: P) -> Result<EmbeddingCatalog> {
    let path = path.as_ref();
    let catalog = EmbeddingCatalog::load(path)
        .with_context(|| format!("Failed to load embeddings artifact from {:?}", path))?;

    if catalog.is_empty() {
        warn!("Embeddings artifact {:?} contains no tracks", path);
    } else {
        info!(
            "Embedding catalog has {} tracks of dimension {}",
            catalog.len(),
            catalog.dimension()
        );
    }
    Ok(catalog)
}
