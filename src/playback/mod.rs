//! Resolution of track ids to playable audio files.

use crate::catalog::TrackId;
use std::path::{Path, PathBuf};

/// Capability to map a track id to a playable file location.
pub trait AudioLocator: Send + Sync {
    fn audio_path(&self, track_id: TrackId) -> PathBuf;
}

/// FMA dataset layout: the id is zero-padded to 6 digits and tracks live
/// under `<root>/<first 3 digits>/<6-digit id>.mp3`, e.g.
/// `fma_small/148/148002.mp3`.
#[derive(Debug, Clone)]
pub struct FmaLayout {
    root: PathBuf,
}

impl FmaLayout {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl AudioLocator for FmaLayout {
    fn audio_path(&self, track_id: TrackId) -> PathBuf {
        let padded = format!("{:06}", track_id);
        self.root.join(&padded[..3]).join(format!("{}.mp3", padded))
    }
}
