use thiserror::Error;

/// Errors that can surface while picking the next track.
///
/// Only `EmptyCatalog` is unrecoverable; `NoHistory` is an internal signal
/// that the engine resolves through its cold-start path. Missing tracks are
/// reported as [`crate::catalog::TrackNotFound`] by the catalog and absorbed
/// by the aggregator.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecsysError {
    #[error("catalog has no tracks to recommend")]
    EmptyCatalog,

    #[error("no usable like history")]
    NoHistory,
}
