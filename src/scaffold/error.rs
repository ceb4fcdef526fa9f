//! Scaffold error taxonomy

use std::io;

use thiserror::Error;

/// Errors surfaced by a scaffold run.
///
/// Validation failures abort before any write; I/O failures abort the
/// remaining sequence and leave already-written files in place. Archive
/// failures are deliberately absent here: the archive step is soft and a
/// failed archive does not fail the run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The request is unusable: empty derived namespace segment, or the
    /// destination already exists without the overwrite flag.
    #[error("{0}")]
    Validation(String),

    /// A read, write or directory operation failed.
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
}

/// Result alias used throughout the scaffold engine.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;
