use std::io;
use std::path::PathBuf;

/// Unrecoverable errors
///
/// Only configuration-level failures surface here. Everything else
/// (out-of-range coordinates, lookup misses, uncertifiable containment)
/// resolves to a `false` result instead: a caller can always treat `false`
/// as "not certified" with no further distinction needed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("boundary database file not found: {}", .0.display())]
    DatabaseNotFound(PathBuf),

    #[error("polygon ring requires at least 3 vertices, got {0}")]
    DegenerateRing(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
