//! Typed error enum for the scanner crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a scan. Per-file problems never surface here.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scan root does not exist: {}", .0.display())]
    RootMissing(PathBuf),
    #[error("scan root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error("failed to read scan root {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
