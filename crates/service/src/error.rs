//! Typed error enum for the service layer.
//!
//! Unifies catalog loading failures so callers can match on the failure mode
//! instead of inspecting message text. Invocation failures never surface here:
//! they are written into the display region.

use apidir_core::SourceError;
use apidir_scanner::ScanError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Settings or detected list could not be loaded.
    #[error("source: {0}")]
    Source(#[from] SourceError),

    /// Endpoint scan failed (missing root).
    #[error("scan: {0}")]
    Scan(#[from] ScanError),

    /// Blocking task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}
