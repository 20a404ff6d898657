//! Catalog input abstraction.
//!
//! A page view needs two documents: the authored settings and the
//! auto-detected endpoint list. They can come from local files and a directory
//! scan, or from a remote server over HTTP.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::model::{CatalogDocument, Settings};

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads the authored settings document.
    async fn settings(&self) -> Result<Settings, SourceError>;

    /// Loads the auto-detected endpoint list.
    async fn detected(&self) -> Result<CatalogDocument, SourceError>;

    /// Short human-readable description for logs.
    fn describe(&self) -> String;
}
