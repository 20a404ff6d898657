//! Catalog documents read from local storage: a settings file plus an
//! optional endpoint directory scan.

use std::path::{Path, PathBuf};

use apidir_core::{CatalogDocument, CatalogSource, Settings, SourceError};
use apidir_scanner::{ScanOptions, scan_endpoints};
use async_trait::async_trait;

use crate::ServiceError;

#[derive(Debug, Clone)]
pub struct LocalSource {
    settings_path: PathBuf,
    api_dir: Option<PathBuf>,
    scan_options: ScanOptions,
}

impl LocalSource {
    #[must_use]
    pub fn new(settings_path: impl Into<PathBuf>) -> Self {
        Self { settings_path: settings_path.into(), api_dir: None, scan_options: ScanOptions::default() }
    }

    /// Enables auto-detection from `dir`.
    #[must_use]
    pub fn with_api_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.api_dir = Some(dir.into());
        self
    }

    #[must_use]
    pub fn with_scan_options(mut self, options: ScanOptions) -> Self {
        self.scan_options = options;
        self
    }

    #[must_use]
    pub fn api_dir(&self) -> Option<&Path> {
        self.api_dir.as_deref()
    }

    /// Runs the scanner on a blocking thread.
    pub async fn scan(&self) -> Result<CatalogDocument, ServiceError> {
        let Some(dir) = self.api_dir.clone() else {
            return Err(SourceError::NotConfigured("no endpoint directory configured".to_owned()).into());
        };
        let options = self.scan_options.clone();
        let document = tokio::task::spawn_blocking(move || scan_endpoints(&dir, &options)).await??;
        Ok(document)
    }
}

#[async_trait]
impl CatalogSource for LocalSource {
    async fn settings(&self) -> Result<Settings, SourceError> {
        let raw = tokio::fs::read_to_string(&self.settings_path).await.map_err(|e| SourceError::Io {
            path: self.settings_path.display().to_string(),
            source: e,
        })?;
        serde_json::from_str(&raw).map_err(|e| SourceError::Serialization {
            context: self.settings_path.display().to_string(),
            source: e,
        })
    }

    async fn detected(&self) -> Result<CatalogDocument, SourceError> {
        if self.api_dir.is_none() {
            return Ok(CatalogDocument::default());
        }
        self.scan().await.map_err(|e| match e {
            ServiceError::Source(source) => source,
            other => SourceError::Scan(other.to_string()),
        })
    }

    fn describe(&self) -> String {
        match &self.api_dir {
            Some(dir) => format!("{} + scan of {}", self.settings_path.display(), dir.display()),
            None => self.settings_path.display().to_string(),
        }
    }
}
