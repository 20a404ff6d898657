use std::sync::Arc;

use apidir_core::{Catalog, CatalogSource, Settings};

/// Result of one page-view load.
#[derive(Debug, Clone, Default)]
pub struct LoadedCatalog {
    /// `None` when the settings document failed to load.
    pub settings: Option<Settings>,
    pub catalog: Catalog,
    /// Number of categories the detected list contributed before merging.
    pub detected_count: usize,
}

pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl CatalogService {
    #[must_use]
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    #[must_use]
    pub fn source(&self) -> &Arc<dyn CatalogSource> {
        &self.source
    }

    /// Loads and merges the catalog from scratch.
    ///
    /// Never fails: a settings failure yields an empty catalog, a detected-list
    /// failure yields the authored catalog alone. Both are logged.
    pub async fn load(&self) -> LoadedCatalog {
        let settings = match self.source.settings().await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(source = %self.source.describe(), error = %e, "error loading API data");
                return LoadedCatalog::default();
            },
        };

        let detected = match self.source.detected().await {
            Ok(document) => document.categories,
            Err(e) => {
                tracing::info!(error = %e, "using categories from settings only");
                Vec::new()
            },
        };

        let detected_count = detected.len();
        let catalog = Catalog::merge(settings.categories.clone(), detected);
        tracing::debug!(
            categories = catalog.sections.len(),
            items = catalog.item_count(),
            detected_count,
            "catalog loaded"
        );
        LoadedCatalog { settings: Some(settings), catalog, detected_count }
    }
}
