//! Catalog documents fetched from a running apidir (or compatible) server.

use apidir_core::{
    CatalogDocument, CatalogSource, DETECTED_LIST_PATH, SETTINGS_PATH, Settings, SourceError,
};
use async_trait::async_trait;

use crate::client::ApiClient;

#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: ApiClient,
    settings_path: String,
    list_path: String,
}

impl RemoteSource {
    /// Uses the standard `/src/settings.json` and `/api/list` locations.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            settings_path: SETTINGS_PATH.to_owned(),
            list_path: DETECTED_LIST_PATH.to_owned(),
        }
    }
}

#[async_trait]
impl CatalogSource for RemoteSource {
    async fn settings(&self) -> Result<Settings, SourceError> {
        self.client
            .get_json(&self.settings_path)
            .await
            .map_err(|e| SourceError::Fetch(e.to_string()))
    }

    async fn detected(&self) -> Result<CatalogDocument, SourceError> {
        self.client
            .get_json(&self.list_path)
            .await
            .map_err(|e| SourceError::Fetch(e.to_string()))
    }

    fn describe(&self) -> String {
        format!("remote {}", self.client.base_url())
    }
}
