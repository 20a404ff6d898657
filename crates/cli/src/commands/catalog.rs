use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, bail};
use apidir_client::{ApiClient, RemoteSource};
use apidir_core::CatalogSource;
use apidir_service::{CatalogService, LocalSource};

pub(crate) async fn run(
    settings: PathBuf,
    api_dir: Option<PathBuf>,
    remote: Option<String>,
) -> Result<()> {
    let source: Arc<dyn CatalogSource> = match remote {
        Some(base) => Arc::new(RemoteSource::new(ApiClient::new(base)?)),
        None => {
            let local = LocalSource::new(settings);
            Arc::new(match api_dir {
                Some(dir) => local.with_api_dir(dir),
                None => local,
            })
        },
    };

    let loaded = CatalogService::new(source).load().await;
    if loaded.settings.is_none() {
        bail!("settings document could not be loaded");
    }
    println!("{}", serde_json::to_string_pretty(&loaded.catalog)?);
    Ok(())
}
