//! JSON documents consumed by the catalog page: the auto-detected endpoint
//! list and the authored settings.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use apidir_core::{CatalogDocument, Settings};

use crate::api_error::ApiError;
use crate::AppState;

pub async fn list_endpoints(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CatalogDocument>, ApiError> {
    let source = state.local_source.as_ref().filter(|s| s.api_dir().is_some()).ok_or_else(|| {
        ApiError::ServiceUnavailable("endpoint scanning is not configured".to_owned())
    })?;
    let document = source.scan().await?;
    Ok(Json(document))
}

pub async fn settings_document(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Settings>, ApiError> {
    let settings = state.catalog_service.source().settings().await?;
    Ok(Json(settings))
}
