use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Response;
use minijinja::context;
use serde::Serialize;

use apidir_core::{CatalogView, Filter, ImageSize, Settings};

use crate::api_error::ApiError;
use crate::query_types::PageQuery;
use crate::viewer::{PAGE_TEMPLATE, html_response};
use crate::AppState;

use super::{invoke_href, page_href};

/// Page name used when the settings document failed to load.
pub const FALLBACK_PAGE_NAME: &str = "API Directory";

#[derive(Debug, Serialize)]
struct ControlContext {
    label: String,
    /// `all` or the category id.
    filter: String,
    active: bool,
    href: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ImageSizeContext {
    mobile: String,
    tablet: String,
    desktop: String,
}

impl From<&ImageSize> for ImageSizeContext {
    fn from(size: &ImageSize) -> Self {
        Self {
            mobile: size.mobile().to_owned(),
            tablet: size.tablet().to_owned(),
            desktop: size.desktop().to_owned(),
        }
    }
}

/// Layout fields shared by every page.
pub(crate) fn layout_fields(settings: Option<&Settings>) -> (String, String, ImageSizeContext) {
    match settings {
        Some(s) => (s.name.clone(), s.header.status.clone(), (&s.image_size()).into()),
        None => (FALLBACK_PAGE_NAME.to_owned(), String::new(), (&ImageSize::default()).into()),
    }
}

pub async fn catalog_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<Response, ApiError> {
    let loaded = state.catalog_service.load().await;
    let settings = loaded.settings.as_ref();

    let filter = Filter::resolve(&loaded.catalog, query.category.as_deref());
    let view = CatalogView::new(&loaded.catalog, &filter, &query.q);

    let controls: Vec<ControlContext> = view
        .controls
        .iter()
        .map(|control| {
            let id = control.id.as_ref().map(|id| id.as_str());
            ControlContext {
                label: control.label.clone(),
                filter: id.unwrap_or("all").to_owned(),
                active: control.active,
                href: page_href(id, &query.q),
            }
        })
        .collect();

    let invoke_hrefs: HashMap<&str, String> = loaded
        .catalog
        .sections
        .iter()
        .flat_map(|s| s.items.iter())
        .map(|item| (item.path.as_str(), invoke_href(&item.path)))
        .collect();

    let banner = settings.and_then(|s| s.pick_banner(&mut rand::rng()).map(str::to_owned));
    let (name, status, image_size) = layout_fields(settings);

    let body = state.viewer.render(
        PAGE_TEMPLATE,
        context! {
            name,
            status,
            image_size,
            loaded => settings.is_some(),
            version => settings.map(|s| s.version.as_str()).unwrap_or_default(),
            description => settings.map(|s| s.description.as_str()).unwrap_or_default(),
            links => settings.map(|s| s.links.as_slice()).unwrap_or_default(),
            banner,
            view,
            controls,
            active_category => filter.id().map(|id| id.as_str()),
            invoke_hrefs,
        },
    )?;
    Ok(html_response(body))
}
