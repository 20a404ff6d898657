//! Invocation console: parameter form plus the response of one request.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Response;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use minijinja::context;
use serde::Serialize;

use apidir_core::{Modal, ModalContent, ParamError, ParamForm};

use crate::api_error::ApiError;
use crate::query_types::InvokeQuery;
use crate::viewer::{INVOKE_TEMPLATE, html_response};
use crate::AppState;

use super::page::layout_fields;

#[derive(Debug, Serialize)]
struct FieldContext {
    name: String,
    value: String,
    placeholder: String,
    invalid: bool,
}

#[derive(Debug, Serialize)]
struct FormContext {
    fields: Vec<FieldContext>,
}

#[derive(Debug, Default, Serialize)]
struct ContentContext {
    kind: &'static str,
    text: Option<String>,
    data_url: Option<String>,
}

impl ContentContext {
    fn from_modal(content: &ModalContent) -> Self {
        match content {
            ModalContent::Empty | ModalContent::Loading => Self { kind: "empty", ..Self::default() },
            ModalContent::Json(text) => Self { kind: "json", text: Some(text.clone()), data_url: None },
            ModalContent::Error(text) => Self { kind: "error", text: Some(text.clone()), data_url: None },
            ModalContent::Image { content_type, bytes } => Self {
                kind: "image",
                text: None,
                data_url: Some(format!("data:{content_type};base64,{}", STANDARD.encode(bytes))),
            },
        }
    }
}

/// Renders the console for a listed endpoint.
///
/// Endpoints without parameters are invoked right away. Endpoints with
/// parameters show the form first and are invoked once it is submitted
/// with every field filled in. Only paths present in the catalog are served.
pub async fn invoke_page(
    State(state): State<Arc<AppState>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let query = InvokeQuery::from_pairs(pairs).map_err(ApiError::BadRequest)?;

    let loaded = state.catalog_service.load().await;
    let item = loaded
        .catalog
        .find_item(&query.path)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("endpoint '{}' is not listed", query.path)))?;

    let mut form = ParamForm::for_path(&item.path);
    for (name, value) in &query.values {
        if let Err(e) = form.set(name, value.clone()) {
            tracing::debug!(error = %e, "ignoring submitted value");
        }
    }

    let mut modal = Modal::new();
    let mut invalid: Vec<String> = Vec::new();
    let mut show_form = form.needs_input();

    if !form.needs_input() || query.submit {
        match state.invocation_service.invoke(&mut modal, &item, &form).await {
            Ok(()) => show_form = false,
            Err(ParamError::MissingFields(names)) => invalid = names,
            Err(e) => tracing::debug!(error = %e, "invocation not started"),
        }
    } else {
        modal.open(&item);
    }

    let form_context = show_form.then(|| FormContext {
        fields: form
            .fields()
            .iter()
            .map(|f| FieldContext {
                name: f.name.clone(),
                value: f.value.clone(),
                placeholder: f.placeholder(),
                invalid: invalid.contains(&f.name),
            })
            .collect(),
    });

    let (name, status, image_size) = layout_fields(loaded.settings.as_ref());
    let body = state.viewer.render(
        INVOKE_TEMPLATE,
        context! {
            name,
            status,
            image_size,
            item,
            form => form_context,
            endpoint => modal.endpoint(),
            content => ContentContext::from_modal(modal.content()),
            back_href => "/",
        },
    )?;
    Ok(html_response(body))
}
