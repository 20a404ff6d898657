//! Query-parameter form for invoking an endpoint.
//!
//! An item path such as `/api/echo?msg&lang=en` names its parameters in the
//! query string. The form asks for one value per distinct name and rebuilds
//! the query string from those values in first-occurrence order.

use serde::Serialize;
use url::form_urlencoded;

use crate::error::ParamError;

/// Splits a path into its base and optional query string.
#[must_use]
pub fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('?') {
        Some((base, query)) => (base, Some(query)),
        None => (path, None),
    }
}

/// Ordered, de-duplicated parameter names from a path's query string.
#[must_use]
pub fn param_names(path: &str) -> Vec<String> {
    let Some(query) = split_path(path).1 else {
        return Vec::new();
    };
    let mut names: Vec<String> = Vec::new();
    for (name, _) in form_urlencoded::parse(query.as_bytes()) {
        if !name.is_empty() && !names.iter().any(|n| n.as_str() == name.as_ref()) {
            names.push(name.into_owned());
        }
    }
    names
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamField {
    pub name: String,
    pub value: String,
}

impl ParamField {
    #[must_use]
    pub fn placeholder(&self) -> String {
        format!("Enter {}...", self.name)
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Input form for one invocation. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamForm {
    path: String,
    fields: Vec<ParamField>,
}

impl ParamForm {
    #[must_use]
    pub fn for_path(path: &str) -> Self {
        let fields = param_names(path)
            .into_iter()
            .map(|name| ParamField { name, value: String::new() })
            .collect();
        Self { path: path.to_owned(), fields }
    }

    /// Whether the endpoint takes parameters at all.
    #[must_use]
    pub fn needs_input(&self) -> bool {
        !self.fields.is_empty()
    }

    #[must_use]
    pub fn fields(&self) -> &[ParamField] {
        &self.fields
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Sets the current value of a named field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<(), ParamError> {
        let field = self
            .fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| ParamError::UnknownParam(name.to_owned()))?;
        field.value = value.into();
        Ok(())
    }

    /// Submit is enabled only when every field holds non-blank text.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.fields.iter().all(|f| !f.is_blank())
    }

    #[must_use]
    pub fn missing(&self) -> Vec<String> {
        self.fields.iter().filter(|f| f.is_blank()).map(|f| f.name.clone()).collect()
    }

    /// Builds the request path. Without parameters this is the original path.
    pub fn submit(&self) -> Result<String, ParamError> {
        if !self.needs_input() {
            return Ok(self.path.clone());
        }
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(ParamError::MissingFields(missing));
        }
        let mut query = form_urlencoded::Serializer::new(String::new());
        for field in &self.fields {
            query.append_pair(&field.name, field.value.trim());
        }
        let (base, _) = split_path(&self.path);
        Ok(format!("{base}?{}", query.finish()))
    }
}
