use std::time::Duration;

use apidir_core::{DEFAULT_CONNECT_TIMEOUT_SECS, env_parse_with_default};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Response of one endpoint invocation, classified by content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Body parsed as JSON and pretty-printed.
    Json { url: String, pretty: String },
    /// Raw image bytes (`image/*`).
    Image { url: String, content_type: String, bytes: Vec<u8> },
}

/// Client for the server that hosts the listed endpoints.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url` (an origin such as `http://127.0.0.1:8080`).
    ///
    /// Only connecting is bounded (`APIDIR_HTTP_TIMEOUT_SECS`); a request that
    /// connected runs until the server answers.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let connect_secs =
            env_parse_with_default("APIDIR_HTTP_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS);
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(connect_secs))
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    /// Wraps an existing reqwest client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { client, base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an item path. Absolute URLs pass through unchanged.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_owned();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    /// Issues exactly one GET for `path` and classifies the response.
    ///
    /// # Errors
    /// Network failures, non-2xx statuses and non-JSON bodies for non-image
    /// responses.
    pub async fn invoke(&self, path: &str) -> Result<Invocation, ClientError> {
        let url = self.url_for(path);
        tracing::debug!(%url, "invoking endpoint");
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus { code: status.as_u16() });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        match content_type {
            Some(content_type) if content_type.starts_with("image/") => {
                let bytes = response.bytes().await?.to_vec();
                Ok(Invocation::Image { url, content_type, bytes })
            },
            _ => {
                let body = response.bytes().await?;
                let value: serde_json::Value = serde_json::from_slice(&body)
                    .map_err(|e| ClientError::JsonParse { context: url.clone(), source: e })?;
                let pretty = serde_json::to_string_pretty(&value)
                    .map_err(|e| ClientError::JsonParse { context: url.clone(), source: e })?;
                Ok(Invocation::Json { url, pretty })
            },
        }
    }

    /// GETs `path` and deserializes the JSON body.
    ///
    /// # Errors
    /// Network failures, non-2xx statuses and bodies that do not match `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url_for(path);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus { code: status.as_u16() });
        }
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::JsonParse { context: url, source: e })
    }
}
