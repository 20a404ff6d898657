//! Typed error enum for the client crate.

use thiserror::Error;

/// Errors from fetching documents or invoking endpoints.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    HttpRequest(#[from] reqwest::Error),
    #[error("HTTP error! status: {code}")]
    HttpStatus { code: u16 },
    #[error("JSON parse error in {context}: {source}")]
    JsonParse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("client initialization failed: {0}")]
    ClientInit(String),
}

impl ClientError {
    /// HTTP status code for status errors.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { code } => Some(*code),
            _ => None,
        }
    }
}
