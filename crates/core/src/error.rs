use std::io;

use thiserror::Error;

/// Errors raised while loading catalog inputs.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Serialization error in {context}: {source}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Scan error: {0}")]
    Scan(String),

    #[error("Not configured: {0}")]
    NotConfigured(String),
}

/// Errors raised while building an invocation URL from a parameter form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("Please fill in all required fields.")]
    MissingFields(Vec<String>),

    #[error("unknown parameter: {0}")]
    UnknownParam(String),
}
