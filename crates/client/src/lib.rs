//! HTTP client for apidir
//!
//! Fetches the settings document and the detected endpoint list from a
//! server, and invokes listed endpoints on behalf of the invocation page.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod client;
mod error;
mod source;

pub use client::{ApiClient, Invocation};
pub use error::ClientError;
pub use source::RemoteSource;

#[cfg(test)]
mod tests;
