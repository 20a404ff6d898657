//! Service layer for apidir
//!
//! Centralizes catalog loading and endpoint invocation between the HTTP/CLI
//! front ends and the core, scanner and client crates.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod catalog_service;
mod error;
mod invocation_service;
mod local_source;

pub use catalog_service::{CatalogService, LoadedCatalog};
pub use error::ServiceError;
pub use invocation_service::{CompletedInvocation, InvocationService, PendingInvocation};
pub use local_source::LocalSource;
