//! Core types and rules for apidir
//!
//! This crate contains the catalog data model, the merge/sort rules, and the
//! view models (filter, search, parameter form, modal) shared by the other crates.

mod catalog;
mod collate;
mod constants;
mod env_config;
mod error;
mod modal;
mod model;
mod params;
mod source;
mod view;

pub use catalog::*;
pub use collate::*;
pub use constants::*;
pub use env_config::*;
pub use error::*;
pub use modal::*;
pub use model::*;
pub use params::*;
pub use source::*;
pub use view::*;
