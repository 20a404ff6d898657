//! Endpoint scanner for apidir
//!
//! Walks a two-level directory tree: every immediate subdirectory of the root
//! is a category, every endpoint source file inside it is one item. The
//! output has the same `{ categories }` shape the catalog page merges in.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod description;
mod error;
mod naming;

use std::ffi::OsStr;
use std::path::Path;

use apidir_core::{
    API_PREFIX, Category, CatalogDocument, DEFAULT_ENDPOINT_EXTENSIONS, Item,
    PLACEHOLDER_DESCRIPTION,
};
use walkdir::{DirEntry, WalkDir};

pub use description::{describe_file, extract_description};
pub use error::ScanError;
pub use naming::{display_name, endpoint_path};

/// Scanner settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Extensions (without the dot) that mark endpoint source files.
    pub extensions: Vec<String>,
    /// Description used when a file has no doc comment or cannot be read.
    pub placeholder: String,
    /// Prefix of generated request paths.
    pub api_prefix: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_ENDPOINT_EXTENSIONS.iter().map(|e| (*e).to_owned()).collect(),
            placeholder: PLACEHOLDER_DESCRIPTION.to_owned(),
            api_prefix: API_PREFIX.to_owned(),
        }
    }
}

impl ScanOptions {
    fn is_endpoint_source(&self, path: &Path) -> bool {
        path.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// Scans `root` into a catalog document.
///
/// Only a missing or unreadable root fails the scan. A file that cannot be
/// read is still listed, with the placeholder description. Category folders and
/// files are visited in file-name order; hidden entries are skipped; folders
/// without endpoint sources are left out.
pub fn scan_endpoints(root: &Path, options: &ScanOptions) -> Result<CatalogDocument, ScanError> {
    let metadata = std::fs::metadata(root).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ScanError::RootMissing(root.to_path_buf()),
        _ => ScanError::Io { path: root.to_path_buf(), source: e },
    })?;
    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut categories = Vec::new();
    for folder in children(root).filter(|e| e.file_type().is_dir()) {
        let folder_name = folder.file_name().to_string_lossy().into_owned();
        let items: Vec<Item> = children(folder.path())
            .filter(|e| e.file_type().is_file() && options.is_endpoint_source(e.path()))
            .map(|file| scan_file(&file, &folder_name, options))
            .collect();

        if items.is_empty() {
            tracing::debug!(folder = %folder_name, "no endpoint sources, skipping category");
            continue;
        }
        tracing::debug!(folder = %folder_name, count = items.len(), "scanned category");
        categories.push(Category { name: folder_name.to_uppercase(), items });
    }

    tracing::info!(root = %root.display(), categories = categories.len(), "endpoint scan complete");
    Ok(CatalogDocument { categories })
}

fn scan_file(file: &DirEntry, folder_name: &str, options: &ScanOptions) -> Item {
    let stem = file.path().file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    Item {
        name: display_name(&stem),
        path: endpoint_path(&options.api_prefix, folder_name, &stem),
        desc: describe_file(file.path(), &options.placeholder),
        inner_desc: None,
    }
}

/// Immediate, non-hidden children of `dir` in file-name order.
///
/// Symlinks are followed, so a linked folder or file counts as its target.
fn children(dir: &Path) -> impl Iterator<Item = DirEntry> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable directory entry");
                None
            },
        })
        .filter(|e| !e.file_name().to_string_lossy().starts_with('.'))
}

#[cfg(test)]
mod tests;
