//! Description extraction from the first `/** ... */` block of a source file.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static DOC_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/\*\*[\s*]+([^*]+)").expect("doc comment regex is valid"));

/// Leading text of the first documentation comment, if any.
#[must_use]
pub fn extract_description(source: &str) -> Option<String> {
    let capture = DOC_COMMENT_REGEX.captures(source)?.get(1)?;
    // A capture that opens on the `/` of `*/` means the block was empty.
    if capture.as_str().starts_with('/') && source[..capture.start()].ends_with('*') {
        return None;
    }
    let text = capture.as_str().trim();
    if text.is_empty() { None } else { Some(text.to_owned()) }
}

/// Reads `path` and extracts its description, falling back to `placeholder`.
///
/// Invalid UTF-8 is decoded lossily.
#[must_use]
pub fn describe_file(path: &Path, placeholder: &str) -> String {
    match std::fs::read(path) {
        Ok(bytes) => extract_description(&String::from_utf8_lossy(&bytes)).unwrap_or_else(|| {
            tracing::debug!(path = %path.display(), "no doc comment, using placeholder");
            placeholder.to_owned()
        }),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "unreadable endpoint source");
            placeholder.to_owned()
        },
    }
}
