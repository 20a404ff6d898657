//! Shared constants for apidir.

/// Where the page fetches the authored settings document from.
pub const SETTINGS_PATH: &str = "/src/settings.json";

/// Where the page fetches the auto-detected endpoint list from.
pub const DETECTED_LIST_PATH: &str = "/api/list";

/// URL prefix of scanned endpoints.
pub const API_PREFIX: &str = "/api";

/// Description used when an endpoint source has no doc comment.
pub const PLACEHOLDER_DESCRIPTION: &str = "API endpoint";

/// File extensions the scanner treats as endpoint sources.
pub const DEFAULT_ENDPOINT_EXTENSIONS: &[&str] = &["js"];

/// Default scan root, relative to the working directory.
pub const DEFAULT_API_DIR: &str = "./src/api";

/// Label of the filter control that shows every category.
pub const ALL_FILTER_LABEL: &str = "All";

/// Banner max-width fallbacks per viewport class.
pub const DEFAULT_IMAGE_SIZE_MOBILE: &str = "80%";
pub const DEFAULT_IMAGE_SIZE_TABLET: &str = "40%";
pub const DEFAULT_IMAGE_SIZE_DESKTOP: &str = "40%";

/// Largest image response shown inline (`APIDIR_MAX_IMAGE_BYTES`).
pub const DEFAULT_MAX_INLINE_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Connect timeout for outgoing requests, in seconds.
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
