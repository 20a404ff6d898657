#![allow(clippy::single_call_fn, reason = "HTTP handlers are called once from router")]

pub mod documents;
pub mod invoke;
pub mod page;

use url::form_urlencoded;

/// Catalog page URL for a filter + search pair.
pub(crate) fn page_href(category: Option<&str>, search: &str) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    if let Some(category) = category {
        query.append_pair("category", category);
    }
    if !search.trim().is_empty() {
        query.append_pair("q", search);
    }
    let query = query.finish();
    if query.is_empty() { "/".to_owned() } else { format!("/?{query}") }
}

/// Invocation page URL for an item path.
pub(crate) fn invoke_href(path: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new()).append_pair("path", path).finish();
    format!("/invoke?{query}")
}
