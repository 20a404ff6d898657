//! Display names and request paths derived from endpoint file names.

/// `get-user-info` becomes `Get User Info`.
#[must_use]
pub fn display_name(stem: &str) -> String {
    stem.split('-').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `/api` + `users` + `get-user-info` becomes `/api/users/get-user-info`.
#[must_use]
pub fn endpoint_path(prefix: &str, category: &str, stem: &str) -> String {
    format!("{}/{category}/{stem}", prefix.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_stem_is_title_cased() {
        assert_eq!(display_name("get-user-info"), "Get User Info");
    }

    #[test]
    fn single_word_stem() {
        assert_eq!(display_name("ping"), "Ping");
    }

    #[test]
    fn existing_capitals_are_kept() {
        assert_eq!(display_name("get-URL"), "Get URL");
    }

    #[test]
    fn empty_segments_are_preserved() {
        assert_eq!(display_name("a--b"), "A  B");
    }

    #[test]
    fn path_joins_prefix_category_and_stem() {
        assert_eq!(endpoint_path("/api", "users", "get-user-info"), "/api/users/get-user-info");
        assert_eq!(endpoint_path("/api/", "users", "x"), "/api/users/x");
    }
}
