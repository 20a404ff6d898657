use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::{ScanError, ScanOptions, scan_endpoints};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn scans_categories_and_items() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "users/get-user-info.js", "/**\n * Fetch a user by id\n */\n");
    write(dir.path(), "users/list.js", "module.exports = {};");
    write(dir.path(), "users/README.md", "/** not an endpoint */");

    let doc = scan_endpoints(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(doc.categories.len(), 1);
    let users = &doc.categories[0];
    assert_eq!(users.name, "USERS");
    assert_eq!(users.items.len(), 2);

    let info = &users.items[0];
    assert_eq!(info.name, "Get User Info");
    assert_eq!(info.path, "/api/users/get-user-info");
    assert_eq!(info.desc, "Fetch a user by id");

    let list = &users.items[1];
    assert_eq!(list.name, "List");
    assert_eq!(list.desc, "API endpoint");
}

#[test]
fn empty_categories_are_omitted() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "empty/notes.txt", "nothing");
    fs::create_dir_all(dir.path().join("bare")).unwrap();
    write(dir.path(), "tools/ping.js", "");

    let doc = scan_endpoints(dir.path(), &ScanOptions::default()).unwrap();
    let names: Vec<_> = doc.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["TOOLS"]);
}

#[test]
fn files_at_root_and_hidden_entries_are_ignored() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "top-level.js", "");
    write(dir.path(), ".cache/x.js", "");
    write(dir.path(), "tools/.hidden.js", "");
    write(dir.path(), "tools/echo.js", "");

    let doc = scan_endpoints(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(doc.categories.len(), 1);
    assert_eq!(doc.categories[0].items.len(), 1);
    assert_eq!(doc.categories[0].items[0].path, "/api/tools/echo");
}

#[test]
fn custom_extensions_and_placeholder() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "media/random-cat.ts", "");
    write(dir.path(), "media/old.js", "");
    let options = ScanOptions {
        extensions: vec!["ts".to_owned()],
        placeholder: "No description".to_owned(),
        ..ScanOptions::default()
    };

    let doc = scan_endpoints(dir.path(), &options).unwrap();
    assert_eq!(doc.categories[0].items.len(), 1);
    assert_eq!(doc.categories[0].items[0].name, "Random Cat");
    assert_eq!(doc.categories[0].items[0].desc, "No description");
}

#[test]
fn output_order_is_deterministic() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "zeta/b.js", "");
    write(dir.path(), "zeta/a.js", "");
    write(dir.path(), "alpha/c.js", "");

    let doc = scan_endpoints(dir.path(), &ScanOptions::default()).unwrap();
    let names: Vec<_> = doc.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["ALPHA", "ZETA"]);
    let items: Vec<_> = doc.categories[1].items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(items, vec!["A", "B"]);
}

#[test]
fn missing_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let err = scan_endpoints(&missing, &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, ScanError::RootMissing(_)));
}

#[test]
fn file_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "file.js", "");
    let err = scan_endpoints(&dir.path().join("file.js"), &ScanOptions::default()).unwrap_err();
    assert!(matches!(err, ScanError::NotADirectory(_)));
}

#[test]
fn serializes_to_list_shape() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "tools/ping.js", "/** Ping */");
    let doc = scan_endpoints(dir.path(), &ScanOptions::default()).unwrap();
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["categories"][0]["name"], "TOOLS");
    assert_eq!(json["categories"][0]["items"][0]["desc"], "Ping");
    assert!(json["categories"][0]["items"][0].get("innerDesc").is_none());
}

#[test]
fn doc_comment_starting_with_a_path_is_kept() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "health/ping.js", "/** /v1/ping health check */\nx();\n/** helper util */");
    let doc = scan_endpoints(dir.path(), &ScanOptions::default()).unwrap();
    assert_eq!(doc.categories[0].items[0].desc, "/v1/ping health check");
}

#[test]
fn non_utf8_source_is_decoded_lossily() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "media/a-first.js", "/** First */");
    let mut bytes = b"/** Legacy \xff encoded */\n".to_vec();
    bytes.extend_from_slice(b"\xfe\xfd");
    fs::write(dir.path().join("media/b-legacy.js"), bytes).unwrap();
    write(dir.path(), "media/c-last.js", "/** Last */");

    let doc = scan_endpoints(dir.path(), &ScanOptions::default()).unwrap();
    let items = &doc.categories[0].items;
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].desc, "First");
    assert_eq!(items[1].path, "/api/media/b-legacy");
    assert_eq!(items[1].desc, "Legacy \u{fffd} encoded");
    assert_eq!(items[2].desc, "Last");
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_listed_with_placeholder() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    write(dir.path(), "tools/echo.js", "/** Echo back */");
    write(dir.path(), "tools/locked.js", "module.exports = {};");
    let locked = dir.path().join("tools/locked.js");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let doc = scan_endpoints(dir.path(), &ScanOptions::default());
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    let doc = doc.unwrap();
    let items = &doc.categories[0].items;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].desc, "Echo back");
    assert_eq!(items[1].name, "Locked");
    assert_eq!(items[1].desc, "API endpoint");
}

#[cfg(unix)]
#[test]
fn symlinked_folders_and_files_are_followed() {
    use std::os::unix::fs::symlink;

    let real = TempDir::new().unwrap();
    write(real.path(), "ping.js", "/** Ping */");
    write(real.path(), "weather/now.js", "/** Current weather */");

    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("tools")).unwrap();
    symlink(real.path().join("ping.js"), dir.path().join("tools/ping.js")).unwrap();
    symlink(real.path().join("weather"), dir.path().join("weather")).unwrap();

    let doc = scan_endpoints(dir.path(), &ScanOptions::default()).unwrap();
    let names: Vec<_> = doc.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["TOOLS", "WEATHER"]);
    assert_eq!(doc.categories[0].items[0].path, "/api/tools/ping");
    assert_eq!(doc.categories[0].items[0].desc, "Ping");
    assert_eq!(doc.categories[1].items[0].path, "/api/weather/now");
    assert_eq!(doc.categories[1].items[0].desc, "Current weather");
}
