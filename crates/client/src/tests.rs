use apidir_core::CatalogSource;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::{ApiClient, ClientError, Invocation, RemoteSource};

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(server.uri()).unwrap();
    (server, client)
}

#[test]
fn url_for_joins_base_and_path() {
    let client = ApiClient::new("http://localhost:8080/").unwrap();
    assert_eq!(client.url_for("/api/echo?msg=hi"), "http://localhost:8080/api/echo?msg=hi");
    assert_eq!(client.url_for("api/echo"), "http://localhost:8080/api/echo");
    assert_eq!(client.url_for("https://other.example/x"), "https://other.example/x");
}

#[tokio::test]
async fn json_response_is_pretty_printed() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/echo"))
        .and(query_param("msg", "hi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"msg": "hi"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client.invoke("/api/echo?msg=hi").await.unwrap();
    match result {
        Invocation::Json { url, pretty } => {
            assert!(url.ends_with("/api/echo?msg=hi"));
            assert_eq!(pretty, "{\n  \"msg\": \"hi\"\n}");
        },
        other => panic!("expected json, got {other:?}"),
    }
}

#[tokio::test]
async fn image_response_keeps_bytes() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/images/cat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(vec![0x89, 0x50, 0x4e, 0x47], "image/png"),
        )
        .mount(&server)
        .await;

    let result = client.invoke("/api/images/cat").await.unwrap();
    assert_eq!(
        result,
        Invocation::Image {
            url: format!("{}/api/images/cat", server.uri()),
            content_type: "image/png".to_owned(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    );
}

#[tokio::test]
async fn non_success_status_is_an_error_without_retry() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/broken"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let err = client.invoke("/api/broken").await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "HTTP error! status: 503");
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/text"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain words"))
        .mount(&server)
        .await;

    let err = client.invoke("/api/text").await.unwrap_err();
    assert!(matches!(err, ClientError::JsonParse { .. }));
}

#[tokio::test]
async fn remote_source_fetches_both_documents() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/src/settings.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Demo",
            "version": "1.0",
            "header": { "status": "Online" },
            "categories": [{ "name": "Weather", "items": [
                { "name": "Now", "path": "/api/weather/now", "desc": "current" }
            ]}]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "categories": [{ "name": "TOOLS", "items": [
                { "name": "Ping", "path": "/api/tools/ping", "desc": "API endpoint" }
            ]}]
        })))
        .mount(&server)
        .await;

    let source = RemoteSource::new(client);
    let settings = source.settings().await.unwrap();
    assert_eq!(settings.categories[0].items[0].name, "Now");
    let detected = source.detected().await.unwrap();
    assert_eq!(detected.categories[0].name, "TOOLS");
    assert!(source.describe().starts_with("remote "));
}

#[tokio::test]
async fn remote_source_reports_missing_list() {
    let (_server, client) = setup().await;
    let source = RemoteSource::new(client);
    assert!(source.detected().await.is_err());
}
