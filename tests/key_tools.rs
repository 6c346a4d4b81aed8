//! End-to-end tests for the Lokalise key tools.
//!
//! Each test points the tool registry at a wiremock instance standing in for
//! the Lokalise API and checks the serialized result the MCP client receives.

use std::sync::Arc;

use lokalise_mcp_server::Config;
use lokalise_mcp_server::domains::tools::ToolRegistry;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROJECT_ID: &str = "123.abc";
const KEYS_PATH: &str = "/api2/projects/123.abc/keys";

fn registry(config: Config) -> ToolRegistry {
    ToolRegistry::new(Arc::new(config), reqwest::Client::new())
}

fn server_for(mock: &MockServer) -> ToolRegistry {
    let mut config = Config::default();
    config.lokalise.api_url = format!("{}/api2/projects", mock.uri());
    config.lokalise.project_id = Some(PROJECT_ID.to_string());
    config.lokalise.api_token = Some("test-token".to_string());
    registry(config)
}

async fn call(server: &ToolRegistry, name: &str, arguments: Value) -> (bool, String) {
    let result = server.call_tool(name, arguments.as_object().cloned()).await;
    let result = serde_json::to_value(&result).unwrap();
    let content = result["content"].as_array().unwrap();
    assert_eq!(content.len(), 1, "every call returns exactly one text block");
    assert_eq!(content[0]["type"], "text");
    (
        result["isError"].as_bool().unwrap_or(false),
        content[0]["text"].as_str().unwrap().to_string(),
    )
}

#[tokio::test]
async fn create_key_reports_created_key() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(KEYS_PATH))
        .and(header("X-Api-Token", "test-token"))
        .and(body_json(json!({
            "keys": [{
                "key_name": "greeting",
                "platforms": ["web"],
                "translations": [
                    { "language_iso": "en", "translation": "Hello" },
                    { "language_iso": "de", "translation": "" }
                ]
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keys": [{
                "key_id": "42",
                "platforms": ["web"],
                "translations": [
                    { "language_iso": "en", "translation": "Hello" },
                    { "language_iso": "de", "translation": "" }
                ],
                "created_at": "2024-01-01"
            }]
        })))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let (is_error, text) = call(
        &server,
        "create_lokalise_key",
        json!({ "key_name": "greeting", "translations": { "en": "Hello", "de": "" } }),
    )
    .await;

    assert!(!is_error, "unexpected error: {text}");
    assert!(text.contains("Key ID: 42"));
    assert!(text.contains("Translations: 2"));
    assert_eq!(text.matches("  en: \"Hello\"").count(), 1);
    assert!(!text.contains("de:"));
}

#[tokio::test]
async fn create_key_lists_translations_in_input_order() {
    let mock = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(KEYS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keys": [{
                "key_id": 7,
                "platforms": ["web"],
                "translations": [
                    { "language_iso": "fr", "translation": "Bonjour" },
                    { "language_iso": "en", "translation": "Hello" }
                ],
                "created_at": "2024-01-01"
            }]
        })))
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let (_, text) = call(
        &server,
        "create_lokalise_key",
        json!({ "key_name": "greeting", "translations": { "fr": "Bonjour", "en": "Hello" } }),
    )
    .await;

    let fr = text.find("  fr: \"Bonjour\"").unwrap();
    let en = text.find("  en: \"Hello\"").unwrap();
    assert!(fr < en);
}

#[tokio::test]
async fn delete_key_surfaces_lokalise_message() {
    let mock = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{KEYS_PATH}/42")))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": { "message": "Key not found" } })),
        )
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let (is_error, text) = call(&server, "delete_lokalise_key", json!({ "key_id": "42" })).await;

    assert!(is_error);
    assert_eq!(text, "Error: Key not found");
}

#[tokio::test]
async fn delete_key_issues_a_single_delete() {
    let mock = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{KEYS_PATH}/42")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "project_id": PROJECT_ID,
            "key_removed": true
        })))
        .expect(1)
        .mount(&mock)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let (is_error, text) = call(&server, "delete_lokalise_key", json!({ "key_id": "42" })).await;

    assert!(!is_error);
    assert_eq!(text, "✅ Successfully deleted key with ID: 42");
}

#[tokio::test]
async fn delete_key_ignores_non_json_success_body() {
    let mock = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path(format!("{KEYS_PATH}/42")))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let (is_error, text) = call(&server, "delete_lokalise_key", json!({ "key_id": "42" })).await;

    assert!(!is_error, "unexpected error: {text}");
    assert_eq!(text, "✅ Successfully deleted key with ID: 42");
}

#[tokio::test]
async fn delete_key_rejects_dot_segments_without_a_request() {
    let mock = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    for key_id in [".", "..", "%2e%2e"] {
        let (is_error, text) =
            call(&server, "delete_lokalise_key", json!({ "key_id": key_id })).await;
        assert!(is_error, "{key_id:?} should be rejected");
        assert!(text.starts_with("Error: Invalid arguments"), "{text}");
    }
}

#[tokio::test]
async fn get_key_without_match_names_the_key() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(KEYS_PATH))
        .and(query_param("filter_keys", "checkout.total"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "keys": [] })))
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let (is_error, text) =
        call(&server, "get_lokalise_key", json!({ "key_name": "checkout.total" })).await;

    assert!(is_error);
    assert!(text.starts_with("Error: "));
    assert!(text.contains("checkout.total"));
}

#[tokio::test]
async fn get_key_output_is_stable() {
    let mock = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(KEYS_PATH))
        .and(query_param("filter_keys", "home.title"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "keys": [{ "key_id": 77 }]
        })))
        .expect(2)
        .mount(&mock)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{KEYS_PATH}/77")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "key": {
                "key_id": 77,
                "key_name": { "ios": "home_title", "android": "home_title", "web": "home.title", "other": "home.title" },
                "platforms": ["web", "ios"],
                "translations": [
                    { "language_iso": "en", "translation": "Home" },
                    { "language_iso": "de", "translation": "" }
                ],
                "created_at": "2024-01-01",
                "modified_at": "2024-02-01",
                "base_words": 1,
                "is_plural": false,
                "is_hidden": false,
                "is_archived": false
            }
        })))
        .expect(2)
        .mount(&mock)
        .await;

    let server = server_for(&mock);
    let args = json!({ "key_name": "home.title" });
    let (first_error, first) = call(&server, "get_lokalise_key", args.clone()).await;
    let (_, second) = call(&server, "get_lokalise_key", args).await;

    assert!(!first_error, "unexpected error: {first}");
    assert_eq!(first, second);
    assert!(first.starts_with("🔍 Key Details: home.title\n"));
    assert!(first.contains("Platforms: web, ios"));
    assert!(!first.contains("de:"));
}

#[tokio::test]
async fn api_failures_become_error_results() {
    let mock = MockServer::start().await;
    for status in [300, 401, 429, 500] {
        mock.reset().await;
        Mock::given(method("GET"))
            .and(path(KEYS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream failure"))
            .mount(&mock)
            .await;

        let server = server_for(&mock);
        let (is_error, text) =
            call(&server, "get_lokalise_key", json!({ "key_name": "any" })).await;

        assert!(is_error, "status {status} should be an error");
        assert_eq!(text, "Error: Unknown error");
    }
}

#[tokio::test]
async fn unknown_tool_is_an_error_result() {
    let mock = MockServer::start().await;
    let server = server_for(&mock);
    let (is_error, text) = call(&server, "rename_lokalise_key", json!({})).await;

    assert!(is_error);
    assert!(text.contains("rename_lokalise_key"));
}

#[tokio::test]
async fn missing_credentials_fail_each_call() {
    let server = registry(Config::default());
    let (is_error, text) =
        call(&server, "get_lokalise_key", json!({ "key_name": "home.title" })).await;

    assert!(is_error);
    assert_eq!(
        text,
        "Error: LOKALISE_PROJECT_ID and LOKALISE_API_TOKEN must be set"
    );
}
