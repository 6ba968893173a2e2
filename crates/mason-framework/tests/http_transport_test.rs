use mason_framework::{
    Fetcher, FrameworkError, HttpRequest, HttpTransport, Method, Outcome, Transport,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn fetcher_for(server: &MockServer) -> Fetcher {
    let transport = HttpTransport::new(&server.uri()).expect("valid server uri");
    Fetcher::new(Arc::new(transport))
}

#[tokio::test]
async fn test_get_sends_accept_and_parses_document() {
    // Setup
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/recipes/"))
        .and(header_exists("accept"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"name": "Chili", "description": "Spicy"}],
            "@controls": {"self": {"href": "/api/recipes/"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    // Test
    let fetcher = fetcher_for(&server).await;
    let doc = fetcher.fetch("/api/recipes/").await.expect("fetch failed");

    assert_eq!(doc.items().len(), 1);
    assert_eq!(doc.items()[0].text("description"), "Spicy");
}

#[tokio::test]
async fn test_post_sends_json_and_reads_location() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/drinks/"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"name": "Mojito", "alcohol": true})))
        .respond_with(ResponseTemplate::new(201).insert_header("Location", "/api/drinks/Mojito/"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server).await;
    let outcome = fetcher
        .perform(
            "/api/drinks/",
            Method::Post,
            Some(json!({"name": "Mojito", "alcohol": true})),
        )
        .await
        .expect("submit failed");

    match outcome {
        Outcome::Submitted(submission) => {
            assert_eq!(submission.status, 201);
            assert_eq!(submission.location.as_deref(), Some("/api/drinks/Mojito/"));
        }
        other => panic!("expected a submission, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_document_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/ingredients/salt/"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "@error": {
                "@message": "Already exists",
                "@messages": ["Ingredient with name 'pepper' already exists."]
            }
        })))
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server).await;
    let error = fetcher
        .submit(
            "/api/ingredients/salt/",
            Method::Put,
            Some(json!({"name": "pepper", "unit": "g"})),
        )
        .await
        .unwrap_err();

    assert_eq!(error, FrameworkError::request_failed(Some(409), "Already exists"));
}

#[tokio::test]
async fn test_non_mason_error_body_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/drinks/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad gateway</html>"))
        .mount(&server)
        .await;

    let fetcher = fetcher_for(&server).await;
    let error = fetcher.fetch("/api/drinks/").await.unwrap_err();
    assert_eq!(error.to_string(), "Request failed with status 502");
}

#[tokio::test]
async fn test_absolute_href_bypasses_api_root() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/recipes/Chili/"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    // API root points somewhere else entirely.
    let transport = HttpTransport::new("http://127.0.0.1:9").unwrap();
    let href = format!("{}/api/recipes/Chili/", server.uri());
    let response = transport
        .send(HttpRequest::write(href, Method::Delete, None))
        .await
        .expect("delete failed");
    assert_eq!(response.status, 204);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_request_failed() {
    let transport = HttpTransport::new("http://127.0.0.1:9").unwrap();
    let error = transport
        .send(HttpRequest::get("/api/recipes/"))
        .await
        .unwrap_err();
    assert!(matches!(
        error,
        FrameworkError::RequestFailed { status: None, .. }
    ));
}
