//! Verifies `GET /hello` through the in-process client and documents the
//! exchange as snippets.

use std::path::PathBuf;
use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header, Method, StatusCode};
use axum::routing::get as get_route;
use axum::Router;
use restdocs::request::{get, post, request};
use restdocs::{print, MockClient, RestDocs, RestDocsConfig, RestDocsError};

use hello_api::config::MiddlewareConfig;
use hello_api::{apply_middleware, build_router, AppState};

fn app() -> Router {
    build_router(AppState::default(), &MiddlewareConfig::default())
}

/// Headers that change per request or come from CORS, left out of snippets
fn snippet_config() -> RestDocsConfig {
    RestDocsConfig::from_env()
        .exclude_header("x-request-id")
        .exclude_header("vary")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn hello() -> Result<(), RestDocsError> {
    init_tracing();
    let mut config = snippet_config();
    // Default to the workspace target dir, as `cargo test` runs from the package root
    if std::env::var("RESTDOCS_OUTPUT_DIR").is_err() {
        config = config.with_output_dir(
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/generated-snippets"),
        );
    }
    let docs = RestDocs::new(config);

    MockClient::new(app())
        .perform(get("/hello")?)
        .await?
        .expect_ok()?
        .and_do(&print())
        .await?
        .and_do(&docs.document("hello"))
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_hello_returns_ok_with_greeting() -> Result<(), RestDocsError> {
    let actions = MockClient::new(app()).perform(get("/hello")?).await?.expect_ok()?;

    assert_eq!(actions.body_text(), "hello");
    let content_type = actions
        .exchange()
        .response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"), "content type was {content_type}");
    Ok(())
}

#[tokio::test]
async fn test_hello_requires_no_parameters_or_headers() -> Result<(), RestDocsError> {
    let req = get("/hello")?;
    assert!(req.headers().is_empty());
    assert!(req.uri().query().is_none());

    let actions = MockClient::new(app()).perform(req).await?;

    assert_ne!(actions.status(), StatusCode::BAD_REQUEST);
    assert_ne!(actions.status(), StatusCode::NOT_FOUND);
    actions.expect_ok()?;
    Ok(())
}

#[tokio::test]
async fn test_hello_twice_in_a_row() -> Result<(), RestDocsError> {
    let client = MockClient::new(app());

    let first = client.perform(get("/hello")?).await?.expect_ok()?;
    let second = client.perform(get("/hello")?).await?.expect_ok()?;

    assert_eq!(first.body_text(), second.body_text());
    Ok(())
}

#[tokio::test]
async fn test_hello_is_idempotent_over_many_requests() -> Result<(), RestDocsError> {
    let client = MockClient::new(app());

    for _ in 0..10 {
        client.perform(get("/hello")?).await?.expect_ok()?;
    }
    Ok(())
}

#[tokio::test]
async fn test_ignores_unexpected_query_parameters() -> Result<(), RestDocsError> {
    MockClient::new(app())
        .perform(get("/hello?name=world")?)
        .await?
        .expect_ok()?;
    Ok(())
}

#[tokio::test]
async fn test_configured_greeting_is_served() -> Result<(), RestDocsError> {
    let app = build_router(AppState::new("hi there", "test"), &MiddlewareConfig::default());

    let actions = MockClient::new(app).perform(get("/hello")?).await?.expect_ok()?;

    assert_eq!(actions.body_text(), "hi there");
    Ok(())
}

#[tokio::test]
async fn test_response_carries_request_id() -> Result<(), RestDocsError> {
    let actions = MockClient::new(app()).perform(get("/hello")?).await?.expect_ok()?;

    assert!(actions.exchange().response.headers.contains_key("x-request-id"));
    Ok(())
}

#[tokio::test]
async fn test_supplied_request_id_is_propagated() -> Result<(), RestDocsError> {
    let req = request(Method::GET, "/hello")
        .header("x-request-id", "trace-me")
        .body(Default::default())?;

    let actions = MockClient::new(app()).perform(req).await?.expect_ok()?;

    assert_eq!(
        actions.exchange().response.headers.get("x-request-id").unwrap(),
        "trace-me"
    );
    Ok(())
}

#[tokio::test]
async fn test_health_returns_ok() -> Result<(), RestDocsError> {
    let actions = MockClient::new(app()).perform(get("/health")?).await?.expect_ok()?;

    assert_eq!(actions.body_text(), "OK");
    Ok(())
}

// ==================== FAILURES ====================

#[tokio::test]
async fn test_unknown_path_fails_ok_expectation() {
    let err = MockClient::new(app())
        .perform(get("/goodbye").unwrap())
        .await
        .unwrap()
        .expect_ok()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "GET /goodbye: expected status 200 OK but was 404 Not Found"
    );
}

#[tokio::test]
async fn test_unknown_path_returns_json_error() -> Result<(), RestDocsError> {
    let actions = MockClient::new(app())
        .perform(get("/goodbye")?)
        .await?
        .expect_status(StatusCode::NOT_FOUND)?;

    let body: serde_json::Value = serde_json::from_str(&actions.body_text())?;
    assert_eq!(body["error"], "not_found");
    assert_eq!(body["message"], "no route for /goodbye");
    Ok(())
}

#[tokio::test]
async fn test_post_hello_is_method_not_allowed() -> Result<(), RestDocsError> {
    let actions = MockClient::new(app())
        .perform(post("/hello", "hi")?)
        .await?
        .expect_status(StatusCode::METHOD_NOT_ALLOWED)?;

    let body: serde_json::Value = serde_json::from_str(&actions.body_text())?;
    assert_eq!(body["error"], "method_not_allowed");
    Ok(())
}

#[tokio::test]
async fn test_oversized_body_is_rejected() -> Result<(), RestDocsError> {
    let config = MiddlewareConfig {
        max_body_size: 1024,
        ..MiddlewareConfig::default()
    };
    let body = vec![b'x'; 2048];
    let req = request(Method::GET, "/hello")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Bytes::from(body))?;

    MockClient::new(build_router(AppState::default(), &config))
        .perform(req)
        .await?
        .expect_status(StatusCode::PAYLOAD_TOO_LARGE)?;
    Ok(())
}

#[tokio::test]
async fn test_body_within_limit_is_accepted() -> Result<(), RestDocsError> {
    let config = MiddlewareConfig {
        max_body_size: 1024,
        ..MiddlewareConfig::default()
    };
    let body = vec![b'x'; 512];
    let req = request(Method::GET, "/hello")
        .header(header::CONTENT_LENGTH, body.len())
        .body(Bytes::from(body))?;

    MockClient::new(build_router(AppState::default(), &config))
        .perform(req)
        .await?
        .expect_ok()?;
    Ok(())
}

#[tokio::test]
async fn test_slow_handler_times_out_with_408() -> Result<(), RestDocsError> {
    let config = MiddlewareConfig {
        request_timeout: Duration::from_millis(50),
        ..MiddlewareConfig::default()
    };
    let slow = Router::new().route(
        "/slow",
        get_route(|| async {
            tokio::time::sleep(Duration::from_secs(1)).await;
            "late"
        }),
    );

    MockClient::new(apply_middleware(slow, &config))
        .perform(get("/slow")?)
        .await?
        .expect_status(StatusCode::REQUEST_TIMEOUT)?;
    Ok(())
}

// ==================== DOCUMENTATION ====================

#[tokio::test]
async fn test_documented_hello_snippets() -> Result<(), RestDocsError> {
    let out = tempfile::tempdir()?;
    let docs = RestDocs::new(snippet_config().with_output_dir(out.path()));

    MockClient::new(app())
        .perform(get("/hello")?)
        .await?
        .expect_ok()?
        .and_do(&docs.document("hello"))
        .await?;

    let dir = out.path().join("hello");
    let ext = docs.config().format.extension();
    let read = |name: &str| std::fs::read_to_string(dir.join(format!("{name}.{ext}")));

    assert!(read("curl-request")?.contains("$ curl 'http://localhost:8080/hello' -i -X GET"));
    assert!(read("httpie-request")?.contains("$ http GET 'http://localhost:8080/hello'"));
    assert!(read("http-request")?.contains("GET /hello HTTP/1.1\nHost: localhost:8080\n"));

    let response = read("http-response")?;
    assert!(response.contains("HTTP/1.1 200 OK\n"));
    assert!(response.contains("Content-Type: text/plain; charset=utf-8\n"));
    assert!(response.contains("Content-Length: 5\n"));
    assert!(!response.contains("X-Request-Id"));
    assert!(response.contains("\n\nhello\n"));

    assert!(read("response-body")?.contains("hello"));
    assert!(read("request-body").is_ok());
    Ok(())
}

#[tokio::test]
async fn test_failed_verification_documents_nothing() -> Result<(), RestDocsError> {
    let out = tempfile::tempdir()?;
    let docs = RestDocs::new(snippet_config().with_output_dir(out.path()));

    let result = async {
        MockClient::new(app())
            .perform(get("/goodbye")?)
            .await?
            .expect_ok()?
            .and_do(&docs.document("goodbye"))
            .await
    }
    .await;

    assert!(matches!(result, Err(RestDocsError::UnexpectedStatus { .. })));
    assert!(!out.path().join("goodbye").exists());
    Ok(())
}
