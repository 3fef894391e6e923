#![allow(clippy::unwrap_used, clippy::expect_used)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use readily_catalog::CatalogClient;
use readily_chat::{Interpreter, WELCOME_MESSAGE};
use readily_core::{AuthorRecord, BookRecord, ReadilyError, ReadilyResult, Review};
use readily_gateway::GatewayServer;
use readily_session::{InMemorySessionStore, SessionStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;

/// Catalog that knows one book and fails for a title named "outage".
struct StubCatalog;

#[async_trait]
impl CatalogClient for StubCatalog {
    async fn lookup_book(&self, title: &str) -> ReadilyResult<BookRecord> {
        if title == "outage" {
            return Err(ReadilyError::Catalog("upstream unavailable".into()));
        }
        Ok(BookRecord {
            title: "Emma".into(),
            isbn: String::new(),
            format: "Hardcover".into(),
            ..Default::default()
        })
    }

    async fn lookup_author(&self, name: &str) -> ReadilyResult<AuthorRecord> {
        Ok(AuthorRecord {
            name: name.to_string(),
            ..Default::default()
        })
    }

    async fn recent_reviews(&self) -> ReadilyResult<Vec<Review>> {
        Ok(vec![Review::new("Emma", "Lovely.")])
    }
}

fn build_app() -> (axum::Router, Arc<InMemorySessionStore>) {
    let sessions = Arc::new(InMemorySessionStore::new());
    let processor = Arc::new(Interpreter::new(Arc::new(StubCatalog)));
    (GatewayServer::build(processor, sessions.clone()), sessions)
}

/// Helper: serve the gateway on a random port, returning the address.
async fn start_test_server() -> (String, Arc<InMemorySessionStore>) {
    let (app, sessions) = build_app();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("127.0.0.1:{}", addr.port()), sessions)
}

async fn welcome(client: &reqwest::Client, addr: &str) -> String {
    let body: serde_json::Value = client
        .get(format!("http://{addr}/welcome"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    body["uuid"].as_str().unwrap().to_string()
}

async fn chat(
    client: &reqwest::Client,
    addr: &str,
    token: &str,
    message: &str,
) -> (StatusCode, serde_json::Value) {
    let resp = client
        .post(format!("http://{addr}/chat"))
        .header("Authorization", token)
        .json(&serde_json::json!({ "message": message }))
        .send()
        .await
        .unwrap();
    let status = StatusCode::from_u16(resp.status().as_u16()).unwrap();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let (addr, _sessions) = start_test_server().await;
    let resp = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "readily");
    assert_eq!(body["sessions"], 0);
}

#[tokio::test]
async fn test_welcome_creates_session() {
    let (addr, sessions) = start_test_server().await;
    let resp = reqwest::get(format!("http://{addr}/welcome")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["message"], WELCOME_MESSAGE);
    let token = body["uuid"].as_str().unwrap();
    assert!(sessions.get(token).await.is_ok());
}

#[tokio::test]
async fn test_chat_flow_keeps_context_per_session() {
    let (addr, _sessions) = start_test_server().await;
    let client = reqwest::Client::new();
    let first = welcome(&client, &addr).await;
    let second = welcome(&client, &addr).await;

    let (status, body) = chat(&client, &addr, &first, "get the book emma").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "OK, I found the book Emma. What do you want to know?");

    let (status, body) = chat(&client, &addr, &first, "Get Book Format").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Hardcover");

    let (status, body) = chat(&client, &addr, &first, "get book isbn").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "The book's isbn is not available");

    // the other session has no book bound
    let (status, body) = chat(&client, &addr, &second, "get book format").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Please provide a book first!");
}

#[tokio::test]
async fn test_help_and_reviews() {
    let (addr, _sessions) = start_test_server().await;
    let client = reqwest::Client::new();
    let token = welcome(&client, &addr).await;

    let (status, body) = chat(&client, &addr, &token, "help").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], WELCOME_MESSAGE);

    let (_, body) = chat(&client, &addr, &token, "get latest reviews").await;
    assert_eq!(body["message"], "Book title: Emma\nBody: Lovely.\n");
}

#[tokio::test]
async fn test_bearer_prefix_is_accepted() {
    let (addr, _sessions) = start_test_server().await;
    let client = reqwest::Client::new();
    let token = welcome(&client, &addr).await;

    let (status, _) = chat(&client, &addr, &format!("Bearer {token}"), "help").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_catalog_failure_is_bad_gateway() {
    let (addr, _sessions) = start_test_server().await;
    let client = reqwest::Client::new();
    let token = welcome(&client, &addr).await;

    let (status, body) = chat(&client, &addr, &token, "get the book outage").await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("upstream unavailable"));
}

#[tokio::test]
async fn test_missing_authorization_is_unauthorized() {
    let (app, _sessions) = build_app();
    let resp = app
        .oneshot(
            Request::post("/chat")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"message": "help"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_session_is_unauthorized() {
    let (addr, _sessions) = start_test_server().await;
    let client = reqwest::Client::new();

    let (status, body) = chat(&client, &addr, "no-such-token", "help").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "No session found for: no-such-token.");
}

#[tokio::test]
async fn test_bad_bodies_are_bad_request() {
    let (addr, _sessions) = start_test_server().await;
    let client = reqwest::Client::new();
    let token = welcome(&client, &addr).await;

    for (body, expected) in [
        ("{not json", "Couldn't decode JSON"),
        (r#"{"text": "help"}"#, "Missing message key in body."),
    ] {
        let resp = client
            .post(format!("http://{addr}/chat"))
            .header("Authorization", &token)
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400);
        let json: serde_json::Value = resp.json().await.unwrap();
        assert!(json["error"].as_str().unwrap().starts_with(expected));
    }
}

#[tokio::test]
async fn test_chat_rejects_get() {
    let (app, _sessions) = build_app();
    let resp = app
        .oneshot(Request::get("/chat").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_index_lists_routes() {
    let (app, _sessions) = build_app();
    let resp = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("POST /chat"));
}
