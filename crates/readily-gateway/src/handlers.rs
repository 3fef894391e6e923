use crate::error::ApiError;
use crate::server::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap},
    response::{Html, IntoResponse},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{debug, info};

const INDEX_PAGE: &str = r#"<!DOCTYPE html><html><head><title>Readily</title></head><body><pre style="font-family: monospace;">
Available Routes:

  GET  /welcome -> create a session, returns {"uuid", "message"}
  POST /chat    -> send {"message"} with the uuid in the Authorization header
  GET  /health  -> service status
  GET  /        -> this page
</pre></body></html>"#;

pub async fn index_handler() -> impl IntoResponse {
    Html(INDEX_PAGE)
}

pub async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "readily",
        "sessions": state.sessions.len().await,
    }))
}

/// `GET /welcome`: opens a session and greets the client.
pub async fn welcome_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, ApiError> {
    let token = state.sessions.create().await?;
    info!(session = %token, "Session opened");
    Ok(Json(json!({
        "uuid": token,
        "message": state.processor.welcome_message(),
    })))
}

/// `POST /chat`: runs one message through the processor for the session
/// named in the `Authorization` header.
pub async fn chat_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let token = session_token(&headers).ok_or_else(|| {
        ApiError::Unauthorized("Missing or empty Authorization header.".to_string())
    })?;
    let handle = state.sessions.get(token).await?;
    let message = decode_message(&body)?;

    // held until the reply is produced: same-session messages run one at a time
    let mut session = handle.lock().await;
    session.touch();
    debug!(session = %token, turn = session.message_count, "Processing message");

    let reply = state
        .processor
        .process(&mut session.context, &message)
        .await?;
    Ok(Json(json!({ "message": reply })))
}

/// The raw token, with an optional `Bearer ` prefix stripped.
fn session_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    (!token.is_empty()).then_some(token)
}

fn decode_message(body: &[u8]) -> Result<String, ApiError> {
    let data: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("Couldn't decode JSON: {e}.")))?;
    match data.get("message") {
        None => Err(ApiError::BadRequest("Missing message key in body.".to_string())),
        Some(Value::String(message)) => Ok(message.clone()),
        Some(_) => Err(ApiError::BadRequest(
            "Couldn't decode JSON: message must be a string.".to_string(),
        )),
    }
}
