use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// Logs status, method, and path of every request once it has been handled.
pub async fn request_log_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        status = response.status().as_u16(),
        method = %method,
        path = %path,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Request handled"
    );
    response
}
