use crate::handlers::{chat_handler, health_handler, index_handler, welcome_handler};
use crate::middleware::request_log_middleware;
use axum::{
    middleware as axum_mw,
    routing::{get, post},
    Router,
};
use readily_chat::MessageProcessor;
use readily_session::SessionStore;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared application state.
pub struct AppState {
    pub processor: Arc<dyn MessageProcessor>,
    pub sessions: Arc<dyn SessionStore>,
}

/// The main gateway server.
pub struct GatewayServer;

impl GatewayServer {
    /// Builds the router: `/`, `/welcome`, `/chat`, `/health`, wrapped in
    /// request logging and a permissive CORS layer.
    pub fn build(processor: Arc<dyn MessageProcessor>, sessions: Arc<dyn SessionStore>) -> Router {
        let state = Arc::new(AppState {
            processor,
            sessions,
        });

        Router::new()
            .route("/", get(index_handler))
            .route("/welcome", get(welcome_handler))
            .route("/chat", post(chat_handler))
            .route("/health", get(health_handler))
            .with_state(state)
            .layer(axum_mw::from_fn(request_log_middleware))
            .layer(CorsLayer::permissive())
    }
}
