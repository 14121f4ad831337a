use crate::{AppState, api, health, ws};

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // WebSocket document feed
        .route("/ws", get(ws::handler))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Metrics endpoint
        .route("/metrics", get(metrics_handler))
        // REST API
        .route("/api/resolve", get(api::resolve::resolve_email))
        .route("/api/users", post(api::users::register_user))
        .route("/api/users/{id}", get(api::users::get_user))
        .route("/api/contacts", post(api::contacts::add_contact))
        .route(
            "/api/messages",
            get(api::messages::list_messages).post(api::messages::send_message),
        )
        .route("/api/chats", get(api::messages::list_chat_heads))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins for browser clients)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// GET /metrics - Prometheus exposition
async fn metrics_handler(State(state): State<AppState>) -> Response {
    match state.prometheus {
        Some(handle) => (StatusCode::OK, handle.render()).into_response(),
        None => (StatusCode::NOT_FOUND, "metrics exporter not installed").into_response(),
    }
}
