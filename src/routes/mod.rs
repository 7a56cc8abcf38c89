// src/routes/mod.rs
pub mod message;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use message::message_handler;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/message", post(message_handler))
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}
