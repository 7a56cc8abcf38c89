use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{info, warn};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    state::SharedState,
};

/// Relay one message to the upstream completion API and return its reply.
///
/// The upstream call happens exactly once per request; any failure is
/// terminal and comes back as a generic 500.
pub async fn message_handler(
    State(state): State<SharedState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    // A missing or malformed `message` field is rejected before any
    // upstream work. An empty string is not rejected; it passes through.
    let Json(ChatRequest { message }) = payload?;

    info!(message = %message, "received message");

    let reply = state.completions.complete(&message).await?;

    if let Some(log) = &state.exchange_log {
        // A failed append never masks the successful reply.
        if let Err(error) = log.append(&message, &reply).await {
            warn!(
                %error,
                path = %log.path().display(),
                "failed to append exchange log"
            );
        }
    }

    info!(reply_chars = reply.len(), "relayed upstream reply");

    Ok(Json(ChatResponse { response: reply }))
}
