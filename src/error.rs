use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::completion::CompletionError;

/// Errors the relay endpoint can report to a caller.
///
/// Upstream detail is logged server-side when the response is built and is
/// never included in the body; the caller only sees the generic message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Failed to get response from OpenAI")]
    Upstream(#[from] CompletionError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(reason) => {
                tracing::warn!(%reason, "rejected malformed request");
                StatusCode::BAD_REQUEST
            }
            AppError::Upstream(source) => {
                tracing::error!(error = %source, "chat completion call failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let response = AppError::BadRequest("missing field `message`".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_failure_maps_to_500() {
        let response = AppError::Upstream(CompletionError::MissingContent).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn upstream_body_omits_the_underlying_cause() {
        let err = AppError::Upstream(CompletionError::Status {
            status: StatusCode::UNAUTHORIZED,
            body: "invalid api key".into(),
        });
        assert_eq!(err.to_string(), "Failed to get response from OpenAI");
    }
}
