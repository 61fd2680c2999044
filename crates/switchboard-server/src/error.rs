//! Mapping from service errors to HTTP responses.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use switchboard_common::ChatError;

use crate::protocol::ErrorResponse;

#[derive(Debug)]
pub enum ApiError {
    Chat(ChatError),
    /// Request body that could not be read as the expected JSON.
    Body { status: StatusCode, detail: String },
}

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        Self::Chat(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Chat(ChatError::InvalidArguments(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Chat(err) if err.is_not_found() => StatusCode::NOT_FOUND,
            Self::Chat(_) => StatusCode::BAD_REQUEST,
            Self::Body { status, .. } => *status,
        }
    }

    fn detail(self) -> String {
        match self {
            Self::Chat(err) => err.to_string(),
            Self::Body { detail, .. } => detail,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();
        tracing::debug!(status = %status, error = %detail, "Request failed");
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_errors_are_not_found() {
        let missing = ApiError::from(ChatError::SessionNotFound("x".into()));
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
        let expired = ApiError::from(ChatError::SessionExpired("x".into()));
        assert_eq!(expired.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn tool_errors() {
        let unknown = ApiError::from(ChatError::UnknownTool("x".into()));
        assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
        let invalid = ApiError::from(ChatError::InvalidArguments("bad".into()));
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn body_errors_keep_their_status() {
        let err = ApiError::Body {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: "missing field `session_id`".into(),
        };
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.detail(), "missing field `session_id`");
    }
}
