use axum::{
    Json,
    response::{IntoResponse, Response},
};
use cda_portal::CoordinationError;
use http::StatusCode;
use serde_json::json;

/// JSON error response: `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn not_authenticated() -> Self {
        Self::new(StatusCode::UNAUTHORIZED, "Not authenticated")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Helper trait for converting errors to a standard response error format
pub trait IntoResponseError<T> {
    fn into_response_error(self) -> Result<T, ApiError>;
}

impl<T> IntoResponseError<T> for Result<T, CoordinationError> {
    fn into_response_error(self) -> Result<T, ApiError> {
        self.map_err(|e| match e {
            CoordinationError::MissingCredentials => {
                ApiError::new(StatusCode::BAD_REQUEST, e.to_string())
            }
            CoordinationError::InvalidCredentials => {
                ApiError::new(StatusCode::UNAUTHORIZED, e.to_string())
            }
            CoordinationError::Unauthorized => ApiError::new(StatusCode::FORBIDDEN, "Forbidden"),
            _ => {
                tracing::error!(error = %e, "Request failed");
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        })
    }
}

impl<T> IntoResponseError<T> for http::Result<T> {
    fn into_response_error(self) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
    }
}
