//! API error responses

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use simplepedia_common::Error;
use tracing::warn;

/// Errors surfaced to HTTP clients as `{"error": "..."}`
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Core(#[from] Error),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection.body_text())
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Core(Error::ArticleNotFound(_)) | ApiError::UnknownRoute(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::Core(Error::EmptyTitle)
            | ApiError::Core(Error::InvalidInput(_))
            | ApiError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            ApiError::Core(Error::ButtonDisabled(_)) => StatusCode::CONFLICT,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!("Request rejected ({}): {}", status, self);

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
