use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use socialmedia_core::domain::common::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
            // Every core failure is client-correctable here, the invalid-argument
            // kind included; no 5xx distinction is drawn for translated store errors.
            ApiError::Core(e) => (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
            ApiError::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response(),
        }
    }
}
