use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use greengrocer_core::CoreError;

use crate::response::Envelope;

#[derive(Debug)]
pub enum AppError {
    InvalidArgument(String),
    NotFound(String),
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidArgument(_) => AppError::InvalidArgument(err.to_string()),
            CoreError::NotFound(_) => AppError::NotFound(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        (status, Json(Envelope::rejected(message))).into_response()
    }
}
