//! services/api/src/error.rs
//!
//! Defines the error types for the API service: `ApiError` for startup and
//! other fatal failures, and `FlashcardError` for a single failed request.

use crate::config::ConfigError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use flashcard_core::GenerationFailure;
use serde::Serialize;
use utoipa::ToSchema;

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

/// Why a flashcard request failed.
#[derive(Debug, thiserror::Error)]
pub enum FlashcardError {
    #[error("Topic is required")]
    MissingTopic,

    #[error("Request body is too large")]
    PayloadTooLarge,

    #[error(transparent)]
    Generation(#[from] GenerationFailure),
}

impl FlashcardError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            FlashcardError::MissingTopic => StatusCode::BAD_REQUEST,
            FlashcardError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            FlashcardError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// The JSON body returned for every failed request.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for FlashcardError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
