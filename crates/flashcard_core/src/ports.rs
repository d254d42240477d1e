//! crates/flashcard_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! The core only knows about text generation through `TextGenerationService`;
//! concrete providers live in the `api` service as adapters.

use async_trait::async_trait;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g. HTTP, SDKs).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The provider could not be reached, or did not answer in time.
    #[error("Service unavailable: {0}")]
    Unavailable(String),
    /// The provider rejected our credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Obtains a single, non-streamed text completion for `prompt`.
    ///
    /// Implementations must return an error rather than an empty string when
    /// the provider produced no text.
    async fn generate(&self, prompt: &str) -> PortResult<String>;

    /// Short provider name, used for logging and the health endpoint.
    fn provider_name(&self) -> &'static str;
}
