//! crates/flashcard_core/src/generation.rs
//!
//! The flashcard pipeline: prompt, generate, parse.

use crate::domain::{Flashcard, Topic};
use crate::parser::parse_flashcards;
use crate::ports::{PortError, TextGenerationService};
use crate::prompt::build_prompt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Why a generation run produced no flashcards.
#[derive(Debug, thiserror::Error)]
pub enum GenerationFailure {
    /// The provider could not be reached or did not answer within the wait bound.
    #[error("Text generation provider is unavailable: {0}")]
    ProviderUnavailable(String),
    /// The provider answered with an error, or with no text at all.
    #[error("Text generation provider failed: {0}")]
    ProviderError(String),
    /// The provider's reply contained no usable lines.
    #[error("No flashcards could be generated for this topic")]
    EmptyResult,
}

impl From<PortError> for GenerationFailure {
    fn from(err: PortError) -> Self {
        match err {
            PortError::Unavailable(msg) => Self::ProviderUnavailable(msg),
            PortError::Unauthorized(msg) => Self::ProviderError(format!("unauthorized: {msg}")),
            PortError::Unexpected(msg) => Self::ProviderError(msg),
        }
    }
}

/// Runs one topic through the Prompt Builder, the generation port and the
/// Response Parser. Holds no per-request state, so one instance serves every request.
#[derive(Clone)]
pub struct FlashcardGenerator {
    service: Arc<dyn TextGenerationService>,
    timeout: Duration,
}

impl FlashcardGenerator {
    pub fn new(service: Arc<dyn TextGenerationService>, timeout: Duration) -> Self {
        Self { service, timeout }
    }

    pub fn provider_name(&self) -> &'static str {
        self.service.provider_name()
    }

    /// Generates the flashcard set for `topic`.
    ///
    /// Never returns an empty set: a reply without any non-blank line is
    /// reported as `GenerationFailure::EmptyResult`.
    pub async fn generate(&self, topic: &Topic) -> Result<Vec<Flashcard>, GenerationFailure> {
        let prompt = build_prompt(topic);
        debug!(%topic, %prompt, "Built generation prompt");

        let raw = match tokio::time::timeout(self.timeout, self.service.generate(&prompt)).await {
            Ok(result) => result?,
            Err(_) => {
                warn!(
                    provider = self.provider_name(),
                    timeout_secs = self.timeout.as_secs_f64(),
                    "Provider did not answer in time"
                );
                return Err(GenerationFailure::ProviderUnavailable(format!(
                    "no reply within {:?}",
                    self.timeout
                )));
            }
        };
        if raw.is_empty() {
            return Err(GenerationFailure::ProviderError(
                "provider returned no text".to_string(),
            ));
        }
        debug!(%raw, "Received raw completion");

        let flashcards = parse_flashcards(&raw);
        if flashcards.is_empty() {
            return Err(GenerationFailure::EmptyResult);
        }
        info!(count = flashcards.len(), "Parsed flashcards");
        Ok(flashcards)
    }
}
