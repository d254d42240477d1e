//! services/api/src/adapters/stub_llm.rs
//!
//! A `TextGenerationService` that answers from memory. Used when the service runs
//! with `GENERATION_PROVIDER=stub` and by the HTTP tests.

use async_trait::async_trait;
use flashcard_core::ports::{PortError, PortResult, TextGenerationService};
use std::sync::atomic::{AtomicUsize, Ordering};

const DEFAULT_REPLY: &str = "1:alpha\n2:bravo\n3:charlie\n4:delta\n5:echo";

/// Returns a fixed reply (or a fixed outage) and counts how often it was asked.
pub struct StubGenerationAdapter {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl StubGenerationAdapter {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A stub whose every call fails as if the provider were down.
    pub fn unreachable() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for StubGenerationAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY)
    }
}

#[async_trait]
impl TextGenerationService for StubGenerationAdapter {
    async fn generate(&self, _prompt: &str) -> PortResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .ok_or_else(|| PortError::Unavailable("stub provider is unreachable".to_string()))
    }

    fn provider_name(&self) -> &'static str {
        "stub"
    }
}
