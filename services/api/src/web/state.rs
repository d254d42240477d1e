//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use flashcard_core::FlashcardGenerator;
use std::sync::Arc;

//=========================================================================================
// AppState (Shared Across All Requests)
//=========================================================================================

/// The shared application state, created once at startup and passed to all handlers.
/// Nothing in it is mutated after startup; requests never share mutable state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: FlashcardGenerator,
}

impl AppState {
    pub fn new(config: Arc<Config>, generator: FlashcardGenerator) -> Self {
        Self { config, generator }
    }
}
