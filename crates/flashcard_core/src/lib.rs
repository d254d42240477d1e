pub mod domain;
pub mod generation;
pub mod parser;
pub mod ports;
pub mod prompt;

pub use domain::{Flashcard, Topic};
pub use generation::{FlashcardGenerator, GenerationFailure};
pub use parser::parse_flashcards;
pub use ports::{PortError, PortResult, TextGenerationService};
pub use prompt::build_prompt;
