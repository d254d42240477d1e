//! crates/flashcard_core/src/prompt.rs
//!
//! Builds the instruction sent to the text generation provider.

use crate::domain::Topic;

/// How many flashcards the prompt asks for. Nothing downstream enforces it.
pub const REQUESTED_CARDS: usize = 5;

/// Formats the generation prompt for `topic`.
///
/// The topic is inserted as-is, with no escaping. The model is asked to answer
/// with `N:word` lines for N in `1..=REQUESTED_CARDS`.
pub fn build_prompt(topic: &Topic) -> String {
    let mut prompt = format!(
        "Create set of words for {} flashcards from this topic: {}\nFormat as:\n",
        REQUESTED_CARDS,
        topic.as_str()
    );
    for n in 1..=REQUESTED_CARDS {
        prompt.push_str(&format!("{n}:word{n}\n"));
    }
    prompt
}
