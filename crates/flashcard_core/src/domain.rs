//! crates/flashcard_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any web framework or serialization format.

use std::fmt;

/// The user-supplied subject used to seed flashcard generation.
///
/// A `Topic` is never blank. Its text is kept exactly as the user typed it,
/// surrounding whitespace included, because the prompt interpolates it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    /// Returns `None` when the input is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single generated vocabulary item.
///
/// `id` is usually a small number rendered as text ("1".."5") but it is taken
/// from the model's reply as-is and never validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub id: String,
    pub word: String,
}

impl Flashcard {
    pub fn new(id: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            word: word.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_topics_are_rejected() {
        assert_eq!(Topic::new(""), None);
        assert_eq!(Topic::new("   \t\n"), None);
    }

    #[test]
    fn topic_text_is_kept_verbatim() {
        let topic = Topic::new("  ocean animals ").unwrap();
        assert_eq!(topic.as_str(), "  ocean animals ");
        assert_eq!(topic.to_string(), "  ocean animals ");
    }
}
