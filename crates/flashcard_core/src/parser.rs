//! crates/flashcard_core/src/parser.rs
//!
//! Turns the provider's raw reply into an ordered list of flashcards.

use crate::domain::Flashcard;

/// Parses a raw completion into flashcards, one per non-blank line.
///
/// Each kept line is split on its first `:` into a trimmed id and a trimmed
/// word; anything after the first colon stays in the word. A line without a
/// colon becomes a card whose id is its 1-based position among the kept lines
/// and whose word is the whole trimmed line. Order follows the input.
pub fn parse_flashcards(raw: &str) -> Vec<Flashcard> {
    raw.split(['\n', '\r'])
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(index, line)| parse_line(index + 1, line))
        .collect()
}

fn parse_line(position: usize, line: &str) -> Flashcard {
    match line.split_once(':') {
        Some((id, word)) => Flashcard::new(id.trim(), word.trim()),
        None => Flashcard::new(position.to_string(), line.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(pairs: &[(&str, &str)]) -> Vec<Flashcard> {
        pairs.iter().map(|(id, word)| Flashcard::new(*id, *word)).collect()
    }

    #[test]
    fn five_well_formed_lines_yield_five_cards_in_order() {
        let raw = "1:apple\n2:banana\n3:cherry\n4:grape\n5:mango";
        assert_eq!(
            parse_flashcards(raw),
            cards(&[
                ("1", "apple"),
                ("2", "banana"),
                ("3", "cherry"),
                ("4", "grape"),
                ("5", "mango"),
            ])
        );
    }

    #[test]
    fn ids_and_words_are_trimmed() {
        assert_eq!(
            parse_flashcards("  1 :  red  \n2:\tblue\t"),
            cards(&[("1", "red"), ("2", "blue")])
        );
    }

    #[test]
    fn only_the_first_colon_splits() {
        assert_eq!(parse_flashcards("1: red:blue"), cards(&[("1", "red:blue")]));
        assert_eq!(
            parse_flashcards("2:time: 10:30"),
            cards(&[("2", "time: 10:30")])
        );
    }

    #[test]
    fn line_without_colon_falls_back_to_its_position() {
        let raw = "1:one\n2:two\nhello world\n4:four";
        assert_eq!(
            parse_flashcards(raw),
            cards(&[
                ("1", "one"),
                ("2", "two"),
                ("3", "hello world"),
                ("4", "four"),
            ])
        );
    }

    #[test]
    fn fallback_position_counts_kept_lines_only() {
        let raw = "\n\n   \nfirst\n\n  second  \n";
        assert_eq!(
            parse_flashcards(raw),
            cards(&[("1", "first"), ("2", "second")])
        );
    }

    #[test]
    fn blank_input_yields_no_cards() {
        assert!(parse_flashcards("").is_empty());
        assert!(parse_flashcards("  \n\t\n \r\n").is_empty());
    }

    #[test]
    fn crlf_line_endings_are_handled() {
        assert_eq!(
            parse_flashcards("1:cat\r\n2:dog\r\n"),
            cards(&[("1", "cat"), ("2", "dog")])
        );
    }

    #[test]
    fn ids_are_not_validated_or_deduplicated() {
        let raw = "one:alpha\n1:beta\n1:beta\n:empty id\n7:";
        assert_eq!(
            parse_flashcards(raw),
            cards(&[
                ("one", "alpha"),
                ("1", "beta"),
                ("1", "beta"),
                ("", "empty id"),
                ("7", ""),
            ])
        );
    }

    #[test]
    fn card_count_matches_non_blank_line_count() {
        let raw = "1:a\n\nno colon here\n  \n3:c\nx";
        let non_blank = raw.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(parse_flashcards(raw).len(), non_blank);
    }

    #[test]
    fn reparsing_is_stable() {
        let raw = "2:b\n1:a\nloose\n5:e";
        assert_eq!(parse_flashcards(raw), parse_flashcards(raw));
    }
}
