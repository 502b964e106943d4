//! Sentence segmentation.
//!
//! The builder consumes segmentation through [`SentenceDetector`]. A simple
//! punctuation-based detector is provided for callers without a trained
//! model.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([.!?]+["')\]]*)(?:\s+|$)"#).expect("sentence boundary pattern is valid")
});

/// Splits text into sentences.
pub trait SentenceDetector {
    /// Byte offsets (on char boundaries) where sentences end, in order.
    fn find_sentence_end_positions(&self, text: &str) -> Result<Vec<usize>>;

    /// Cut `text` at `ends` and keep the trimmed pieces that have at least
    /// `min_length` characters.
    fn get_sentences(&self, ends: &[usize], text: &str, min_length: usize) -> Result<Vec<String>> {
        let mut sentences = Vec::with_capacity(ends.len());
        let mut start = 0;

        for &end in ends {
            if end < start || end > text.len() || !text.is_char_boundary(end) {
                return Err(Error::Segmentation(format!(
                    "invalid sentence end {} (previous {}, text length {})",
                    end,
                    start,
                    text.len()
                )));
            }
            let sentence = text[start..end].trim();
            if sentence.chars().count() >= min_length {
                sentences.push(sentence.to_string());
            }
            start = end;
        }

        Ok(sentences)
    }
}

/// Punctuation-based detector.
///
/// A sentence ends at `.`, `!` or `?` (plus closing quotes or brackets)
/// followed by whitespace or the end of the text, unless the next word
/// starts lowercase. Trailing text without terminal punctuation forms a
/// final sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedSentenceDetector;

impl RuleBasedSentenceDetector {
    /// Create a new detector.
    pub fn new() -> Self {
        Self
    }
}

impl SentenceDetector for RuleBasedSentenceDetector {
    fn find_sentence_end_positions(&self, text: &str) -> Result<Vec<usize>> {
        let mut ends = Vec::new();

        for caps in SENTENCE_END.captures_iter(text) {
            let (Some(whole), Some(punct)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let continues_lowercase = text[whole.end()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_lowercase());
            if !continues_lowercase {
                ends.push(punct.end());
            }
        }

        let last = ends.last().copied().unwrap_or(0);
        if !text[last..].trim().is_empty() {
            ends.push(text.len());
        }

        Ok(ends)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str, min_length: usize) -> Vec<String> {
        let detector = RuleBasedSentenceDetector::new();
        let ends = detector.find_sentence_end_positions(text).unwrap();
        detector.get_sentences(&ends, text, min_length).unwrap()
    }

    #[test]
    fn test_basic_split() {
        let sentences = split("First one here. Second one! Third one? ", 0);
        assert_eq!(sentences, ["First one here.", "Second one!", "Third one?"]);
    }

    #[test]
    fn test_trailing_text_without_punctuation() {
        let sentences = split("A complete sentence. And a fragment", 0);
        assert_eq!(sentences, ["A complete sentence.", "And a fragment"]);
    }

    #[test]
    fn test_lowercase_continuation_is_not_a_boundary() {
        let sentences = split("Cells were counted, e.g. by flow cytometry. Done here.", 0);
        assert_eq!(
            sentences,
            ["Cells were counted, e.g. by flow cytometry.", "Done here."]
        );
    }

    #[test]
    fn test_closing_quote_belongs_to_sentence() {
        let sentences = split("He said \"stop.\" Then left.", 0);
        assert_eq!(sentences, ["He said \"stop.\"", "Then left."]);
    }

    #[test]
    fn test_min_length_filter() {
        let sentences = split("Ok. This one is long enough.", 5);
        assert_eq!(sentences, ["This one is long enough."]);
    }

    #[test]
    fn test_empty_text() {
        assert!(split("", 0).is_empty());
        assert!(split("   ", 0).is_empty());
    }

    #[test]
    fn test_invalid_offsets() {
        let detector = RuleBasedSentenceDetector::new();
        let err = detector.get_sentences(&[50], "short", 0).unwrap_err();
        assert!(matches!(err, Error::Segmentation(_)));

        let err = detector.get_sentences(&[3, 1], "short", 0).unwrap_err();
        assert!(matches!(err, Error::Segmentation(_)));
    }

    #[test]
    fn test_multibyte_text() {
        let sentences = split("Über die Zellen. Größe variiert!", 0);
        assert_eq!(sentences, ["Über die Zellen.", "Größe variiert!"]);
    }
}
