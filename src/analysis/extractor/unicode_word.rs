//! Unicode word feature extractor implementation.
//!
//! This module provides a feature extractor that splits text using Unicode
//! word boundary rules (UAX #29). It handles international text properly and
//! filters out non-word segments like punctuation and whitespace.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::extractor::FeatureExtractor;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A feature extractor that splits text on Unicode word boundaries.
///
/// Segmentation follows the Unicode Text Segmentation algorithm (UAX #29);
/// only segments containing at least one alphanumeric character are kept, and
/// kept segments are lower-cased. Compared to the default `\w+` strategy this
/// respects boundaries like `can't` (one word) at the cost of a heavier
/// dependency.
///
/// # Examples
///
/// ```
/// use augur::analysis::extractor::{FeatureExtractor, UnicodeWordExtractor};
///
/// let extractor = UnicodeWordExtractor::new();
/// let tokens: Vec<_> = extractor.extract("Can't stop, won't stop").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["can't", "stop", "won't", "stop"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordExtractor;

impl UnicodeWordExtractor {
    /// Create a new Unicode word extractor.
    pub fn new() -> Self {
        UnicodeWordExtractor
    }
}

impl FeatureExtractor for UnicodeWordExtractor {
    fn extract(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(|c| c.is_alphanumeric()))
            .enumerate()
            .map(|(position, (start_offset, word))| {
                Token::with_offsets(
                    word.to_lowercase(),
                    position,
                    start_offset,
                    start_offset + word.len(),
                )
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_word_extractor() {
        let extractor = UnicodeWordExtractor::new();
        let tokens: Vec<Token> = extractor.extract("Hello, world!").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[0].position, 0);
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].position, 1);
    }

    #[test]
    fn test_unicode_word_extractor_contractions() {
        let extractor = UnicodeWordExtractor::new();
        let tokens: Vec<Token> = extractor.extract("can't won't").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "can't");
        assert_eq!(tokens[1].text, "won't");
    }

    #[test]
    fn test_unicode_word_extractor_offsets() {
        let extractor = UnicodeWordExtractor::new();
        let tokens: Vec<Token> = extractor.extract("café résumé").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "café");
        assert_eq!(tokens[0].start_offset, 0);
        // "café" is 5 bytes in UTF-8
        assert_eq!(tokens[0].end_offset, 5);
        assert_eq!(tokens[1].text, "résumé");
        assert_eq!(tokens[1].start_offset, 6);
    }

    #[test]
    fn test_extractor_name() {
        assert_eq!(UnicodeWordExtractor::new().name(), "unicode_word");
    }
}
