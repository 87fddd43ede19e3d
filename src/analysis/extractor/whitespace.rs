//! Whitespace feature extractor implementation.

use super::FeatureExtractor;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A feature extractor that splits text on Unicode whitespace.
///
/// Tokens are lower-cased but otherwise kept verbatim, so punctuation stays
/// attached (`"awful!"` is one token). Useful when punctuation itself carries
/// signal; for word-level features prefer the default word extractor.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceExtractor;

impl WhitespaceExtractor {
    /// Create a new whitespace extractor.
    pub fn new() -> Self {
        WhitespaceExtractor
    }
}

impl FeatureExtractor for WhitespaceExtractor {
    fn extract(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut run_start: Option<usize> = None;

        // Scan for runs of non-whitespace, tracking byte offsets as we go so
        // repeated words keep their real offsets.
        for (idx, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(start) = run_start.take() {
                    tokens.push(Token::with_offsets(
                        text[start..idx].to_lowercase(),
                        position,
                        start,
                        idx,
                    ));
                    position += 1;
                }
            } else if run_start.is_none() {
                run_start = Some(idx);
            }
        }

        if let Some(start) = run_start {
            tokens.push(Token::with_offsets(
                text[start..].to_lowercase(),
                position,
                start,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_extractor() {
        let extractor = WhitespaceExtractor::new();
        let tokens: Vec<Token> = extractor.extract("Hello  world\ttest").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[2].text, "test");
    }

    #[test]
    fn test_whitespace_extractor_keeps_punctuation() {
        let extractor = WhitespaceExtractor::new();
        let tokens: Vec<Token> = extractor.extract("This movie is awful!").unwrap().collect();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[3].text, "awful!");
    }

    #[test]
    fn test_whitespace_extractor_offsets_for_repeats() {
        let extractor = WhitespaceExtractor::new();
        let tokens: Vec<Token> = extractor.extract("go go go").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[1].start_offset, 3);
        assert_eq!(tokens[2].start_offset, 6);
        assert_eq!(tokens[2].end_offset, 8);
    }

    #[test]
    fn test_whitespace_extractor_empty_and_blank() {
        let extractor = WhitespaceExtractor::new();

        let tokens: Vec<Token> = extractor.extract("").unwrap().collect();
        assert_eq!(tokens.len(), 0);

        let tokens: Vec<Token> = extractor.extract("   \n\t").unwrap().collect();
        assert_eq!(tokens.len(), 0);
    }

    #[test]
    fn test_extractor_name() {
        assert_eq!(WhitespaceExtractor::new().name(), "whitespace");
    }
}
