//! Word n-gram feature extractor implementation.

use super::FeatureExtractor;
use super::word::WordExtractor;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{AugurError, Result};

/// A feature extractor that generates word-level n-grams.
///
/// Words are the same lower-cased `\w+` runs the default strategy produces;
/// each n-gram joins `n` consecutive words with a single space. Word n-grams
/// capture local word order that unigram features discard ("not good" vs
/// "good").
///
/// # Examples
///
/// ```
/// use augur::analysis::extractor::{FeatureExtractor, NgramExtractor};
///
/// let extractor = NgramExtractor::bigram();
/// let tokens: Vec<_> = extractor.extract("The quick brown fox").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["the quick", "quick brown", "brown fox"]);
/// ```
#[derive(Clone, Debug)]
pub struct NgramExtractor {
    /// Extracts the underlying word runs
    words: WordExtractor,
    /// Minimum n-gram size
    min_gram: usize,
    /// Maximum n-gram size
    max_gram: usize,
}

impl NgramExtractor {
    /// Create a new word n-gram extractor.
    ///
    /// # Arguments
    ///
    /// * `min_gram` - Minimum n-gram size (must be >= 1)
    /// * `max_gram` - Maximum n-gram size (must be >= min_gram)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `min_gram` is 0
    /// - `max_gram` is less than `min_gram`
    pub fn new(min_gram: usize, max_gram: usize) -> Result<Self> {
        if min_gram == 0 {
            return Err(AugurError::analysis(
                "min_gram must be at least 1".to_string(),
            ));
        }
        if max_gram < min_gram {
            return Err(AugurError::analysis(format!(
                "max_gram ({max_gram}) must be >= min_gram ({min_gram})"
            )));
        }
        Ok(Self {
            words: WordExtractor::default(),
            min_gram,
            max_gram,
        })
    }

    /// Create a word bigram extractor (n=2).
    pub fn bigram() -> Self {
        Self {
            words: WordExtractor::default(),
            min_gram: 2,
            max_gram: 2,
        }
    }

    /// Create a word trigram extractor (n=3).
    pub fn trigram() -> Self {
        Self {
            words: WordExtractor::default(),
            min_gram: 3,
            max_gram: 3,
        }
    }
}

impl FeatureExtractor for NgramExtractor {
    fn extract(&self, text: &str) -> Result<TokenStream> {
        let words: Vec<Token> = self.words.extract(text)?.collect();
        let mut tokens = Vec::new();
        let mut token_position = 0;

        for start in 0..words.len() {
            for gram_size in self.min_gram..=self.max_gram {
                let end = start + gram_size;
                if end > words.len() {
                    break;
                }

                let ngram = words[start..end]
                    .iter()
                    .map(|t| t.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");

                tokens.push(Token::with_offsets(
                    ngram,
                    token_position,
                    words[start].start_offset,
                    words[end - 1].end_offset,
                ));
                token_position += 1;
            }
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}
