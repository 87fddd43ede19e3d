//! Word-run feature extractor, the default strategy.

use super::FeatureExtractor;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{AugurError, Result};
use regex::Regex;

/// A feature extractor that emits lower-cased maximal runs of word characters.
///
/// This is the default strategy (registered as `"default"`). Word characters
/// are letters, digits, and underscore (`\w`); each maximal run becomes one
/// unigram token, in order of appearance, repeats preserved. The match text is
/// lower-cased after matching, so token offsets index the original input; for
/// `\w+` runs the result is identical to lower-casing the whole input first.
///
/// # Examples
///
/// ```
/// use augur::analysis::extractor::{FeatureExtractor, WordExtractor};
///
/// let extractor = WordExtractor::new().unwrap();
/// let tokens: Vec<_> = extractor.extract("Hello, World! 123").unwrap()
///     .map(|t| t.text)
///     .collect();
/// assert_eq!(tokens, vec!["hello", "world", "123"]);
/// ```
#[derive(Clone, Debug)]
pub struct WordExtractor {
    /// The regex matching one run of word characters
    pattern: Regex,
}

impl WordExtractor {
    /// Create a new word extractor.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(r"\w+")
            .map_err(|e| AugurError::analysis(format!("Invalid word pattern: {e}")))?;

        Ok(WordExtractor { pattern })
    }
}

impl Default for WordExtractor {
    fn default() -> Self {
        Self::new().expect("Default word pattern should be valid")
    }
}

impl FeatureExtractor for WordExtractor {
    fn extract(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .enumerate()
            .map(|(position, mat)| {
                Token::with_offsets(mat.as_str().to_lowercase(), position, mat.start(), mat.end())
            })
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "default"
    }
}
