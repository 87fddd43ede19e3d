//! Feature-extraction strategies for classification.
//!
//! A feature extractor turns an input string into an ordered stream of
//! tokens. Extraction is pure and deterministic: the same input always yields
//! the same tokens, the empty string yields an empty stream, and repeated
//! words in the input yield repeated tokens (training counts occurrences,
//! not distinct tokens).

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for feature extractors that convert text into feature tokens.
pub trait FeatureExtractor: Send + Sync + std::fmt::Debug {
    /// Extract the feature tokens for the given text.
    fn extract(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this extraction strategy (for registry lookup and debugging).
    fn name(&self) -> &'static str;
}

// Individual extractor modules
pub mod ngram;
pub mod unicode_word;
pub mod whitespace;
pub mod word;

// Re-export all extractors for convenient access
pub use ngram::NgramExtractor;
pub use unicode_word::UnicodeWordExtractor;
pub use whitespace::WhitespaceExtractor;
pub use word::WordExtractor;
