//! Text analysis module for Augur.
//!
//! This module provides the feature-extraction functionality the classifier
//! builds on: token types, extraction strategies, and the strategy registry.

pub mod extractor;
pub mod registry;
pub mod token;

// Re-export commonly used types
pub use extractor::*;
pub use registry::*;
pub use token::*;
