//! # Augur
//!
//! A small, trainable naive Bayes text classifier for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Trainable on labeled example strings, chainable `train` calls
//! - Add-one (Laplace) smoothed probability scoring
//! - Pluggable feature-extraction strategies selected by name
//! - Predictions ranked most-likely-first

pub mod analysis;
pub mod classifier;
pub mod error;

pub mod prelude {
    pub use crate::analysis::extractor::{
        FeatureExtractor, NgramExtractor, UnicodeWordExtractor, WhitespaceExtractor, WordExtractor,
    };
    pub use crate::analysis::registry::ExtractorRegistry;
    pub use crate::analysis::token::{Token, TokenStream};
    pub use crate::classifier::{
        BayesEngine, EngineConfig, EngineFactory, Prediction, SubjectStats, TrainingExample,
        load_training_data, new_engine,
    };
    pub use crate::error::{AugurError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
