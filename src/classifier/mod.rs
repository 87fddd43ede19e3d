//! Naive Bayes classification built on pluggable feature extraction.
//!
//! This module provides supervised text classification: engines learn
//! token-subject frequency statistics from labeled examples and score new
//! inputs with add-one (Laplace) smoothed posteriors.
//!
//! # Architecture
//!
//! - `BayesEngine`: Trainable engine owning the statistics
//! - `EngineFactory`: Constructs engines, resolving strategy names
//! - `EngineConfig`: Names the default feature-extraction strategy
//! - `TrainingExample` / `Prediction` / `SubjectStats`: Data types
//! - `load_training_data`: JSON training-data loader
//!
//! # Example
//!
//! ```
//! use augur::classifier::EngineFactory;
//!
//! # fn main() -> augur::error::Result<()> {
//! let factory = EngineFactory::new();
//! let mut engine = factory.create(None)?;
//!
//! engine
//!     .train("positive", &["this is a happy string", "what a great day!"])?
//!     .train("negative", &["i hate doing housework", "this movie is awful"])?;
//!
//! let predictions = engine.classify("That book was awful")?;
//! assert_eq!(predictions[0].subject, "negative");
//! # Ok(())
//! # }
//! ```

mod config;
mod core;
mod engine;
mod factory;
mod types;

// Public exports
pub use config::EngineConfig;
pub use core::{load_training_data, new_engine};
pub use engine::BayesEngine;
pub use factory::EngineFactory;
pub use types::{Prediction, SubjectStats, TrainingExample};
