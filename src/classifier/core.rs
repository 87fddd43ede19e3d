//! Helper functions for creating and feeding classification engines.

use crate::classifier::engine::BayesEngine;
use crate::classifier::factory::EngineFactory;
use crate::classifier::types::TrainingExample;
use crate::error::Result;

/// Load training data from a JSON file.
///
/// The file holds an array of `{"text": ..., "subject": ...}` objects. This
/// loads training *inputs*; trained engine state itself is never persisted.
pub fn load_training_data(path: &str) -> Result<Vec<TrainingExample>> {
    let content = std::fs::read_to_string(path)?;
    let samples: Vec<TrainingExample> = serde_json::from_str(&content)?;
    Ok(samples)
}

/// Create a new engine with the named strategy, using a default factory.
///
/// `None` selects the default strategy. For custom registries or
/// configuration, build an [`EngineFactory`] instead.
pub fn new_engine(strategy: Option<&str>) -> Result<BayesEngine> {
    EngineFactory::new().create(strategy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_default() {
        let engine = new_engine(None).unwrap();
        assert_eq!(engine.extractor().name(), "default");
    }

    #[test]
    fn test_new_engine_unknown() {
        assert!(new_engine(Some("nonexistent")).is_err());
    }
}
