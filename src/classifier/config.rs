//! Configuration for engine construction.

use serde::{Deserialize, Serialize};

/// Configuration for constructing classification engines.
///
/// `default_strategy` names the feature-extraction strategy new engines bind
/// to when no explicit name is given. The shipped default is `"default"`,
/// the word-run strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Strategy name used when engine construction receives no explicit name.
    pub default_strategy: String,
}

impl EngineConfig {
    /// Create a config with the given default strategy name.
    pub fn new<S: Into<String>>(default_strategy: S) -> Self {
        EngineConfig {
            default_strategy: default_strategy.into(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            default_strategy: "default".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.default_strategy, "default");
    }

    #[test]
    fn test_config_from_json() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"default_strategy": "ngram"}"#).unwrap();
        assert_eq!(config.default_strategy, "ngram");
    }
}
