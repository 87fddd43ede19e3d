//! Factory for creating classification engines.

use log::debug;

use crate::analysis::registry::ExtractorRegistry;
use crate::classifier::config::EngineConfig;
use crate::classifier::engine::BayesEngine;
use crate::error::Result;

/// Factory for creating [`BayesEngine`] instances.
///
/// The factory resolves an optional strategy name through its configuration,
/// looks the name up in its extractor registry, and returns a fully
/// initialized engine. Construction never partially succeeds: an unknown
/// name (explicit or configured) fails before any engine state exists.
///
/// # Examples
///
/// ```
/// use augur::classifier::EngineFactory;
///
/// # fn main() -> augur::error::Result<()> {
/// let factory = EngineFactory::new();
///
/// // Resolves through the configured default strategy.
/// let engine = factory.create(None)?;
/// assert_eq!(engine.extractor().name(), "default");
///
/// // Explicit strategy name.
/// let engine = factory.create(Some("whitespace"))?;
/// assert_eq!(engine.extractor().name(), "whitespace");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EngineFactory {
    registry: ExtractorRegistry,
    config: EngineConfig,
}

impl EngineFactory {
    /// Create a factory with the built-in strategies and default configuration.
    pub fn new() -> Self {
        EngineFactory {
            registry: ExtractorRegistry::with_builtins(),
            config: EngineConfig::default(),
        }
    }

    /// Create a factory with the built-in strategies and the given configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        EngineFactory {
            registry: ExtractorRegistry::with_builtins(),
            config,
        }
    }

    /// Get the extractor registry, e.g. to register custom strategies.
    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// Get the factory configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Create an engine bound to the named strategy.
    ///
    /// `None` resolves to the configured `default_strategy`. Fails with an
    /// unknown-engine error when the resolved name is not registered.
    pub fn create(&self, strategy: Option<&str>) -> Result<BayesEngine> {
        let name = strategy.unwrap_or(&self.config.default_strategy);
        let extractor = self.registry.create(name)?;
        debug!("created classification engine with strategy '{name}'");
        Ok(BayesEngine::new(extractor))
    }
}

impl Default for EngineFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_with_default_strategy() {
        let factory = EngineFactory::new();
        let engine = factory.create(None).unwrap();

        assert_eq!(engine.extractor().name(), "default");
        assert!(!engine.is_trained());
    }

    #[test]
    fn test_create_with_explicit_strategy() {
        let factory = EngineFactory::new();
        let engine = factory.create(Some("ngram")).unwrap();

        assert_eq!(engine.extractor().name(), "ngram");
    }

    #[test]
    fn test_create_with_unknown_strategy() {
        let factory = EngineFactory::new();
        let err = factory.create(Some("stemmer")).unwrap_err();

        assert_eq!(err.to_string(), "Unknown classification engine: stemmer");
    }

    #[test]
    fn test_configured_default_strategy() {
        let factory = EngineFactory::with_config(EngineConfig::new("unicode_word"));
        let engine = factory.create(None).unwrap();

        assert_eq!(engine.extractor().name(), "unicode_word");
    }

    #[test]
    fn test_configured_default_can_be_unknown() {
        let factory = EngineFactory::with_config(EngineConfig::new("missing"));

        assert!(factory.create(None).is_err());
        // An explicit valid name still works.
        assert!(factory.create(Some("default")).is_ok());
    }
}
