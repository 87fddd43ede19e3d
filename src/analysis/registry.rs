//! Registry mapping strategy names to feature-extractor factories.
//!
//! The registry replaces subclass lookup: each strategy is registered under a
//! name, and engines are constructed by resolving a name to a factory at
//! construction time. Registration is expected at initialization; the registry
//! is internally synchronized so one instance can serve many construction
//! sites.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::analysis::extractor::{
    FeatureExtractor, NgramExtractor, UnicodeWordExtractor, WhitespaceExtractor, WordExtractor,
};
use crate::error::{AugurError, Result};

/// Factory closure producing a fresh extractor instance.
pub type ExtractorFactory = Arc<dyn Fn() -> Result<Arc<dyn FeatureExtractor>> + Send + Sync>;

/// A registry of named feature-extraction strategies.
///
/// # Examples
///
/// ```
/// use augur::analysis::registry::ExtractorRegistry;
///
/// let registry = ExtractorRegistry::with_builtins();
/// assert!(registry.contains("default"));
///
/// let extractor = registry.create("whitespace").unwrap();
/// assert_eq!(extractor.name(), "whitespace");
///
/// assert!(registry.create("porter2").is_err());
/// ```
pub struct ExtractorRegistry {
    factories: RwLock<HashMap<String, ExtractorFactory>>,
}

impl ExtractorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        ExtractorRegistry {
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry with the built-in strategies registered:
    /// `"default"` (word runs), `"whitespace"`, `"ngram"` (word bigrams),
    /// and `"unicode_word"`.
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register("default", || Ok(Arc::new(WordExtractor::new()?)));
        registry.register("whitespace", || Ok(Arc::new(WhitespaceExtractor::new())));
        registry.register("ngram", || Ok(Arc::new(NgramExtractor::bigram())));
        registry.register("unicode_word", || Ok(Arc::new(UnicodeWordExtractor::new())));
        registry
    }

    /// Register a strategy under the given name, replacing any previous entry.
    pub fn register<N, F>(&self, name: N, factory: F)
    where
        N: Into<String>,
        F: Fn() -> Result<Arc<dyn FeatureExtractor>> + Send + Sync + 'static,
    {
        self.factories.write().insert(name.into(), Arc::new(factory));
    }

    /// Create an extractor for the named strategy.
    ///
    /// Fails with an unknown-engine error when the name is not registered.
    pub fn create(&self, name: &str) -> Result<Arc<dyn FeatureExtractor>> {
        let factory = self.factories.read().get(name).cloned();
        let factory = factory.ok_or_else(|| AugurError::unknown_engine(name))?;
        factory()
    }

    /// Check whether a strategy name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.read().contains_key(name)
    }

    /// Get the registered strategy names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the number of registered strategies.
    pub fn len(&self) -> usize {
        self.factories.read().len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.factories.read().is_empty()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for ExtractorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractorRegistry")
            .field("strategies", &self.names())
            .finish()
    }
}
