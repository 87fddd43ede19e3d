//! Integration tests for training data loading, factories, and custom strategies

use std::sync::Arc;

use augur::prelude::*;
use tempfile::TempDir;

#[test]
fn test_load_training_data_and_classify() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("train.json");
    std::fs::write(
        &path,
        r#"[
            {"text": "buy cheap pills now", "subject": "spam"},
            {"text": "win a free prize now", "subject": "spam"},
            {"text": "team lunch at noon", "subject": "ham"},
            {"text": "quarterly report attached", "subject": "ham"}
        ]"#,
    )
    .unwrap();

    let samples = load_training_data(path.to_str().unwrap())?;
    assert_eq!(samples.len(), 4);
    assert_eq!(samples[0].subject, "spam");

    let mut engine = new_engine(None)?;
    engine.train_samples(&samples)?;

    assert_eq!(engine.total_samples(), 4);
    assert_eq!(engine.subjects().len(), 2);

    let best = engine.classify_best("free pills now")?.unwrap();
    assert_eq!(best.subject, "spam");
    Ok(())
}

#[test]
fn test_load_training_data_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.json");

    let result = load_training_data(path.to_str().unwrap());
    assert!(matches!(result, Err(AugurError::Io(_))));
}

#[test]
fn test_load_training_data_malformed() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{not valid json").unwrap();

    let result = load_training_data(path.to_str().unwrap());
    assert!(matches!(result, Err(AugurError::Json(_))));
}

#[test]
fn test_factory_with_registered_custom_strategy() -> Result<()> {
    // Splits comma-separated fields, trimmed and lower-cased.
    #[derive(Debug)]
    struct CommaExtractor;

    impl FeatureExtractor for CommaExtractor {
        fn extract(&self, text: &str) -> Result<TokenStream> {
            let tokens: Vec<Token> = text
                .split(',')
                .map(|field| field.trim())
                .filter(|field| !field.is_empty())
                .enumerate()
                .map(|(position, field)| Token::new(field.to_lowercase(), position))
                .collect();
            Ok(Box::new(tokens.into_iter()))
        }

        fn name(&self) -> &'static str {
            "comma"
        }
    }

    let factory = EngineFactory::new();
    factory.registry().register("comma", || Ok(Arc::new(CommaExtractor)));

    let mut engine = factory.create(Some("comma"))?;
    engine
        .train("fruit", &["Apple, Banana, Cherry", "banana, mango"])?
        .train("vegetable", &["Carrot, Potato", "potato, leek, onion"])?;

    // "banana" only ever appears in fruit rows.
    assert_eq!(engine.token_count("banana", "fruit"), 2);
    let best = engine.classify_best("banana, cherry")?.unwrap();
    assert_eq!(best.subject, "fruit");
    Ok(())
}

#[test]
fn test_engine_config_from_host_json() -> Result<()> {
    let config: EngineConfig = serde_json::from_str(r#"{"default_strategy": "whitespace"}"#)?;
    let factory = EngineFactory::with_config(config);

    let engine = factory.create(None)?;
    assert_eq!(engine.extractor().name(), "whitespace");
    Ok(())
}

#[test]
fn test_predictions_export_as_json() -> Result<()> {
    let mut engine = new_engine(None)?;
    engine
        .train("positive", &["great wonderful happy"])?
        .train("negative", &["terrible awful sad"])?;

    let predictions = engine.classify("an awful day")?;
    let json = serde_json::to_string(&predictions)?;

    assert!(json.contains(r#""subject":"negative""#));
    assert!(json.contains(r#""probability":"#));
    Ok(())
}
