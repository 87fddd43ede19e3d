//! Common types for classification.

use serde::{Deserialize, Serialize};

/// Training sample pairing an example text with its subject label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    /// Example text.
    pub text: String,
    /// Subject label.
    pub subject: String,
}

/// A single classification result: a subject and its posterior probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Subject label.
    pub subject: String,
    /// Normalized probability in `[0, 1]` (barring the degenerate
    /// zero-score substitution, where all probabilities stay at their
    /// tiny or zero values).
    pub probability: f64,
}

/// Accumulated training statistics for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectStats {
    /// Subject label.
    pub name: String,
    /// Number of training examples seen for this subject.
    pub count_samples: usize,
    /// Total token occurrences across this subject's training examples.
    pub count_tokens: usize,
}

impl SubjectStats {
    /// Create stats for a freshly registered subject, all counters zero.
    pub fn new<S: Into<String>>(name: S) -> Self {
        SubjectStats {
            name: name.into(),
            count_samples: 0,
            count_tokens: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_stats_start_at_zero() {
        let stats = SubjectStats::new("spam");
        assert_eq!(stats.name, "spam");
        assert_eq!(stats.count_samples, 0);
        assert_eq!(stats.count_tokens, 0);
    }

    #[test]
    fn test_training_example_json() {
        let json = r#"{"text": "this is a happy string", "subject": "positive"}"#;
        let sample: TrainingExample = serde_json::from_str(json).unwrap();

        assert_eq!(sample.text, "this is a happy string");
        assert_eq!(sample.subject, "positive");
    }
}
