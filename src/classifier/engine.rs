//! Naive Bayes classification engine.

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use log::debug;

use crate::analysis::extractor::{FeatureExtractor, WordExtractor};
use crate::classifier::types::{Prediction, SubjectStats, TrainingExample};
use crate::error::Result;

/// A trainable naive Bayes text classification engine.
///
/// The engine accumulates token-subject frequency statistics from labeled
/// training examples and scores new inputs against every known subject.
/// One engine instance is bound to exactly one feature-extraction strategy
/// for its entire lifetime.
///
/// Training is additive only: counters are created on first sight and
/// incremented monotonically, never decremented or removed. After any
/// sequence of `train` calls, `total_samples` equals the sum of all subjects'
/// `count_samples`, and `total_tokens` equals the sum of all subjects'
/// `count_tokens`.
///
/// The engine performs no internal locking; callers sharing one instance
/// across threads must provide their own synchronization.
///
/// # Examples
///
/// ```
/// use augur::classifier::BayesEngine;
///
/// # fn main() -> augur::error::Result<()> {
/// let mut engine = BayesEngine::default();
/// engine
///     .train("positive", &["this is a happy string", "what a great day!"])?
///     .train("negative", &["i hate doing housework", "this movie is awful"])?;
///
/// let predictions = engine.classify("That book was awful")?;
/// assert_eq!(predictions[0].subject, "negative");
/// # Ok(())
/// # }
/// ```
pub struct BayesEngine {
    /// Feature-extraction strategy bound at construction.
    extractor: Arc<dyn FeatureExtractor>,
    /// Per-subject statistics, in subject insertion order.
    subjects: Vec<SubjectStats>,
    /// Subject name -> index into `subjects`.
    subject_ids: AHashMap<String, usize>,
    /// Token -> subject index -> occurrence count.
    token_counts: AHashMap<String, AHashMap<usize, usize>>,
    /// Count of all training examples across all subjects.
    total_samples: usize,
    /// Count of all token occurrences across all subjects.
    total_tokens: usize,
}

impl fmt::Debug for BayesEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BayesEngine")
            .field("extractor", &self.extractor.name())
            .field("subjects", &self.subjects.len())
            .field("vocabulary_size", &self.token_counts.len())
            .field("total_samples", &self.total_samples)
            .field("total_tokens", &self.total_tokens)
            .finish()
    }
}

impl BayesEngine {
    /// Create a new, untrained engine bound to the given extraction strategy.
    pub fn new(extractor: Arc<dyn FeatureExtractor>) -> Self {
        BayesEngine {
            extractor,
            subjects: Vec::new(),
            subject_ids: AHashMap::new(),
            token_counts: AHashMap::new(),
            total_samples: 0,
            total_tokens: 0,
        }
    }

    /// Train the engine with labeled examples for one subject.
    ///
    /// The subject is registered before the examples are examined, so an
    /// empty `examples` slice still seeds the subject: it will appear in
    /// classification output with whatever near-zero probability smoothing
    /// gives it. Every example increments `total_samples` and the subject's
    /// sample count; every extracted token occurrence (repeats counted
    /// individually) increments the token-subject count, the subject's token
    /// count, and `total_tokens`.
    ///
    /// Returns the engine itself so calls can be chained.
    pub fn train<S: AsRef<str>>(&mut self, subject: &str, examples: &[S]) -> Result<&mut Self> {
        let subject_id = self.subject_id_or_insert(subject);

        for example in examples {
            self.total_samples += 1;
            self.subjects[subject_id].count_samples += 1;

            for token in self.extractor.extract(example.as_ref())? {
                *self
                    .token_counts
                    .entry(token.text)
                    .or_default()
                    .entry(subject_id)
                    .or_insert(0) += 1;
                self.subjects[subject_id].count_tokens += 1;
                self.total_tokens += 1;
            }
        }

        Ok(self)
    }

    /// Train the engine from a batch of labeled samples.
    pub fn train_samples(&mut self, samples: &[TrainingExample]) -> Result<&mut Self> {
        for sample in samples {
            self.train(&sample.subject, &[sample.text.as_str()])?;
        }
        Ok(self)
    }

    /// Classify an input string against every known subject.
    ///
    /// Returns one [`Prediction`] per subject, sorted by probability
    /// descending; subjects with equal probability appear in an unspecified
    /// relative order. An engine with no training samples (including one
    /// whose subjects were all seeded with empty example lists) returns an
    /// empty vector.
    ///
    /// For each subject the score is `prior * likelihood`: the prior is the
    /// subject's share of training samples, and the likelihood multiplies one
    /// add-one smoothed factor `(count(token, subject) + 1) /
    /// (count_tokens(subject) + total_tokens)` per extracted token
    /// occurrence. Note the smoothing denominator adds the engine-wide
    /// `total_tokens`, a count of every token occurrence seen in training,
    /// where textbook Laplace smoothing would add the distinct vocabulary
    /// size. The deviation is deliberate and kept for compatibility; scores
    /// still normalize to a probability distribution.
    ///
    /// Scores are normalized by their sum. When every score underflows to
    /// exactly zero, the sum is substituted with 1 and the zero scores are
    /// returned as-is; this degenerate case is a policy, not an error, and is
    /// reported through `log::debug!`.
    pub fn classify(&self, input: &str) -> Result<Vec<Prediction>> {
        if self.total_samples == 0 {
            return Ok(Vec::new());
        }

        let tokens: Vec<String> = self.extractor.extract(input)?.map(|t| t.text).collect();

        let mut predictions = Vec::with_capacity(self.subjects.len());
        let mut total_score = 0.0;

        for (subject_id, stats) in self.subjects.iter().enumerate() {
            let prior = stats.count_samples as f64 / self.total_samples as f64;
            let denominator = (stats.count_tokens + self.total_tokens) as f64;

            let mut likelihood = 1.0;
            for token in &tokens {
                let count = self.token_count_by_id(token, subject_id);
                likelihood *= (count + 1) as f64 / denominator;
            }

            let score = prior * likelihood;
            total_score += score;
            predictions.push(Prediction {
                subject: stats.name.clone(),
                probability: score,
            });
        }

        if total_score == 0.0 {
            debug!(
                "all subject scores underflowed to zero for an input of {} tokens; substituting a total of 1",
                tokens.len()
            );
            total_score = 1.0;
        }

        let scale = 1.0 / total_score;
        for prediction in &mut predictions {
            prediction.probability *= scale;
        }

        predictions.sort_by(|a, b| b.probability.total_cmp(&a.probability));

        Ok(predictions)
    }

    /// Classify an input string and return only the most likely subject.
    ///
    /// Returns `None` when the engine has no training samples.
    pub fn classify_best(&self, input: &str) -> Result<Option<Prediction>> {
        Ok(self.classify(input)?.into_iter().next())
    }

    /// Get the per-subject statistics, in subject insertion order.
    pub fn subjects(&self) -> &[SubjectStats] {
        &self.subjects
    }

    /// Get the statistics for a single subject, if it has been registered.
    pub fn subject(&self, name: &str) -> Option<&SubjectStats> {
        self.subject_ids.get(name).map(|&id| &self.subjects[id])
    }

    /// Get the number of times a token was seen in training for a subject.
    ///
    /// Unknown tokens and unknown subjects count as zero.
    pub fn token_count(&self, token: &str, subject: &str) -> usize {
        match self.subject_ids.get(subject) {
            Some(&id) => self.token_count_by_id(token, id),
            None => 0,
        }
    }

    /// Get the count of all training examples across all subjects.
    pub fn total_samples(&self) -> usize {
        self.total_samples
    }

    /// Get the count of all token occurrences across all subjects.
    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    /// Get the number of distinct tokens seen in training.
    pub fn vocabulary_size(&self) -> usize {
        self.token_counts.len()
    }

    /// Check whether the engine has seen at least one training sample.
    pub fn is_trained(&self) -> bool {
        self.total_samples > 0
    }

    /// Get the feature-extraction strategy this engine is bound to.
    pub fn extractor(&self) -> &Arc<dyn FeatureExtractor> {
        &self.extractor
    }

    fn subject_id_or_insert(&mut self, subject: &str) -> usize {
        if let Some(&id) = self.subject_ids.get(subject) {
            return id;
        }
        let id = self.subjects.len();
        self.subjects.push(SubjectStats::new(subject));
        self.subject_ids.insert(subject.to_string(), id);
        id
    }

    fn token_count_by_id(&self, token: &str, subject_id: usize) -> usize {
        self.token_counts
            .get(token)
            .and_then(|counts| counts.get(&subject_id))
            .copied()
            .unwrap_or(0)
    }
}

impl Default for BayesEngine {
    fn default() -> Self {
        Self::new(Arc::new(WordExtractor::default()))
    }
}
