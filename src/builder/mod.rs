//! Builder API for ergonomic evaluator construction.

pub mod error;

pub use error::BuildError;

use crate::sources::{ConfigSource, TrainerSource};
use crate::training::TrainingEvaluator;

/// Builder for constructing a [`TrainingEvaluator`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use apprentice::builder::EvaluatorBuilder;
/// use apprentice::core::Trainer;
/// use apprentice::sources::{InMemoryRoster, StaticConfig, TRAINING_AVAILABLE_KEY};
///
/// let evaluator = EvaluatorBuilder::new()
///     .config(StaticConfig::new().with(TRAINING_AVAILABLE_KEY, true))
///     .roster(InMemoryRoster::new(vec![Trainer::new("Yoda")]))
///     .build()
///     .unwrap();
/// # let _ = evaluator;
/// ```
pub struct EvaluatorBuilder<C, R> {
    config: Option<C>,
    roster: Option<R>,
}

impl<C: ConfigSource, R: TrainerSource> EvaluatorBuilder<C, R> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            roster: None,
        }
    }

    /// Set the configuration source (required).
    pub fn config(mut self, source: C) -> Self {
        self.config = Some(source);
        self
    }

    /// Set the trainer source (required).
    pub fn roster(mut self, source: R) -> Self {
        self.roster = Some(source);
        self
    }

    /// Build the evaluator.
    /// Returns an error if either collaborator is missing.
    pub fn build(self) -> Result<TrainingEvaluator<C, R>, BuildError> {
        let config = self.config.ok_or(BuildError::MissingConfigSource)?;
        let roster = self.roster.ok_or(BuildError::MissingTrainerSource)?;
        Ok(TrainingEvaluator::new(config, roster))
    }
}

impl<C: ConfigSource, R: TrainerSource> Default for EvaluatorBuilder<C, R> {
    fn default() -> Self {
        Self::new()
    }
}
