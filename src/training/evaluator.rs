//! The training rule evaluator.

use crate::core::{power_increment, Trainee};
use crate::sources::{ConfigSource, TrainerSource, TRAINING_AVAILABLE_KEY};
use crate::training::error::TrainError;
use crate::training::outcome::Outcome;

/// Evaluates training requests against the training rules.
///
/// The rules are:
/// - A trainee with the restricted-alignment flag is rejected with
///   [`TrainError::IneligibleTrainee`] before anything else happens.
/// - If training is unavailable per the config source, the request completes
///   as a no-op ([`Outcome::Unavailable`]).
/// - Otherwise one trainer is selected from the source and the trainee's
///   power grows by that trainer's increment from the fixed table.
///
/// The evaluator is stateless: it holds nothing beyond its two injected
/// collaborators, and every invocation runs the same linear decision
/// sequence.
///
/// # Example
///
/// ```rust
/// use apprentice::core::{Trainee, Trainer};
/// use apprentice::sources::{InMemoryRoster, StaticConfig, TRAINING_AVAILABLE_KEY};
/// use apprentice::training::TrainingEvaluator;
///
/// let config = StaticConfig::new().with(TRAINING_AVAILABLE_KEY, true);
/// let roster = InMemoryRoster::new(vec![Trainer::new("Yoda")]);
/// let evaluator = TrainingEvaluator::new(config, roster);
///
/// let mut luke = Trainee::new("Luke", 10);
/// let runtime = tokio::runtime::Runtime::new().unwrap();
/// let outcome = runtime.block_on(evaluator.evaluate(&mut luke)).unwrap();
///
/// assert!(outcome.is_trained());
/// assert_eq!(luke.power, 15);
/// ```
pub struct TrainingEvaluator<C: ConfigSource, R: TrainerSource> {
    config: C,
    roster: R,
}

impl<C: ConfigSource, R: TrainerSource> TrainingEvaluator<C, R> {
    /// Create an evaluator over the given collaborators.
    pub fn new(config: C, roster: R) -> Self {
        Self { config, roster }
    }

    /// The injected configuration source.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// The injected trainer source.
    pub fn roster(&self) -> &R {
        &self.roster
    }

    /// Evaluate a training request for `trainee`.
    ///
    /// Ordering is strictly sequential: validate, check availability,
    /// select a trainer (the only suspension point), compute the increment,
    /// mutate. `trainee.power` is mutated only when training both is
    /// available and is carried out; every other path leaves the trainee
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`TrainError::IneligibleTrainee`] if the trainee carries the
    /// restricted-alignment flag; [`TrainError::Source`] if the trainer
    /// source fails.
    pub async fn evaluate(&self, trainee: &mut Trainee) -> Result<Outcome, TrainError> {
        if !trainee.is_eligible() {
            return Err(TrainError::IneligibleTrainee {
                name: trainee.name.clone(),
            });
        }

        if !self.config.get_bool(TRAINING_AVAILABLE_KEY) {
            return Ok(Outcome::Unavailable);
        }

        let trainer = self.roster.select_random().await?;
        let increment = power_increment(&trainer.name);
        trainee.power += increment;

        Ok(Outcome::Trained { trainer, increment })
    }
}
