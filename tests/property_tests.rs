//! Property-based tests for the rule engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use apprentice::core::{power_increment, SessionRecord, Trainee, Trainer, TrainingLog};
use apprentice::sources::{SourceError, StaticConfig, TrainerSource, TRAINING_AVAILABLE_KEY};
use apprentice::training::TrainingEvaluator;
use proptest::prelude::*;

/// Roster that always hands back the same trainer.
struct FixedRoster {
    trainer: Trainer,
}

impl TrainerSource for FixedRoster {
    async fn select_random(&self) -> Result<Trainer, SourceError> {
        Ok(self.trainer.clone())
    }
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime")
        .block_on(future)
}

prop_compose! {
    fn arbitrary_trainer_name()(variant in 0..3u8, other in "[A-Za-z]{1,12}") -> String {
        match variant {
            0 => "Yoda".to_string(),
            1 => "Obi-Wan".to_string(),
            _ => other,
        }
    }
}

prop_compose! {
    fn arbitrary_power()(power in -1_000_000i64..1_000_000) -> i64 {
        power
    }
}

proptest! {
    #[test]
    fn increment_is_deterministic(name in arbitrary_trainer_name()) {
        prop_assert_eq!(power_increment(&name), power_increment(&name));
    }

    #[test]
    fn increment_matches_the_fixed_table(name in arbitrary_trainer_name()) {
        let expected = match name.as_str() {
            "Yoda" => 5,
            "Obi-Wan" => 3,
            _ => 2,
        };
        prop_assert_eq!(power_increment(&name), expected);
    }

    #[test]
    fn unknown_names_get_the_default(name in "[a-z]{1,12}") {
        // Lowercase names can never collide with the two table entries.
        prop_assert_eq!(power_increment(&name), 2);
    }

    #[test]
    fn restricted_trainees_are_never_mutated(
        power in arbitrary_power(),
        trainer_name in arbitrary_trainer_name(),
        available in any::<bool>(),
    ) {
        let evaluator = TrainingEvaluator::new(
            StaticConfig::new().with(TRAINING_AVAILABLE_KEY, available),
            FixedRoster { trainer: Trainer::new(trainer_name) },
        );
        let mut trainee = Trainee::restricted("Vader", power);

        let result = block_on(evaluator.evaluate(&mut trainee));

        prop_assert!(result.is_err());
        prop_assert_eq!(trainee.power, power);
    }

    #[test]
    fn unavailable_training_never_mutates(
        power in arbitrary_power(),
        trainer_name in arbitrary_trainer_name(),
    ) {
        let evaluator = TrainingEvaluator::new(
            StaticConfig::new().with(TRAINING_AVAILABLE_KEY, false),
            FixedRoster { trainer: Trainer::new(trainer_name) },
        );
        let mut trainee = Trainee::new("Luke", power);

        let result = block_on(evaluator.evaluate(&mut trainee));

        prop_assert!(result.is_ok());
        prop_assert_eq!(trainee.power, power);
    }

    #[test]
    fn available_training_adds_exactly_the_table_increment(
        power in arbitrary_power(),
        trainer_name in arbitrary_trainer_name(),
    ) {
        let evaluator = TrainingEvaluator::new(
            StaticConfig::new().with(TRAINING_AVAILABLE_KEY, true),
            FixedRoster { trainer: Trainer::new(trainer_name.clone()) },
        );
        let mut trainee = Trainee::new("Luke", power);

        let result = block_on(evaluator.evaluate(&mut trainee));

        prop_assert!(result.is_ok());
        prop_assert_eq!(trainee.power, power + power_increment(&trainer_name));
    }

    #[test]
    fn log_preserves_order_and_sums_increments(
        names in prop::collection::vec(arbitrary_trainer_name(), 1..10)
    ) {
        let trainee = Trainee::new("Luke", 0);
        let mut log = TrainingLog::new();
        let mut expected_total = 0;

        for name in &names {
            let trainer = Trainer::new(name.clone());
            let increment = power_increment(name);
            log = log.record(SessionRecord::new(&trainee, &trainer, increment));
            expected_total += increment;
        }

        prop_assert_eq!(log.len(), names.len());
        prop_assert_eq!(log.total_increment(), expected_total);

        let recorded: Vec<&str> = log.sessions().iter().map(|s| s.trainer.as_str()).collect();
        let expected: Vec<&str> = names.iter().map(String::as_str).collect();
        prop_assert_eq!(recorded, expected);
    }
}
