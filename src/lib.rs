//! Apprentice: a small training rule engine
//!
//! Apprentice follows a "pure core, imperative shell" layout. The decision
//! logic (eligibility guard, power-increment table, session log) is composed
//! of pure functions with no side effects, while the single side-effecting
//! step - selecting a trainer from an external pool - is isolated behind an
//! injected async trait.
//!
//! # Core Concepts
//!
//! - **Trainee**: the mutable record undergoing training
//! - **Collaborators**: a [`sources::ConfigSource`] gating availability and a
//!   [`sources::TrainerSource`] supplying one trainer per session
//! - **Evaluator**: the stateless [`training::TrainingEvaluator`] applying the
//!   rules in a fixed sequence
//!
//! # Example
//!
//! ```rust
//! use apprentice::core::{power_increment, SessionRecord, Trainee, Trainer, TrainingLog};
//!
//! let mut luke = Trainee::new("Luke", 10);
//! let yoda = Trainer::new("Yoda");
//!
//! // The power table is a pure function, usable without an evaluator.
//! let increment = power_increment(&yoda.name);
//! assert_eq!(increment, 5);
//!
//! luke.power += increment;
//! let log = TrainingLog::new().record(SessionRecord::new(&luke, &yoda, increment));
//! assert_eq!(log.total_increment(), 5);
//! ```

pub mod builder;
pub mod core;
pub mod snapshot;
pub mod sources;
pub mod training;

// Re-export commonly used types
pub use self::core::{power_increment, SessionRecord, Trainee, Trainer, TrainingLog};
pub use self::sources::{ConfigSource, TrainerSource, TRAINING_AVAILABLE_KEY};
pub use self::training::{Outcome, TrainError, TrainingEvaluator};
