//! The training evaluator: the crate's imperative shell.
//!
//! This module wires the pure core to the injected collaborators,
//! implementing the linear decision sequence: validate, check availability,
//! select a trainer, compute the increment, mutate.

pub mod error;
pub mod evaluator;
pub mod outcome;

pub use error::TrainError;
pub use evaluator::TrainingEvaluator;
pub use outcome::Outcome;
