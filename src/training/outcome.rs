//! Result of a successful evaluation.

use crate::core::Trainer;

/// Non-error outcome of evaluating a training request.
///
/// An unavailable training window is a successful no-op, distinguishable
/// from a completed session but never treated as a failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Training is not currently available; the trainee was left untouched.
    Unavailable,

    /// Training was carried out and the trainee's power increased.
    Trained {
        /// The trainer selected for the session
        trainer: Trainer,
        /// The power added to the trainee
        increment: i64,
    },
}

impl Outcome {
    /// Check whether training was actually carried out.
    pub fn is_trained(&self) -> bool {
        matches!(self, Self::Trained { .. })
    }
}
