//! The trainee record undergoing training.
//!
//! A trainee is a plain domain value created by the caller. The training
//! operation is the only code in this crate that mutates one, and only its
//! `power` field.

use serde::{Deserialize, Serialize};

/// Entity undergoing the training operation.
///
/// Trainees are created externally and passed mutably into
/// [`TrainingEvaluator::evaluate`](crate::training::TrainingEvaluator::evaluate),
/// which may add to `power` on the success path. A trainee carrying the
/// restricted-alignment flag is permanently ineligible: the evaluator rejects
/// it before touching `power` or either collaborator.
///
/// # Example
///
/// ```rust
/// use apprentice::core::Trainee;
///
/// let luke = Trainee::new("Luke", 10);
/// assert!(luke.is_eligible());
/// assert_eq!(luke.power, 10);
///
/// let vader = Trainee::restricted("Vader", 80);
/// assert!(!vader.is_eligible());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Trainee {
    /// Display name of the trainee
    pub name: String,
    /// Flag marking an ineligible affiliation
    pub restricted_alignment: bool,
    /// Accumulated power; grows by the trainer's increment on each session
    pub power: i64,
}

impl Trainee {
    /// Create an eligible trainee with the given starting power.
    pub fn new(name: impl Into<String>, power: i64) -> Self {
        Self {
            name: name.into(),
            restricted_alignment: false,
            power,
        }
    }

    /// Create a trainee carrying the restricted-alignment flag.
    ///
    /// Such a trainee can never be trained; the evaluator fails with a
    /// validation error before any mutation occurs.
    pub fn restricted(name: impl Into<String>, power: i64) -> Self {
        Self {
            name: name.into(),
            restricted_alignment: true,
            power,
        }
    }

    /// Check whether this trainee may undergo training.
    ///
    /// Pure guard predicate: no side effects, no collaborator access.
    pub fn is_eligible(&self) -> bool {
        !self.restricted_alignment
    }
}
