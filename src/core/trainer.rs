//! The trainer record.
//!
//! A trainer's name is the only attribute the rule engine consults: it is
//! the key into the fixed power-increment table,
//! [`power_increment`](crate::core::power_increment).

use serde::{Deserialize, Serialize};

/// Entity providing the power-increment basis for a training session.
///
/// Trainers are supplied by a [`TrainerSource`](crate::sources::TrainerSource)
/// collaborator; the engine never constructs or pools them itself.
///
/// # Example
///
/// ```rust
/// use apprentice::core::{power_increment, Trainer};
///
/// let yoda = Trainer::new("Yoda");
/// assert_eq!(power_increment(&yoda.name), 5);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Trainer {
    /// Name, used purely as the power-table lookup key
    pub name: String,
}

impl Trainer {
    /// Create a trainer with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
