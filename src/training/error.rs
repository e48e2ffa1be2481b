//! Errors surfaced by the training evaluator.

use crate::sources::SourceError;
use thiserror::Error;

/// Errors that can occur while evaluating a training request.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrainError {
    /// The trainee carries the restricted-alignment flag.
    ///
    /// Raised synchronously before any collaborator is invoked; it reflects
    /// a caller-input invariant violation, not a transient condition.
    #[error("restricted-alignment trainee '{name}' cannot be trained")]
    IneligibleTrainee { name: String },

    /// The trainer source failed. Propagated to the caller unchanged.
    #[error(transparent)]
    Source(#[from] SourceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ineligible_error_names_the_trainee() {
        let err = TrainError::IneligibleTrainee {
            name: "Vader".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "restricted-alignment trainee 'Vader' cannot be trained"
        );
    }

    #[test]
    fn source_error_passes_through_unchanged() {
        let source = SourceError::new("pool offline");
        let err = TrainError::from(source.clone());
        assert_eq!(err.to_string(), source.to_string());
    }
}
