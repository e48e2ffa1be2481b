//! Build errors for the evaluator builder.

use thiserror::Error;

/// Errors that can occur when building a training evaluator.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Configuration source not specified. Call .config(source) before .build()")]
    MissingConfigSource,

    #[error("Trainer source not specified. Call .roster(source) before .build()")]
    MissingTrainerSource,
}
