//! Trainer selection collaborator.
//!
//! Trainer selection is the engine's only suspension point: it is an
//! asynchronous external call, awaited once per training session. The
//! selection policy belongs to the implementation, not the trait contract.

use crate::core::Trainer;
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Failure reported by a [`TrainerSource`].
///
/// The evaluator propagates these to its caller unchanged, with no retry.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("trainer source failed: {message}")]
pub struct SourceError {
    /// Human-readable description of the failure
    pub message: String,
}

impl SourceError {
    /// Create a source error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Source of candidate trainers.
///
/// Returns exactly one trainer per call, selected by an
/// implementation-defined policy from an external pool.
#[allow(async_fn_in_trait)]
pub trait TrainerSource: Send + Sync {
    /// Select one trainer from the pool.
    async fn select_random(&self) -> Result<Trainer, SourceError>;
}

/// In-memory [`TrainerSource`] selecting uniformly at random from a fixed
/// pool.
///
/// # Example
///
/// ```rust
/// use apprentice::core::Trainer;
/// use apprentice::sources::InMemoryRoster;
///
/// let roster = InMemoryRoster::new(vec![
///     Trainer::new("Yoda"),
///     Trainer::new("Obi-Wan"),
/// ]);
/// assert_eq!(roster.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryRoster {
    trainers: Vec<Trainer>,
}

impl InMemoryRoster {
    /// Create a roster over the given pool of trainers.
    pub fn new(trainers: Vec<Trainer>) -> Self {
        Self { trainers }
    }

    /// Number of trainers in the pool.
    pub fn len(&self) -> usize {
        self.trainers.len()
    }

    /// Check whether the pool is empty.
    ///
    /// Selection from an empty pool fails with a [`SourceError`].
    pub fn is_empty(&self) -> bool {
        self.trainers.is_empty()
    }
}

impl TrainerSource for InMemoryRoster {
    async fn select_random(&self) -> Result<Trainer, SourceError> {
        self.trainers
            .choose(&mut rand::rng())
            .cloned()
            .ok_or_else(|| SourceError::new("no trainers in the pool"))
    }
}
