//! Configuration lookup collaborator.

use std::collections::HashMap;

/// Configuration key gating whether training may proceed.
pub const TRAINING_AVAILABLE_KEY: &str = "IsJediTrainingAvailable";

/// Boolean-valued configuration lookup.
///
/// The evaluator queries this exactly once per invocation, with
/// [`TRAINING_AVAILABLE_KEY`]. Implementations decide where the value comes
/// from; a key with no value reads as `false`.
pub trait ConfigSource: Send + Sync {
    /// Look up a boolean flag by key. Missing keys read as `false`.
    fn get_bool(&self, key: &str) -> bool;
}

/// In-memory [`ConfigSource`] backed by a key/value map.
///
/// # Example
///
/// ```rust
/// use apprentice::sources::{ConfigSource, StaticConfig, TRAINING_AVAILABLE_KEY};
///
/// let config = StaticConfig::new().with(TRAINING_AVAILABLE_KEY, true);
///
/// assert!(config.get_bool(TRAINING_AVAILABLE_KEY));
/// assert!(!config.get_bool("SomeOtherFlag"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct StaticConfig {
    values: HashMap<String, bool>,
}

impl StaticConfig {
    /// Create an empty configuration; every lookup reads `false`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag, returning the updated configuration.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: bool) -> Self {
        self.values.insert(key.into(), value);
        self
    }
}

impl ConfigSource for StaticConfig {
    fn get_bool(&self, key: &str) -> bool {
        self.values.get(key).copied().unwrap_or(false)
    }
}
