//! Injected collaborator capabilities.
//!
//! The evaluator consumes exactly two external capabilities, both passed in
//! at construction time:
//! - [`ConfigSource`]: a boolean-valued configuration lookup
//! - [`TrainerSource`]: an asynchronous source of candidate trainers
//!
//! Both are traits so tests can substitute them without any interception
//! machinery; [`StaticConfig`] and [`InMemoryRoster`] are ready-made
//! in-memory implementations.

pub mod config;
pub mod roster;

pub use config::{ConfigSource, StaticConfig, TRAINING_AVAILABLE_KEY};
pub use roster::{InMemoryRoster, SourceError, TrainerSource};
