//! Core domain types and pure rule logic.
//!
//! This module contains the pure functional core of the rule engine:
//! - The [`Trainee`] and [`Trainer`] domain records
//! - The fixed power-increment table via [`power_increment`]
//! - Immutable session tracking via [`TrainingLog`]
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy. The side-effecting
//! pieces live behind the collaborator traits in [`crate::sources`].

mod log;
mod power;
mod trainee;
mod trainer;

pub use log::{SessionRecord, TrainingLog};
pub use power::power_increment;
pub use trainee::Trainee;
pub use trainer::Trainer;
