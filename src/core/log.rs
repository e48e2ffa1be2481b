//! Training session log.
//!
//! Provides immutable tracking of completed training sessions over time,
//! following functional programming principles. The evaluator never writes
//! to a log itself; callers record the outcomes they care about, which keeps
//! the evaluator stateless.

use super::trainee::Trainee;
use super::trainer::Trainer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Record of a single completed training session.
///
/// Records are immutable values capturing who trained, under whom, for how
/// much, and when.
///
/// # Example
///
/// ```rust
/// use apprentice::core::{power_increment, SessionRecord, Trainee, Trainer};
///
/// let luke = Trainee::new("Luke", 10);
/// let yoda = Trainer::new("Yoda");
/// let record = SessionRecord::new(&luke, &yoda, power_increment(&yoda.name));
///
/// assert_eq!(record.trainee, "Luke");
/// assert_eq!(record.increment, 5);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Unique identifier for this session
    pub id: Uuid,
    /// Name of the trainee who was trained
    pub trainee: String,
    /// Name of the trainer who supplied the increment
    pub trainer: String,
    /// Power granted to the trainee
    pub increment: i64,
    /// When the session completed
    pub timestamp: DateTime<Utc>,
}

impl SessionRecord {
    /// Create a record for a just-completed session, stamped with a fresh
    /// id and the current time.
    pub fn new(trainee: &Trainee, trainer: &Trainer, increment: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            trainee: trainee.name.clone(),
            trainer: trainer.name.clone(),
            increment,
            timestamp: Utc::now(),
        }
    }
}

/// Ordered log of completed training sessions.
///
/// The log is immutable - [`record`](Self::record) returns a new log with
/// the session appended, leaving the original untouched.
///
/// # Example
///
/// ```rust
/// use apprentice::core::{SessionRecord, Trainee, Trainer, TrainingLog};
///
/// let luke = Trainee::new("Luke", 10);
///
/// let log = TrainingLog::new();
/// let log = log.record(SessionRecord::new(&luke, &Trainer::new("Yoda"), 5));
/// let log = log.record(SessionRecord::new(&luke, &Trainer::new("Obi-Wan"), 3));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.total_increment(), 8);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TrainingLog {
    sessions: Vec<SessionRecord>,
}

impl Default for TrainingLog {
    fn default() -> Self {
        Self::new()
    }
}

impl TrainingLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            sessions: Vec::new(),
        }
    }

    /// Record a session, returning a new log.
    ///
    /// Pure: the existing log is not mutated.
    #[must_use]
    pub fn record(&self, session: SessionRecord) -> Self {
        let mut sessions = self.sessions.clone();
        sessions.push(session);
        Self { sessions }
    }

    /// All recorded sessions, oldest first.
    pub fn sessions(&self) -> &[SessionRecord] {
        &self.sessions
    }

    /// Number of recorded sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Check whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sum of all increments granted across recorded sessions.
    pub fn total_increment(&self) -> i64 {
        self.sessions.iter().map(|s| s.increment).sum()
    }
}
