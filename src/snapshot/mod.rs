//! Snapshot support for training logs.
//!
//! This module provides serialization and deserialization for a
//! [`TrainingLog`], so a caller-maintained log can survive process restarts.
//! Snapshots carry a format version that is checked on load.

use crate::core::TrainingLog;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of a training log.
///
/// # Example
///
/// ```rust
/// use apprentice::core::TrainingLog;
/// use apprentice::snapshot::Snapshot;
///
/// let log = TrainingLog::new();
/// let snapshot = Snapshot::capture(&log);
///
/// let json = snapshot.to_json().unwrap();
/// let restored = Snapshot::from_json(&json).unwrap();
/// assert_eq!(restored.log, log);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was created
    pub timestamp: DateTime<Utc>,

    /// The captured log
    pub log: TrainingLog,
}

impl Snapshot {
    /// Capture the given log, stamping a fresh id and the current time.
    pub fn capture(log: &TrainingLog) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            log: log.clone(),
        }
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from JSON, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate_version()
    }

    /// Serialize to a compact binary format.
    pub fn to_binary(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the binary format, rejecting unsupported versions.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate_version()
    }

    fn validate_version(self) -> Result<Self, SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }
        Ok(self)
    }
}
