//! Sync status
//!
//! Each state container carries the status of its most recent remote
//! synchronization attempt: `Idle → Pending → Succeeded | Failed`. A new
//! attempt leaves a `Failed` status behind by moving back through `Pending`.

use crate::store::{StoreError, StoreErrorKind};

/// Status of the latest fetch/push for a container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SyncStatus {
    /// No synchronization attempted since construction or the last reset.
    #[default]
    Idle,
    /// A fetch or push is in flight.
    Pending,
    /// The last attempt completed.
    Succeeded,
    /// The last attempt failed; local state was left untouched.
    Failed(SyncFailure),
}

impl SyncStatus {
    /// Whether the last attempt failed.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Cloneable record of a failed synchronization attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFailure {
    pub kind: StoreErrorKind,
    pub message: String,
}

impl From<&StoreError> for SyncFailure {
    fn from(error: &StoreError) -> Self {
        Self {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}
