use serde::{Deserialize, Serialize};

use crate::errors::VenueError;
use crate::models::slot::SlotRecord;

/// A working-set entry the backend confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedSlot {
    pub sequence_number: u32,
    pub record: SlotRecord,
}

/// A working-set entry the backend did not confirm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitFailure {
    pub sequence_number: u32,
    pub reason: String,
}

/// Outcome of submitting a working set, one entry per attempted slot.
///
/// Every entry is attempted once; a failure does not stop the remaining
/// submissions and earlier successes are never rolled back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitReport {
    pub created: Vec<CommittedSlot>,
    pub failed: Vec<CommitFailure>,
}

impl CommitReport {
    pub fn created_count(&self) -> usize {
        self.created.len()
    }

    pub fn failed_count(&self) -> usize {
        self.failed.len()
    }

    /// True when nothing failed.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn created_sequence_numbers(&self) -> Vec<u32> {
        self.created.iter().map(|c| c.sequence_number).collect()
    }

    pub fn failed_sequence_numbers(&self) -> Vec<u32> {
        self.failed.iter().map(|f| f.sequence_number).collect()
    }

    /// The failures as `CommitItemFailed` errors, for callers that surface them one by one.
    pub fn errors(&self) -> Vec<VenueError> {
        self.failed
            .iter()
            .map(|f| VenueError::CommitItemFailed {
                sequence_number: f.sequence_number,
                reason: f.reason.clone(),
            })
            .collect()
    }
}
