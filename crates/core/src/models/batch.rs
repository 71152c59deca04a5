use serde::{Deserialize, Serialize};

use crate::generator::WorkingSet;
use crate::models::commit::CommitReport;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewResponse {
    pub count: usize,
    pub slots: WorkingSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveSlotRequest {
    pub slots: WorkingSet,
    pub sequence_number: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveSlotResponse {
    pub removed: bool,
    pub slots: WorkingSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitBatchRequest {
    pub slots: WorkingSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitBatchResponse {
    pub created: usize,
    pub failed: usize,
    pub report: CommitReport,
    /// Entries the backend did not confirm, still in the owner's working set.
    pub remaining: WorkingSet,
}
