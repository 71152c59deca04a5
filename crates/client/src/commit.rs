//! Sequential submission of a working set.
//!
//! Entries are sent one at a time in working-set order, each request awaited
//! before the next is issued. A failed entry does not stop the loop: every
//! entry is attempted exactly once and reported on its own. Confirmed entries
//! leave the working set, unconfirmed ones stay with their original sequence
//! numbers so the owner can retry or remove them. Nothing is retried here and
//! nothing already created is rolled back.

use tracing::{info, warn};
use venuebook_core::{
    generator::WorkingSet,
    models::commit::{CommitFailure, CommitReport, CommittedSlot},
};

use crate::api_client::SlotEndpoint;

pub async fn commit<E>(working_set: &mut WorkingSet, endpoint: &E) -> CommitReport
where
    E: SlotEndpoint + ?Sized,
{
    let mut report = CommitReport::default();

    for slot in working_set.iter() {
        match endpoint.create_slot(&slot.to_create_request()).await {
            Ok(record) => {
                info!(
                    sequence_number = slot.sequence_number,
                    slot_id = %record.id,
                    slot = %slot.label(),
                    "slot created"
                );
                report.created.push(CommittedSlot {
                    sequence_number: slot.sequence_number,
                    record,
                });
            }
            Err(err) => {
                warn!(
                    sequence_number = slot.sequence_number,
                    slot = %slot.label(),
                    error = %err,
                    "slot not created"
                );
                report.failed.push(CommitFailure {
                    sequence_number: slot.sequence_number,
                    reason: err.to_string(),
                });
            }
        }
    }

    working_set.retain_sequence_numbers(&report.failed_sequence_numbers());

    info!(
        created = report.created_count(),
        failed = report.failed_count(),
        "slot batch committed"
    );

    report
}
