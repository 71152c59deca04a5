//! Review-and-commit flow around one generated batch.
//!
//! ```text
//! Configuring -> Generated -> Committing -> CommittedDone
//!                                        -> CommittedPartial -> Generated (retry)
//! ```
//!
//! `Configuring`, `Generated`, `CommittedDone` and `CommittedPartial` can all
//! be discarded back to `Configuring`. A generated slot is never edited in
//! place: the owner either removes it or regenerates the whole batch.

use crate::errors::{VenueError, VenueResult};
use crate::generator::{self, WorkingSet};
use crate::models::commit::{CommitFailure, CommitReport};
use crate::models::slot::ScheduleDraft;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BatchFlow {
    #[default]
    Configuring,
    Generated(WorkingSet),
    /// The working set has been handed to the commit loop.
    Committing,
    CommittedDone {
        created: usize,
    },
    CommittedPartial {
        created: usize,
        remaining: WorkingSet,
        failures: Vec<CommitFailure>,
    },
}

impl BatchFlow {
    pub fn phase(&self) -> &'static str {
        match self {
            BatchFlow::Configuring => "configuring",
            BatchFlow::Generated(_) => "generated",
            BatchFlow::Committing => "committing",
            BatchFlow::CommittedDone { .. } => "committed",
            BatchFlow::CommittedPartial { .. } => "partially committed",
        }
    }

    pub fn working_set(&self) -> Option<&WorkingSet> {
        match self {
            BatchFlow::Generated(set) => Some(set),
            BatchFlow::CommittedPartial { remaining, .. } => Some(remaining),
            BatchFlow::Configuring | BatchFlow::Committing | BatchFlow::CommittedDone { .. } => {
                None
            }
        }
    }

    /// Generates a batch from the form and returns how many slots it holds.
    /// On error the flow stays in `Configuring`.
    pub fn generate(&mut self, draft: &ScheduleDraft) -> VenueResult<usize> {
        match self {
            BatchFlow::Configuring => {
                let set = generator::generate(draft)?;
                let count = set.len();
                *self = BatchFlow::Generated(set);
                Ok(count)
            }
            other => Err(illegal("generate", other)),
        }
    }

    /// Drops one candidate from the generated batch.
    ///
    /// Removing the last candidate leaves an empty batch, which the flow treats
    /// as nothing left to review and returns to `Configuring`.
    pub fn remove(&mut self, sequence_number: u32) -> VenueResult<bool> {
        match self {
            BatchFlow::Generated(set) => {
                let removed = set.remove(sequence_number);
                if set.is_empty() {
                    *self = BatchFlow::Configuring;
                }
                Ok(removed)
            }
            other => Err(illegal("remove a slot", other)),
        }
    }

    pub fn discard(&mut self) -> VenueResult<()> {
        match self {
            BatchFlow::Committing => Err(illegal("discard", self)),
            BatchFlow::Configuring
            | BatchFlow::Generated(_)
            | BatchFlow::CommittedDone { .. }
            | BatchFlow::CommittedPartial { .. } => {
                *self = BatchFlow::Configuring;
                Ok(())
            }
        }
    }

    /// Moves to `Committing` and hands the working set to the caller, who
    /// submits it and then calls [`BatchFlow::finish_commit`].
    pub fn begin_commit(&mut self) -> VenueResult<WorkingSet> {
        match std::mem::take(self) {
            BatchFlow::Generated(set) => {
                *self = BatchFlow::Committing;
                Ok(set)
            }
            other => {
                let err = illegal("commit", &other);
                *self = other;
                Err(err)
            }
        }
    }

    /// Records the outcome of a commit. `remaining` is the working set as the
    /// commit loop left it, holding only the entries that were not confirmed.
    pub fn finish_commit(&mut self, remaining: WorkingSet, report: &CommitReport) -> VenueResult<()> {
        match self {
            BatchFlow::Committing => {
                *self = if report.is_complete() {
                    BatchFlow::CommittedDone {
                        created: report.created_count(),
                    }
                } else {
                    BatchFlow::CommittedPartial {
                        created: report.created_count(),
                        remaining,
                        failures: report.failed.clone(),
                    }
                };
                Ok(())
            }
            other => Err(illegal("finish a commit", other)),
        }
    }

    /// Puts the unconfirmed entries of a partial commit back up for review.
    pub fn retry(&mut self) -> VenueResult<()> {
        match std::mem::take(self) {
            BatchFlow::CommittedPartial { remaining, .. } => {
                *self = BatchFlow::Generated(remaining);
                Ok(())
            }
            other => {
                let err = illegal("retry", &other);
                *self = other;
                Err(err)
            }
        }
    }
}

fn illegal(action: &str, flow: &BatchFlow) -> VenueError {
    VenueError::Validation(format!("Cannot {} while {}", action, flow.phase()))
}
