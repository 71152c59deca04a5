//! # Slot Schedule Generator
//!
//! Splits an owner's opening window into back-to-back slots of a fixed length.
//!
//! Only hour and minute arithmetic matters: both window bounds are treated as
//! times on the same day, and the date from the configuration is copied onto
//! every slot unchanged. A trailing remainder shorter than one slot is dropped,
//! never truncated, so every slot has exactly the configured length.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{VenueError, VenueResult};
use crate::models::slot::{GeneratedSlot, ScheduleConfig, ScheduleDraft};

/// Generates the working set for a submitted form.
///
/// # Errors
///
/// * `VenueError::ConfigIncomplete` - a required field is missing, nothing is generated
/// * `VenueError::NoSlotsGenerated` - the form is complete but no slot fits the window
pub fn generate(draft: &ScheduleDraft) -> VenueResult<WorkingSet> {
    let config = ScheduleConfig::try_from(draft)?;
    generate_batch(&config)
}

/// Generates the working set for an already validated configuration.
///
/// # Errors
///
/// * `VenueError::NoSlotsGenerated` - no slot fits the window
pub fn generate_batch(config: &ScheduleConfig) -> VenueResult<WorkingSet> {
    let slots = generate_slots(config);

    if slots.is_empty() {
        return Err(VenueError::NoSlotsGenerated);
    }

    Ok(WorkingSet::from(slots))
}

/// Contiguous slots covering `window_start..window_end` in steps of the
/// configured duration. Empty when the window is empty, reversed, shorter than
/// one slot, or the duration is zero.
pub fn generate_slots(config: &ScheduleConfig) -> Vec<GeneratedSlot> {
    let mut slots = Vec::new();

    if config.duration_minutes == 0 {
        debug!(ground_id = %config.ground_id, "zero slot duration, nothing to generate");
        return slots;
    }

    let step = Duration::minutes(i64::from(config.duration_minutes));
    let mut cursor = config.window_start;
    let mut sequence_number = 1;

    loop {
        let (candidate_end, wrapped) = cursor.overflowing_add_signed(step);
        // A wrap means the slot would run past midnight, which is past any window end.
        if wrapped != 0 || candidate_end > config.window_end {
            break;
        }

        slots.push(GeneratedSlot {
            sequence_number,
            ground_id: config.ground_id.clone(),
            date: config.date,
            start_time: cursor,
            end_time: candidate_end,
            duration_minutes: config.duration_minutes,
            price: config.price_per_slot,
        });

        sequence_number += 1;
        cursor = candidate_end;
    }

    debug!(
        ground_id = %config.ground_id,
        date = %config.date,
        window_start = %config.window_start,
        window_end = %config.window_end,
        duration_minutes = config.duration_minutes,
        count = slots.len(),
        "generated slot candidates"
    );

    slots
}

/// Generated slots awaiting review and commit, in generation order.
///
/// Sequence numbers are identifiers, not positions: removing an entry never
/// renumbers the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkingSet {
    slots: Vec<GeneratedSlot>,
}

impl WorkingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes the entry with this sequence number. Returns `false` if there was none.
    pub fn remove(&mut self, sequence_number: u32) -> bool {
        match self
            .slots
            .iter()
            .position(|slot| slot.sequence_number == sequence_number)
        {
            Some(index) => {
                self.slots.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, sequence_number: u32) -> Option<&GeneratedSlot> {
        self.slots
            .iter()
            .find(|slot| slot.sequence_number == sequence_number)
    }

    /// Keeps only the entries whose sequence number is in `keep`, preserving order.
    pub fn retain_sequence_numbers(&mut self, keep: &[u32]) {
        self.slots.retain(|slot| keep.contains(&slot.sequence_number));
    }

    pub fn sequence_numbers(&self) -> Vec<u32> {
        self.slots.iter().map(|slot| slot.sequence_number).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneratedSlot> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[GeneratedSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Discards every entry.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

impl From<Vec<GeneratedSlot>> for WorkingSet {
    fn from(slots: Vec<GeneratedSlot>) -> Self {
        Self { slots }
    }
}

impl<'a> IntoIterator for &'a WorkingSet {
    type Item = &'a GeneratedSlot;
    type IntoIter = std::slice::Iter<'a, GeneratedSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}
