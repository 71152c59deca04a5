use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::{VenueError, VenueResult};
use crate::models::hhmm;

/// Smallest slot length the owner form offers.
pub const MIN_DURATION_MINUTES: u32 = 15;

/// Slot lengths offered by the owner form are multiples of this.
pub const DURATION_STEP_MINUTES: u32 = 15;

/// Slot generation form as submitted by a venue owner.
///
/// Every field is optional because the form can be sent half filled in;
/// [`ScheduleConfig::try_from`] decides whether it is complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDraft {
    #[serde(default)]
    pub ground_id: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "hhmm::option")]
    pub window_start: Option<NaiveTime>,
    #[serde(default, with = "hhmm::option")]
    pub window_end: Option<NaiveTime>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub price_per_slot: Option<u32>,
}

/// A complete generation request for one ground on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub ground_id: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub window_start: NaiveTime,
    #[serde(with = "hhmm")]
    pub window_end: NaiveTime,
    pub duration_minutes: u32,
    pub price_per_slot: u32,
}

impl ScheduleConfig {
    /// Checks the constraints the owner form puts on slot length.
    ///
    /// The generator accepts any positive duration; this is only applied to
    /// requests coming through the preview surface.
    pub fn check_form_constraints(&self) -> VenueResult<()> {
        if self.duration_minutes < MIN_DURATION_MINUTES {
            return Err(VenueError::Validation(format!(
                "Slot duration must be at least {} minutes",
                MIN_DURATION_MINUTES
            )));
        }
        if self.duration_minutes % DURATION_STEP_MINUTES != 0 {
            return Err(VenueError::Validation(format!(
                "Slot duration must be a multiple of {} minutes",
                DURATION_STEP_MINUTES
            )));
        }
        Ok(())
    }
}

impl TryFrom<&ScheduleDraft> for ScheduleConfig {
    type Error = VenueError;

    fn try_from(draft: &ScheduleDraft) -> VenueResult<Self> {
        let mut missing = Vec::new();

        let ground_id = draft
            .ground_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty());
        if ground_id.is_none() {
            missing.push("ground_id");
        }
        if draft.date.is_none() {
            missing.push("date");
        }
        if draft.window_start.is_none() {
            missing.push("window_start");
        }
        if draft.window_end.is_none() {
            missing.push("window_end");
        }
        if draft.duration_minutes.is_none() {
            missing.push("duration_minutes");
        }
        if draft.price_per_slot.is_none() {
            missing.push("price_per_slot");
        }

        match (
            ground_id,
            draft.date,
            draft.window_start,
            draft.window_end,
            draft.duration_minutes,
            draft.price_per_slot,
        ) {
            (
                Some(ground_id),
                Some(date),
                Some(window_start),
                Some(window_end),
                Some(duration_minutes),
                Some(price_per_slot),
            ) => Ok(Self {
                ground_id: ground_id.to_string(),
                date,
                window_start,
                window_end,
                duration_minutes,
                price_per_slot,
            }),
            _ => Err(VenueError::ConfigIncomplete(missing)),
        }
    }
}

/// A candidate slot that exists only in memory until it is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSlot {
    /// 1-based position at generation time. Stable across removals; not a server id.
    pub sequence_number: u32,
    pub ground_id: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub duration_minutes: u32,
    pub price: u32,
}

impl GeneratedSlot {
    pub fn to_create_request(&self) -> CreateSlotRequest {
        CreateSlotRequest {
            ground_id: self.ground_id.clone(),
            slot_date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            price: self.price,
        }
    }

    /// `HH:MM-HH:MM`, as shown in the slot review list.
    pub fn label(&self) -> String {
        format!(
            "{}-{}",
            hhmm::format(&self.start_time),
            hhmm::format(&self.end_time)
        )
    }
}

/// Body of the backend's slot creation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSlotRequest {
    pub ground_id: String,
    pub slot_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub price: u32,
}

/// A slot as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub id: String,
    pub ground_id: String,
    pub slot_date: NaiveDate,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub price: u32,
    #[serde(default)]
    pub is_booked: bool,
}
