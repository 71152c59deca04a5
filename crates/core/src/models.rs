pub mod batch;
pub mod commit;
pub mod slot;
pub mod view;

/// Serde codec for wall-clock times as zero-padded 24-hour `HH:MM` strings.
///
/// Input also accepts `HH:MM:SS`, which is what browser time inputs send when
/// seconds are enabled, as long as the seconds are `00`.
pub mod hhmm {
    use chrono::{NaiveTime, Timelike};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    use crate::errors::{VenueError, VenueResult};

    pub const FORMAT: &str = "%H:%M";

    pub fn format(time: &NaiveTime) -> String {
        time.format(FORMAT).to_string()
    }

    /// Parses a whole-minute time. Non-zero seconds are rejected so the parsed
    /// value always equals what [`format`] writes back.
    pub fn parse(value: &str) -> VenueResult<NaiveTime> {
        let time = NaiveTime::parse_from_str(value, FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
            .map_err(|e| VenueError::Validation(format!("invalid time '{}': {}", value, e)))?;

        if time.second() != 0 || time.nanosecond() != 0 {
            return Err(VenueError::Validation(format!(
                "time '{}' must be whole minutes (HH:MM)",
                value
            )));
        }

        Ok(time)
    }

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(time))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(D::Error::custom)
    }

    /// Same codec for optional form fields.
    pub mod option {
        use chrono::NaiveTime;
        use serde::{Deserialize, Deserializer, Serializer, de::Error};

        pub fn serialize<S: Serializer>(
            time: &Option<NaiveTime>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match time {
                Some(time) => serializer.serialize_some(&super::format(time)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<NaiveTime>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                None => Ok(None),
                Some(raw) if raw.trim().is_empty() => Ok(None),
                Some(raw) => super::parse(&raw).map(Some).map_err(D::Error::custom),
            }
        }
    }
}
