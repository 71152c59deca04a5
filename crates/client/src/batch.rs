use chrono::NaiveDate;
use eyre::{Result, WrapErr, eyre};
use std::env;
use venuebook_core::models::{hhmm, slot::ScheduleDraft};

use crate::{api_client::Credential, config::ClientConfig};

/// Settings for one unattended generate-and-commit run.
///
/// The schedule fields are read as given; missing ones are left empty so the
/// generator reports them all at once.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub client: ClientConfig,
    /// Owner token sent with every slot (`VENUEBOOK_TOKEN`)
    pub credential: Option<Credential>,
    pub draft: ScheduleDraft,
    /// Sequence numbers removed from the batch before commit (`SLOT_SKIP`)
    pub skip: Vec<u32>,
}

impl BatchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let backend_url =
            var("BACKEND_URL").ok_or_else(|| eyre!("BACKEND_URL environment variable not set"))?;
        let mut client = ClientConfig::new(backend_url);
        if let Some(timeout) = var("BACKEND_TIMEOUT_SECONDS") {
            client.timeout_seconds = timeout
                .parse()
                .wrap_err("BACKEND_TIMEOUT_SECONDS must be a whole number of seconds")?;
        }

        let credential = var("VENUEBOOK_TOKEN").map(Credential::bearer);

        let date = var("SLOT_DATE")
            .map(|value| NaiveDate::parse_from_str(&value, "%Y-%m-%d"))
            .transpose()
            .wrap_err("SLOT_DATE must be YYYY-MM-DD")?;
        let window_start = var("SLOT_WINDOW_START")
            .map(|value| hhmm::parse(&value))
            .transpose()
            .wrap_err("SLOT_WINDOW_START must be HH:MM")?;
        let window_end = var("SLOT_WINDOW_END")
            .map(|value| hhmm::parse(&value))
            .transpose()
            .wrap_err("SLOT_WINDOW_END must be HH:MM")?;
        let duration_minutes = var("SLOT_DURATION_MINUTES")
            .map(|value| value.parse::<u32>())
            .transpose()
            .wrap_err("SLOT_DURATION_MINUTES must be a whole number of minutes")?;
        let price_per_slot = var("SLOT_PRICE")
            .map(|value| value.parse::<u32>())
            .transpose()
            .wrap_err("SLOT_PRICE must be a non-negative whole number")?;

        let skip = match var("SLOT_SKIP") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| {
                    item.parse::<u32>()
                        .wrap_err_with(|| format!("Invalid sequence number in SLOT_SKIP: {}", item))
                })
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(Self {
            client,
            credential,
            draft: ScheduleDraft {
                ground_id: var("SLOT_GROUND_ID"),
                date,
                window_start,
                window_end,
                duration_minutes,
                price_per_slot,
            },
            skip,
        })
    }
}
