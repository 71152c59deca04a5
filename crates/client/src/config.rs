use eyre::{Result, WrapErr, eyre};
use std::env;

/// Connection settings for the slot backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the booking backend, without the `/api` prefix (required)
    pub backend_url: String,
    /// Per-request timeout in seconds (defaults to 15)
    pub timeout_seconds: u64,
}

impl ClientConfig {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            timeout_seconds: 15,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let backend_url = env::var("BACKEND_URL")
            .map_err(|_| eyre!("BACKEND_URL environment variable not set"))?;

        let timeout_seconds = match env::var("BACKEND_TIMEOUT_SECONDS") {
            Ok(value) => value
                .parse::<u64>()
                .wrap_err("BACKEND_TIMEOUT_SECONDS must be a whole number of seconds")?,
            Err(_) => 15,
        };

        Ok(Self {
            backend_url,
            timeout_seconds,
        })
    }

    /// Backend URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }
}
