use thiserror::Error;

#[derive(Error, Debug)]
pub enum VenueError {
    #[error("Schedule configuration incomplete, missing: {}", .0.join(", "))]
    ConfigIncomplete(Vec<&'static str>),

    #[error("No slots can be generated with these settings")]
    NoSlotsGenerated,

    #[error("Slot #{sequence_number} was not created: {reason}")]
    CommitItemFailed { sequence_number: u32, reason: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Upstream error: {0}")]
    Upstream(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type VenueResult<T> = Result<T, VenueError>;
