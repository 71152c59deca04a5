//! # VenueBook Client
//!
//! Talks to the booking backend on behalf of a venue owner: creates slots,
//! lists a ground's slots, and commits a generated working set one entry at a
//! time.

pub mod api_client;
pub mod batch;
pub mod commit;
pub mod config;
pub mod mock;

pub use api_client::{ApiClient, Credential, SlotEndpoint};
pub use batch::BatchConfig;
pub use commit::commit;
pub use config::ClientConfig;
