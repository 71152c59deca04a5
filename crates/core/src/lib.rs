//! # VenueBook Core
//!
//! Domain types and pure logic shared by the VenueBook crates: the slot
//! schedule generator, the working set of generated candidates, the batch flow
//! state machine and the owner-screen navigation model.

pub mod errors;
pub mod flow;
pub mod generator;
pub mod models;

pub use errors::{VenueError, VenueResult};
pub use generator::{WorkingSet, generate, generate_batch, generate_slots};
