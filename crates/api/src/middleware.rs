/// Bearer token extraction for endpoints that call the booking backend
pub mod auth;
/// Error to HTTP response mapping
pub mod error_handling;
