//! HTTP API surface.
//!
//! Handlers answer with `{"value": N}` on success and `{"error", "message"}`
//! on failure.

pub mod counter;
pub mod error;

pub use error::ApiError;
