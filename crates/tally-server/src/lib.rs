//! Tally server library entry.
//!
//! Wires config, application state and the HTTP router. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod api;
pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
