//! Tally core: counter state, decrement policy, and the shared error type.
//!
//! This crate carries no HTTP or runtime dependencies. The server crate owns
//! one [`Counter`] and routes every request through its operations.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `TallyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;

pub use counter::{Counter, DecrementPolicy};
/// Shared result type.
pub use error::{Result, TallyError};
