//! Process-wide counter.
//!
//! The value lives in a single `AtomicI64`. Every read-modify-write goes
//! through `fetch_update`, so concurrent callers never lose an update and the
//! policy check always sees the value it replaces.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use serde::Deserialize;

use crate::error::{Result, TallyError};

/// Whether a decrement may take the counter below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecrementPolicy {
    /// Decrement is unbounded; 0 -> -1 is allowed.
    #[default]
    AllowNegative,
    /// Reject a decrement that would produce a negative value.
    RejectBelowZero,
}

impl DecrementPolicy {
    fn permits(self, next: i64) -> bool {
        match self {
            DecrementPolicy::AllowNegative => true,
            DecrementPolicy::RejectBelowZero => next >= 0,
        }
    }
}

impl fmt::Display for DecrementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecrementPolicy::AllowNegative => f.write_str("allow_negative"),
            DecrementPolicy::RejectBelowZero => f.write_str("reject_below_zero"),
        }
    }
}

/// Single signed counter, starts at 0.
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicI64,
    policy: DecrementPolicy,
}

impl Counter {
    pub fn new(policy: DecrementPolicy) -> Self {
        Self {
            value: AtomicI64::new(0),
            policy,
        }
    }

    pub fn policy(&self) -> DecrementPolicy {
        self.policy
    }

    /// Current value. No side effect.
    pub fn get(&self) -> i64 {
        self.value.load(Ordering::SeqCst)
    }

    /// Add one and return the new value.
    pub fn increment(&self) -> Result<i64> {
        self.value
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |v| v.checked_add(1))
            .map(|prev| prev + 1)
            .map_err(|_| TallyError::Overflow)
    }

    /// Subtract one and return the new value.
    ///
    /// On failure the stored value is left untouched.
    pub fn decrement(&self) -> Result<i64> {
        let policy = self.policy;
        self.value
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |v| {
                v.checked_sub(1).filter(|&next| policy.permits(next))
            })
            .map(|prev| prev - 1)
            .map_err(|prev| match prev.checked_sub(1) {
                None => TallyError::Overflow,
                Some(_) => TallyError::BelowZero,
            })
    }

    /// Set the value to 0 unconditionally.
    pub fn reset(&self) -> i64 {
        self.value.store(0, Ordering::SeqCst);
        0
    }

    #[cfg(test)]
    fn set(&self, v: i64) {
        self.value.store(v, Ordering::SeqCst);
    }
}
