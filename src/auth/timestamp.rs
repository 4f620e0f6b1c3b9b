//! Timestamp generation for bitFlyer request signing.
//!
//! bitFlyer rejects requests whose `ACCESS-TIMESTAMP` drifts too far from
//! server time, so the value must be read right before the request is sent.

use std::time::{SystemTime, UNIX_EPOCH};

/// Trait for providing the timestamp placed in `ACCESS-TIMESTAMP`.
pub trait TimestampProvider: Send + Sync {
    /// Current time in whole seconds since the UNIX epoch.
    fn unix_timestamp(&self) -> u64;
}

/// Timestamp provider backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock provider.
    pub fn new() -> Self {
        Self
    }
}

impl TimestampProvider for SystemClock {
    fn unix_timestamp(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

impl<F> TimestampProvider for F
where
    F: Fn() -> u64 + Send + Sync,
{
    fn unix_timestamp(&self) -> u64 {
        self()
    }
}
