use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

/// Source of the current time.
pub trait TimeProvider: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

impl<P: TimeProvider + ?Sized> TimeProvider for Box<P> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<P: TimeProvider + ?Sized> TimeProvider for Arc<P> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// The system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeProvider;

impl SystemTimeProvider {
    pub const fn new() -> Self {
        Self
    }
}

impl TimeProvider for SystemTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
///
/// Shared between a test and the code under test (usually through an
/// `Arc`), so both mutators take `&self`.
#[derive(Debug)]
pub struct FixedTimeProvider {
    time: Mutex<DateTime<Utc>>,
}

impl FixedTimeProvider {
    pub fn new(time: DateTime<Utc>) -> Self {
        Self {
            time: Mutex::new(time),
        }
    }

    pub fn set_time(&self, time: DateTime<Utc>) {
        *self.time.lock().unwrap_or_else(PoisonError::into_inner) = time;
    }

    /// Move the clock by `delta`, which may be negative.
    pub fn advance(&self, delta: Duration) {
        let mut time = self.time.lock().unwrap_or_else(PoisonError::into_inner);
        *time += delta;
    }
}

impl TimeProvider for FixedTimeProvider {
    fn now(&self) -> DateTime<Utc> {
        *self.time.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
