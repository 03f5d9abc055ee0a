// SPDX-License-Identifier: MIT

//! Clock abstraction for testable time handling.

use chrono::{DateTime, Utc};

/// Canonical on-disk/wire timestamp format: `YYYY-MM-DD HH:MM:SS`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A clock that provides the current time.
///
/// Abstracted so the scheduler's interval/overlap tests can run against a
/// fake clock instead of sleeping in real time.
pub trait Clock: Clone + Send + Sync + 'static {
    fn now(&self) -> DateTime<Utc>;

    /// Format `now()` using the canonical timestamp format.
    fn now_string(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(any(test, feature = "test-support"))]
mod fake {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    /// Fake clock for testing with controllable time.
    #[derive(Clone)]
    pub struct FakeClock {
        current: Arc<Mutex<DateTime<Utc>>>,
    }

    impl FakeClock {
        pub fn new() -> Self {
            Self { current: Arc::new(Mutex::new(Utc::now())) }
        }

        pub fn advance(&self, duration: chrono::Duration) {
            let mut guard = self.current.lock();
            *guard += duration;
        }

        pub fn set(&self, at: DateTime<Utc>) {
            *self.current.lock() = at;
        }
    }

    impl Default for FakeClock {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Clock for FakeClock {
        fn now(&self) -> DateTime<Utc> {
            *self.current.lock()
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeClock;

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
