//! # Reflow Testing
//!
//! Testing utilities and helpers for the Reflow unidirectional state
//! container:
//!
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`ObserverProbe`]: notification counter for subscription tests
//! - [`FixedClock`] / [`test_clock`]: deterministic time
//! - [`init_tracing`]: opt-in log output while debugging tests

pub mod observer_probe;

pub use observer_probe::ObserverProbe;
pub use reducer_test::ReducerTest;

use chrono::{DateTime, Duration, TimeZone, Utc};
use reflow_core::environment::Clock;
use std::sync::Mutex;

/// A clock that only moves when told to
///
/// Starts at a fixed instant and advances via [`FixedClock::advance`], so
/// tests that derive identifiers or timestamps from the clock are
/// deterministic.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a clock frozen at the given instant
    #[must_use]
    pub const fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Advance the clock by a duration
    ///
    /// # Panics
    ///
    /// Panics if another test thread panicked while holding the clock.
    #[allow(clippy::unwrap_used)] // Test utility; poisoning means a test already failed
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for FixedClock {
    #[allow(clippy::unwrap_used)] // Test utility; poisoning means a test already failed
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

/// A [`FixedClock`] frozen at 2024-01-01T00:00:00Z
///
/// # Panics
///
/// Never panics; the epoch constant is a valid timestamp.
#[must_use]
#[allow(clippy::unwrap_used)] // Constant is a valid timestamp
pub fn test_clock() -> FixedClock {
    FixedClock::new(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap())
}

/// Install a compact tracing subscriber honoring `RUST_LOG`
///
/// Call at the top of a test to see store dispatch logs. Safe to call more
/// than once; later calls are no-ops.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .try_init();
}
