use chrono::{DateTime, Duration, Utc};
use parking_lot::Mutex;

/// Timestamp source consumed by the store when a record is first created.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic clock for tests: starts at a fixed instant and advances by
/// one millisecond per call, so consecutive records get strictly increasing
/// timestamps.
pub struct FixedClock {
    next: Mutex<DateTime<Utc>>,
    step: Duration,
}

impl FixedClock {
    pub fn new() -> Self {
        FixedClock::starting_at(DateTime::UNIX_EPOCH)
    }

    pub fn starting_at(start: DateTime<Utc>) -> Self {
        FixedClock {
            next: Mutex::new(start),
            step: Duration::milliseconds(1),
        }
    }
}

impl Default for FixedClock {
    fn default() -> Self {
        FixedClock::new()
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock();
        let now = *next;
        *next = now + self.step;
        now
    }
}
