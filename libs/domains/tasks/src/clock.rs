use chrono::{DateTime, Utc};

/// Source of the current time for store-assigned timestamps.
///
/// Production code uses [`SystemClock`]; tests swap in a fixed clock to
/// make `created_at` deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
