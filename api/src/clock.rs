use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Source of the current time for handlers
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Wraps a clock so readings never go backwards.
///
/// Readings are truncated to whole milliseconds, the precision the health
/// endpoint reports.
#[derive(Debug)]
pub struct MonotonicClock<C = SystemClock> {
    inner: C,
    last_millis: AtomicI64,
}

impl<C: Clock> MonotonicClock<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            last_millis: AtomicI64::new(i64::MIN),
        }
    }
}

impl Default for MonotonicClock<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> Clock for MonotonicClock<C> {
    fn now(&self) -> DateTime<Utc> {
        let now = self.inner.now();
        let millis = now.timestamp_millis();
        let prev = self.last_millis.fetch_max(millis, Ordering::AcqRel);

        // Both values came from valid `DateTime`s, so converting back stays
        // within chrono's range and the fallback is never taken.
        DateTime::from_timestamp_millis(prev.max(millis)).unwrap_or(now)
    }
}
