//! Time-bounded single-value cache.
//!
//! Readers that find the value stale simply refetch; concurrent refills are
//! allowed and the last write wins.

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::time::Duration;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to. Used in tests.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let step = chrono::Duration::from_std(by).unwrap_or_else(|_| chrono::Duration::zero());
        let mut now = self.now.lock();
        *now = now.checked_add_signed(step).unwrap_or(*now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    stored_at: DateTime<Utc>,
}

/// Holds one value for at most `ttl`.
#[derive(Debug)]
pub struct TtlCache<T, C = SystemClock> {
    entry: RwLock<Option<Entry<T>>>,
    ttl: Duration,
    clock: C,
}

impl<T: Clone> TtlCache<T, SystemClock> {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, SystemClock)
    }
}

impl<T: Clone, C: Clock> TtlCache<T, C> {
    pub fn with_clock(ttl: Duration, clock: C) -> Self {
        Self {
            entry: RwLock::new(None),
            ttl,
            clock,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached value if it is younger than the TTL.
    pub fn get(&self) -> Option<T> {
        let guard = self.entry.read();
        let entry = guard.as_ref()?;
        let age = self
            .clock
            .now()
            .signed_duration_since(entry.stored_at)
            .to_std()
            .unwrap_or(Duration::ZERO);
        (age < self.ttl).then(|| entry.value.clone())
    }

    pub fn put(&self, value: T) {
        *self.entry.write() = Some(Entry {
            value,
            stored_at: self.clock.now(),
        });
    }

    pub fn invalidate(&self) {
        *self.entry.write() = None;
    }
}
