//! Run-wide scalars shared without a lock.
//!
//! Both counters are single machine words updated atomically.  Readers (the
//! renderer, producers) may see a value that is a moment out of date, which
//! is all they need.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Duration;

// ── LiveCounter ───────────────────────────────────────────────────────────────

/// Number of travelers that have been started and have not yet died.
#[derive(Debug, Default)]
pub struct LiveCounter(AtomicUsize);

impl LiveCounter {
    pub fn new(initial: usize) -> Self {
        Self(AtomicUsize::new(initial))
    }

    #[inline]
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }

    pub fn increment(&self) {
        self.0.fetch_add(1, Ordering::AcqRel);
    }

    /// Decrement, saturating at zero.  Returns the new count.
    pub fn decrement(&self) -> usize {
        match self
            .0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_sub(1))
        {
            Ok(prev) => prev - 1,
            Err(_) => 0,
        }
    }
}

// ── SleepInterval ─────────────────────────────────────────────────────────────

/// The producers' shared sleep interval, in microseconds.
///
/// Producers read it fresh every cycle, so a change takes effect on each
/// producer's next sleep, never in the middle of one.
#[derive(Debug)]
pub struct SleepInterval {
    micros: AtomicU64,
}

impl SleepInterval {
    pub fn new(initial: Duration) -> Self {
        Self { micros: AtomicU64::new(duration_micros(initial)) }
    }

    #[inline]
    pub fn get(&self) -> Duration {
        Duration::from_micros(self.as_micros())
    }

    #[inline]
    pub fn as_micros(&self) -> u64 {
        self.micros.load(Ordering::Acquire)
    }

    /// Scale the interval by `factor` (< 1), rounding down, unless the
    /// result would be at or below `floor_us` or would not shrink the
    /// interval.  Returns `true` only if the interval changed.
    pub fn speed_up(&self, factor: f64, floor_us: u64) -> bool {
        self.micros
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |cur| {
                let next = shrink(cur, factor);
                (next > floor_us && next < cur).then_some(next)
            })
            .is_ok()
    }

    /// Scale the interval by `factor` (> 1), growing it by at least one
    /// microsecond, with no upper bound other than `u64::MAX`.  Returns the
    /// new interval.
    pub fn slow_down(&self, factor: f64) -> Duration {
        let prev = self
            .micros
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |cur| Some(grow(cur, factor)))
            .unwrap_or_else(|cur| cur);
        Duration::from_micros(grow(prev, factor))
    }
}

/// `cur * factor`, rounded down.
#[inline]
fn shrink(cur: u64, factor: f64) -> u64 {
    (cur as f64 * factor).floor() as u64
}

/// `cur * factor`, rounded, and never less than `cur + 1`.  Float-to-int
/// `as` saturates, so a huge product pins at `u64::MAX` instead of wrapping.
#[inline]
fn grow(cur: u64, factor: f64) -> u64 {
    ((cur as f64 * factor).round() as u64).max(cur.saturating_add(1))
}

#[inline]
fn duration_micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}
