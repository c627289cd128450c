//! A single bounded ink pool.

use ink_core::InkColor;
use parking_lot::Mutex;

/// Integer ink level in `[0, capacity]` guarded by one exclusive lock.
///
/// Both mutating operations are all-or-nothing: they either apply the whole
/// amount or leave the level untouched and return `false`.  Neither retries;
/// callers decide what a refusal means.
#[derive(Debug)]
pub struct InkTank {
    color:    InkColor,
    capacity: u32,
    level:    Mutex<u32>,
}

impl InkTank {
    /// A tank holding `level` units.  `level` is clamped to `capacity`.
    pub fn new(color: InkColor, level: u32, capacity: u32) -> Self {
        Self {
            color,
            capacity,
            level: Mutex::new(level.min(capacity)),
        }
    }

    #[inline]
    pub fn color(&self) -> InkColor {
        self.color
    }

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Current level.  Takes the lock briefly, so the value is consistent
    /// but may be stale by the time the caller looks at it.
    pub fn level(&self) -> u32 {
        *self.level.lock()
    }

    /// Remove `amount` units if at least that much is present.
    pub fn try_withdraw(&self, amount: u32) -> bool {
        let mut level = self.level.lock();
        if *level >= amount {
            *level -= amount;
            true
        } else {
            false
        }
    }

    /// Add `amount` units if the result stays within capacity.
    pub fn try_refill(&self, amount: u32) -> bool {
        let mut level = self.level.lock();
        match level.checked_add(amount) {
            Some(next) if next <= self.capacity => {
                *level = next;
                true
            }
            _ => false,
        }
    }
}
