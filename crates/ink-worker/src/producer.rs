//! The producer worker: top up one tank, sleep, repeat.

use std::sync::Arc;

use ink_core::{InkColor, ProducerId};
use ink_tank::InkTank;
use tracing::{debug, trace};

use crate::{ShutdownSignal, SleepInterval};

/// Refills one tank by a fixed amount every sleep interval, for the life of
/// the run.
pub struct ProducerWorker {
    id:       ProducerId,
    tank:     Arc<InkTank>,
    amount:   u32,
    interval: Arc<SleepInterval>,
    shutdown: ShutdownSignal,
}

impl ProducerWorker {
    pub fn new(
        id:       ProducerId,
        tank:     Arc<InkTank>,
        amount:   u32,
        interval: Arc<SleepInterval>,
        shutdown: ShutdownSignal,
    ) -> Self {
        Self { id, tank, amount, interval, shutdown }
    }

    #[inline]
    pub fn id(&self) -> ProducerId {
        self.id
    }

    #[inline]
    pub fn color(&self) -> InkColor {
        self.tank.color()
    }

    /// One refill attempt.  `false` means the tank had no room; that is
    /// expected and simply retried next cycle.
    pub fn run_cycle(&self) -> bool {
        self.tank.try_refill(self.amount)
    }

    /// Thread body: refill, then sleep for the interval as it stands now.
    /// Returns the number of successful refills once shutdown is requested.
    pub fn run(self) -> u64 {
        debug!(producer = %self.id, color = %self.color(), "producer started");
        let mut refills = 0u64;
        while !self.shutdown.is_requested() {
            if self.run_cycle() {
                refills += 1;
                trace!(producer = %self.id, level = self.tank.level(), "refilled");
            }
            if self.shutdown.wait_timeout(self.interval.get()) {
                break;
            }
        }
        debug!(producer = %self.id, refills, "producer stopped");
        refills
    }
}
