//! The `Sim` struct: worker lifecycle and rate control.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use ink_core::{InkColor, ProducerId, SimConfig, TravelerId};
use ink_grid::Grid;
use ink_tank::InkTanks;
use ink_worker::{
    LegPlanner, LiveCounter, ProducerWorker, RandomPlanner, ShutdownSignal, SleepInterval,
    TravelerExit, TravelerTable, TravelerWorker,
};
use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::{SimError, SimResult, SimSnapshot};

pub(crate) type PlannerFactory<P> = Box<dyn FnMut(TravelerId) -> P + Send>;

/// A running (or ready-to-run) simulation.
///
/// Owns the shared world (grid, tanks, traveler records, the two shared
/// scalars) and the join handles of every worker thread.  Dropping a `Sim`
/// shuts it down.
///
/// `Sim` is `Sync`: once started, a render loop and an input handler may
/// share `&Sim` for [`snapshot`](Self::snapshot) and the rate controls.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<P: LegPlanner = RandomPlanner> {
    pub(crate) config:    SimConfig,
    pub(crate) grid:      Arc<Grid>,
    pub(crate) tanks:     InkTanks,
    pub(crate) records:   Arc<TravelerTable>,
    pub(crate) live:      Arc<LiveCounter>,
    pub(crate) interval:  Arc<SleepInterval>,
    pub(crate) shutdown:  ShutdownSignal,
    /// Only `start` calls the factory; the lock keeps `Sim` `Sync`.
    pub(crate) planner:   Mutex<PlannerFactory<P>>,
    pub(crate) travelers: Vec<JoinHandle<TravelerExit>>,
    pub(crate) producers: Vec<JoinHandle<u64>>,
    pub(crate) started:   bool,
}

impl<P: LegPlanner> Sim<P> {
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Spawn one thread per traveler and per producer.
    ///
    /// If any spawn fails, the workers already running are stopped and
    /// joined before the error is returned.
    pub fn start(&mut self) -> SimResult<()> {
        if self.started {
            return Err(SimError::AlreadyStarted);
        }
        self.started = true;

        if let Err(e) = self.spawn_workers() {
            error!(error = %e, "startup failed; stopping workers already running");
            self.shutdown();
            return Err(e);
        }
        info!(
            travelers = self.travelers.len(),
            producers = self.producers.len(),
            rows = self.config.rows,
            cols = self.config.cols,
            "simulation started"
        );
        Ok(())
    }

    fn spawn_workers(&mut self) -> SimResult<()> {
        let planner = self.planner.get_mut();
        for i in 0..self.records.len() {
            let id = TravelerId(i as u32);
            let color = self.records.read(id).color;
            let worker = TravelerWorker::new(
                id,
                &self.config,
                Arc::clone(&self.grid),
                Arc::clone(self.tanks.get(color)),
                Arc::clone(&self.records),
                Arc::clone(&self.live),
                self.shutdown.clone(),
                planner(id),
            );
            // Counted before the thread exists so a fast death can never
            // drive the count below the number of travelers still running.
            self.live.increment();
            let live = &self.live;
            let handle = thread::Builder::new()
                .name(format!("traveler-{i}"))
                .spawn(move || worker.run())
                .map_err(|source| {
                    live.decrement();
                    SimError::Spawn { role: "traveler", index: i, source }
                })?;
            self.travelers.push(handle);
        }

        for k in 0..self.config.producer_count {
            let color = InkColor::from_index(k);
            let worker = ProducerWorker::new(
                ProducerId(k as u32),
                Arc::clone(self.tanks.get(color)),
                self.config.refill_amount,
                Arc::clone(&self.interval),
                self.shutdown.clone(),
            );
            let handle = thread::Builder::new()
                .name(format!("producer-{k}"))
                .spawn(move || worker.run())
                .map_err(|source| SimError::Spawn { role: "producer", index: k, source })?;
            self.producers.push(handle);
        }
        Ok(())
    }

    /// Signal every worker and join them all.  Travelers and producers are
    /// signalled at the same moment; each releases its locks on the way out.
    ///
    /// Idempotent; also called on drop.
    pub fn shutdown(&mut self) {
        self.shutdown.request();
        if self.travelers.is_empty() && self.producers.is_empty() {
            return;
        }

        let mut died = 0usize;
        for (i, handle) in self.travelers.drain(..).enumerate() {
            match handle.join() {
                Ok(TravelerExit::Died) => died += 1,
                Ok(TravelerExit::Shutdown) => {}
                Err(_) => error!(traveler = i, "traveler thread panicked"),
            }
        }
        let mut refills = 0u64;
        for (k, handle) in self.producers.drain(..).enumerate() {
            match handle.join() {
                Ok(n) => refills += n,
                Err(_) => error!(producer = k, "producer thread panicked"),
            }
        }
        info!(died, refills, live = self.live.get(), "simulation stopped");
    }

    /// `true` between a successful [`start`](Self::start) and
    /// [`shutdown`](Self::shutdown).
    pub fn is_running(&self) -> bool {
        self.started && !self.shutdown.is_requested()
    }

    // ── Rate control ──────────────────────────────────────────────────────

    /// Shorten the producer interval by the configured factor.  Refused
    /// (returns `false`) if the result would reach the configured floor.
    pub fn speed_up(&self) -> bool {
        let changed = self
            .interval
            .speed_up(self.config.speed_up_factor, self.config.min_producer_sleep_us);
        if changed {
            debug!(interval_us = self.interval.as_micros(), "producers sped up");
        } else {
            debug!(
                interval_us = self.interval.as_micros(),
                floor_us = self.config.min_producer_sleep_us,
                "speed-up refused at floor"
            );
        }
        changed
    }

    /// Lengthen the producer interval by the configured factor.  There is
    /// no ceiling.  Returns the new interval.
    pub fn slow_down(&self) -> Duration {
        let next = self.interval.slow_down(self.config.slow_down_factor);
        debug!(interval_us = self.interval.as_micros(), "producers slowed down");
        next
    }

    /// Add the configured refill amount to one tank, as a producer would.
    /// Returns `false` if the tank has no room.
    pub fn refill(&self, color: InkColor) -> bool {
        let ok = self.tanks.get(color).try_refill(self.config.refill_amount);
        debug!(%color, ok, level = self.tanks.get(color).level(), "manual refill");
        ok
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// A read-only view for a renderer.  Never blocks on a worker except for
    /// the brief per-record and per-tank locks the view takes as it reads.
    pub fn snapshot(&self) -> SimSnapshot<'_> {
        SimSnapshot::new(
            self.live.get(),
            self.tanks.levels(),
            self.tanks.capacities(),
            self.interval.get(),
            &self.grid,
            &self.records,
        )
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn tanks(&self) -> &InkTanks {
        &self.tanks
    }

    pub fn records(&self) -> &TravelerTable {
        &self.records
    }
}

impl<P: LegPlanner> Drop for Sim<P> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
