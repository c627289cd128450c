//! The traveler worker: pick a leg, buy the ink, walk it.
//!
//! # Cycle
//!
//! ```text
//! while live:
//!   ① Heading   — planner picks a new heading (normally perpendicular);
//!                 written to the record at once.
//!   ② Distance  — planner picks d < span (cells to the edge, this one
//!                 included).
//!   ③ Ink       — withdraw d units from this colour's tank; on refusal
//!                 the cycle ends with nothing moved.
//!   ④ Steps     — d times: paint the held cell, hand the cell lock to the
//!                 next cell (acquire next, release current), then update
//!                 the record's position under the record lock.
//!   ⑤ Corner    — landing on a corner clears `live` in the same record
//!                 update; the walk stops after that step.
//! ```

use std::sync::Arc;
use std::time::Duration;

use ink_core::{Heading, InkColor, Position, SimConfig, TravelerId, TravelerRng};
use ink_grid::{CellGuard, Grid};
use ink_tank::InkTank;
use tracing::{debug, trace};

use crate::{LegPlanner, LiveCounter, RandomPlanner, ShutdownSignal, TravelerTable};

/// What one pass through the cycle did.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CycleOutcome {
    /// The tank could not cover the leg; nothing moved.
    Starved { wanted: u32 },
    /// The whole leg was walked (possibly zero cells).
    Moved { steps: u32 },
    /// The traveler reached a corner after `steps` cells and is now dead.
    Died { steps: u32 },
    /// Shutdown interrupted the leg after `steps` cells.
    Cancelled { steps: u32 },
}

/// Why [`TravelerWorker::run`] returned.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TravelerExit {
    Died,
    Shutdown,
}

/// A traveler's thread body and private state.
///
/// The worker is the only writer of its record, so it keeps its own copy of
/// position and heading and only takes the record lock to publish changes.
pub struct TravelerWorker<P: LegPlanner = RandomPlanner> {
    id:          TravelerId,
    color:       InkColor,
    position:    Position,
    heading:     Heading,
    grid:        Arc<Grid>,
    tank:        Arc<InkTank>,
    records:     Arc<TravelerTable>,
    live:        Arc<LiveCounter>,
    shutdown:    ShutdownSignal,
    rng:         TravelerRng,
    planner:     P,
    paint_delta: u8,
    step_delay:  Duration,
    lock_poll:   Duration,
}

impl<P: LegPlanner> TravelerWorker<P> {
    /// Create the worker for record `id`.  Colour, position, and heading are
    /// taken from the record as it stands.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id:       TravelerId,
        config:   &SimConfig,
        grid:     Arc<Grid>,
        tank:     Arc<InkTank>,
        records:  Arc<TravelerTable>,
        live:     Arc<LiveCounter>,
        shutdown: ShutdownSignal,
        planner:  P,
    ) -> Self {
        let state = records.read(id);
        Self {
            id,
            color:       state.color,
            position:    state.position,
            heading:     state.heading,
            grid,
            tank,
            records,
            live,
            shutdown,
            rng:         TravelerRng::new(config.seed, id),
            planner,
            paint_delta: config.paint_delta,
            step_delay:  config.step_delay(),
            lock_poll:   config.lock_poll(),
        }
    }

    #[inline]
    pub fn id(&self) -> TravelerId {
        self.id
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// The grid this traveler walks on.
    pub fn grid(&self) -> &Arc<Grid> {
        &self.grid
    }

    /// Take the lock of the starting cell, waiting as long as it takes
    /// unless shutdown is requested first.
    pub fn claim<'g>(&self, grid: &'g Grid) -> Option<CellGuard<'g>> {
        loop {
            if let Some(guard) = grid.try_lock_cell_for(self.position, self.id, self.lock_poll) {
                return Some(guard);
            }
            if self.shutdown.is_requested() {
                return None;
            }
        }
    }

    /// Run one heading/distance/ink/steps cycle.
    ///
    /// `guard` must be the lock on the traveler's current cell; the lock on
    /// its (possibly new) current cell is handed back.
    pub fn run_cycle<'g>(&mut self, mut guard: CellGuard<'g>) -> (CellGuard<'g>, CycleOutcome) {
        debug_assert_eq!(guard.position(), self.position);
        let grid = guard.grid();
        let (rows, cols) = (grid.rows(), grid.cols());

        // ① Heading
        let heading = self.planner.choose_heading(self.heading, &mut self.rng);
        self.heading = heading;
        self.records.update(self.id, |r| r.heading = heading);

        // ② Distance
        let span = self.position.span(heading, rows, cols);
        let distance = self
            .planner
            .choose_distance(span, &mut self.rng)
            .min(span.saturating_sub(1));

        // ③ Ink
        if !self.tank.try_withdraw(distance) {
            return (guard, CycleOutcome::Starved { wanted: distance });
        }

        // ④ Steps
        let mut steps = 0;
        for _ in 0..distance {
            guard.paint(self.color, self.paint_delta);

            let Some(next) = self.position.step(heading, rows, cols) else {
                break;
            };
            let shutdown = &self.shutdown;
            guard = match grid.step_lock_until(guard, next, self.lock_poll, || {
                shutdown.is_requested()
            }) {
                Ok(g) => g,
                Err(g) => return (g, CycleOutcome::Cancelled { steps }),
            };
            self.position = next;
            steps += 1;

            // ⑤ Corner
            let dead = next.is_corner(rows, cols);
            self.records.update(self.id, |r| {
                r.position = next;
                if dead {
                    r.live = false;
                }
            });
            if dead {
                return (guard, CycleOutcome::Died { steps });
            }

            if self.shutdown.wait_timeout(self.step_delay) {
                return (guard, CycleOutcome::Cancelled { steps });
            }
        }
        (guard, CycleOutcome::Moved { steps })
    }

    /// Thread body: claim the start cell and cycle until death or shutdown.
    ///
    /// On death the live counter is decremented exactly once.  Every cell
    /// lock is released before this returns.
    pub fn run(mut self) -> TravelerExit {
        let grid = Arc::clone(&self.grid);
        let Some(mut guard) = self.claim(&grid) else {
            return TravelerExit::Shutdown;
        };
        debug!(traveler = %self.id, color = %self.color, at = %self.position, "traveler started");

        let exit = loop {
            if self.shutdown.is_requested() {
                break TravelerExit::Shutdown;
            }
            let (g, outcome) = self.run_cycle(guard);
            guard = g;
            match outcome {
                CycleOutcome::Starved { wanted } => {
                    trace!(traveler = %self.id, wanted, "out of ink");
                    std::thread::yield_now();
                }
                CycleOutcome::Moved { steps } => {
                    trace!(traveler = %self.id, steps, at = %self.position, "leg walked");
                }
                CycleOutcome::Died { steps } => {
                    let remaining = self.live.decrement();
                    debug!(
                        traveler = %self.id,
                        steps,
                        at = %self.position,
                        remaining,
                        "traveler reached a corner"
                    );
                    break TravelerExit::Died;
                }
                CycleOutcome::Cancelled { .. } => break TravelerExit::Shutdown,
            }
        };
        drop(guard);
        exit
    }
}
