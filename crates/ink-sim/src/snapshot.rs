//! Read-only views of a running simulation.

use std::time::Duration;

use ink_core::{Argb, InkColor, Position};
use ink_grid::Grid;
use ink_worker::{TravelerState, TravelerTable};

/// What a renderer needs for one frame.
///
/// The scalars are copied when the snapshot is taken.  The grid and the
/// traveler records are borrowed, so reading them later in the frame sees
/// the values as they are then: cell reads are lock-free and may catch a
/// trail mid-update, while record reads take each record's own lock.
#[derive(Debug, Clone, Copy)]
pub struct SimSnapshot<'a> {
    live_travelers: usize,
    tank_levels:    [u32; 3],
    tank_capacity:  [u32; 3],
    producer_sleep: Duration,
    grid:           &'a Grid,
    records:        &'a TravelerTable,
}

impl<'a> SimSnapshot<'a> {
    pub(crate) fn new(
        live_travelers: usize,
        tank_levels:    [u32; 3],
        tank_capacity:  [u32; 3],
        producer_sleep: Duration,
        grid:           &'a Grid,
        records:        &'a TravelerTable,
    ) -> Self {
        Self { live_travelers, tank_levels, tank_capacity, producer_sleep, grid, records }
    }

    #[inline]
    pub fn live_travelers(&self) -> usize {
        self.live_travelers
    }

    #[inline]
    pub fn tank_level(&self, color: InkColor) -> u32 {
        self.tank_levels[color.index()]
    }

    #[inline]
    pub fn tank_levels(&self) -> [u32; 3] {
        self.tank_levels
    }

    #[inline]
    pub fn tank_capacities(&self) -> [u32; 3] {
        self.tank_capacity
    }

    #[inline]
    pub fn producer_sleep(&self) -> Duration {
        self.producer_sleep
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Current colour of one cell, read without locking.
    pub fn cell(&self, pos: Position) -> Argb {
        self.grid.cell(pos)
    }

    /// Every traveler record, each read under its own lock.  Dead travelers
    /// are included with `live == false`.
    pub fn travelers(&self) -> Vec<TravelerState> {
        self.records.read_all()
    }

    /// Owned summary of this snapshot, suitable for printing or
    /// serialising.
    pub fn report(&self) -> StatusReport {
        let cells = self.grid.cells();
        StatusReport {
            rows:              self.grid.rows(),
            cols:              self.grid.cols(),
            live_travelers:    self.live_travelers,
            tank_levels:       self.tank_levels,
            tank_capacities:   self.tank_capacity,
            producer_sleep_us: u64::try_from(self.producer_sleep.as_micros()).unwrap_or(u64::MAX),
            painted_cells:     cells.iter().filter(|&&c| c != Argb::BLANK).count(),
            travelers:         self.travelers(),
        }
    }
}

/// Plain-data status of a run, detached from the live world.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatusReport {
    pub rows:              u32,
    pub cols:              u32,
    pub live_travelers:    usize,
    /// Red, green, blue.
    pub tank_levels:       [u32; 3],
    pub tank_capacities:   [u32; 3],
    pub producer_sleep_us: u64,
    /// Cells that have been painted at least once.
    pub painted_cells:     usize,
    pub travelers:         Vec<TravelerState>,
}
