//! The `Grid` struct: cell colours and the per-cell lock table.

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use ink_core::{Argb, Position, TravelerId};
use parking_lot::Mutex;

use crate::CellGuard;

/// An R×C matrix of packed colours with one independent lock per cell.
///
/// `Grid` is `Sync`; share it between workers behind an `Arc`.
pub struct Grid {
    rows:  u32,
    cols:  u32,
    /// Row-major colour values.  Written only by the holder of the matching
    /// entry in `locks`.
    cells: Vec<AtomicU32>,
    /// Row-major cell locks.  Disjoint from any traveler-record lock.
    locks: Vec<Mutex<()>>,
}

impl Grid {
    /// Allocate a `rows × cols` grid with every cell [`Argb::BLANK`].  A zero
    /// dimension gives an empty grid.
    pub fn new(rows: u32, cols: u32) -> Self {
        let n = rows as usize * cols as usize;
        Self {
            rows,
            cols,
            cells: (0..n).map(|_| AtomicU32::new(Argb::BLANK.0)).collect(),
            locks: (0..n).map(|_| Mutex::new(())).collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    // ── Locking ───────────────────────────────────────────────────────────

    /// Block until the lock of `pos` is free, then take it on behalf of
    /// `owner`.
    ///
    /// # Panics
    /// Panics if `pos` lies outside the grid.
    pub fn lock_cell(&self, pos: Position, owner: TravelerId) -> CellGuard<'_> {
        let lock = self.locks[pos.offset(self.cols)].lock();
        CellGuard::new(self, pos, owner, lock)
    }

    /// Wait at most `timeout` for the lock of `pos`.
    pub fn try_lock_cell_for(
        &self,
        pos:     Position,
        owner:   TravelerId,
        timeout: Duration,
    ) -> Option<CellGuard<'_>> {
        self.locks[pos.offset(self.cols)]
            .try_lock_for(timeout)
            .map(|lock| CellGuard::new(self, pos, owner, lock))
    }

    /// Move a held lock from `from`'s cell to `to`: the destination is
    /// acquired first, and only then is the source released.  Stepping onto
    /// the held cell itself hands `from` back unchanged.
    pub fn step_lock<'g>(&'g self, from: CellGuard<'g>, to: Position) -> CellGuard<'g> {
        if to == from.position() {
            return from;
        }
        let next = self.lock_cell(to, from.owner());
        drop(from);
        next
    }

    /// Cancellable [`step_lock`](Self::step_lock).
    ///
    /// Retries a timed acquire of `to` every `poll`.  When `cancelled()`
    /// returns `true` after a failed attempt, gives the untouched source
    /// guard back as `Err` so the caller can release it and exit.
    pub fn step_lock_until<'g, F>(
        &'g self,
        from:      CellGuard<'g>,
        to:        Position,
        poll:      Duration,
        cancelled: F,
    ) -> Result<CellGuard<'g>, CellGuard<'g>>
    where
        F: Fn() -> bool,
    {
        if to == from.position() {
            return Ok(from);
        }
        loop {
            if let Some(next) = self.try_lock_cell_for(to, from.owner(), poll) {
                drop(from);
                return Ok(next);
            }
            if cancelled() {
                return Err(from);
            }
        }
    }

    /// `true` while some worker holds the lock of `pos`.  Racy; for
    /// diagnostics and tests only.
    pub fn is_locked(&self, pos: Position) -> bool {
        self.locks[pos.offset(self.cols)].is_locked()
    }

    // ── Colour access ─────────────────────────────────────────────────────

    /// Current colour of `pos`, read without taking the cell lock.
    #[inline]
    pub fn cell(&self, pos: Position) -> Argb {
        Argb(self.cells[pos.offset(self.cols)].load(Ordering::Relaxed))
    }

    /// Row-major copy of every cell, read without locks.
    pub fn cells(&self) -> Vec<Argb> {
        #[cfg(feature = "parallel")]
        {
            if self.cols == 0 {
                return Vec::new();
            }
            use rayon::prelude::*;
            self.cells
                .par_chunks(self.cols as usize)
                .flat_map_iter(|row| row.iter().map(|c| Argb(c.load(Ordering::Relaxed))))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.cells.iter().map(|c| Argb(c.load(Ordering::Relaxed))).collect()
        }
    }

    /// Overwrite one cell.  Only reachable through a [`CellGuard`], whose
    /// holder owns the cell's lock.
    pub(crate) fn store(&self, pos: Position, color: Argb) {
        self.cells[pos.offset(self.cols)].store(color.0, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish_non_exhaustive()
    }
}
