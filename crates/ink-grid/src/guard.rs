//! `CellGuard`: ownership of one cell's lock.

use ink_core::{Argb, InkColor, Position, TravelerId};
use parking_lot::MutexGuard;

use crate::Grid;

/// Held lock on one grid cell.  Dropping the guard releases the lock.
///
/// Painting is only possible through a guard, so the rule "only the holder
/// of a cell's lock writes that cell" is enforced by construction.
pub struct CellGuard<'g> {
    grid:  &'g Grid,
    pos:   Position,
    owner: TravelerId,
    _lock: MutexGuard<'g, ()>,
}

impl<'g> CellGuard<'g> {
    pub(crate) fn new(
        grid:  &'g Grid,
        pos:   Position,
        owner: TravelerId,
        lock:  MutexGuard<'g, ()>,
    ) -> Self {
        Self { grid, pos, owner, _lock: lock }
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// The grid this guard locks a cell of.
    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn owner(&self) -> TravelerId {
        self.owner
    }

    /// Saturating-add `delta` to the `color` channel of the held cell and
    /// return the new value.  Alpha is forced to its maximum.
    pub fn paint(&self, color: InkColor, delta: u8) -> Argb {
        let painted = self.grid.cell(self.pos).saturating_add(color, delta);
        self.grid.store(self.pos, painted);
        painted
    }
}

impl std::fmt::Debug for CellGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellGuard")
            .field("pos", &self.pos)
            .field("owner", &self.owner)
            .finish()
    }
}
