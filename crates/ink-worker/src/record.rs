//! Traveler records and their lock table.

use ink_core::{Heading, InkColor, Position, TravelerId};
use parking_lot::{Mutex, MutexGuard};

/// Everything a renderer needs to draw one traveler.
///
/// `live` only ever goes from `true` to `false`.  A dead traveler's record
/// stays in the table for the rest of the run so a renderer can see that it
/// should no longer be drawn.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TravelerState {
    pub id:       TravelerId,
    pub color:    InkColor,
    pub position: Position,
    pub heading:  Heading,
    pub live:     bool,
}

impl TravelerState {
    /// A live traveler.
    pub fn new(id: TravelerId, color: InkColor, position: Position, heading: Heading) -> Self {
        Self { id, color, position, heading, live: true }
    }
}

/// One lock per traveler record, indexed by [`TravelerId`].
///
/// This table is separate from the grid's cell-lock table; a record lock is
/// never held while waiting on a cell lock.
#[derive(Debug)]
pub struct TravelerTable {
    records: Vec<Mutex<TravelerState>>,
}

impl TravelerTable {
    /// Build the table.  Record `i` is re-stamped with `TravelerId(i)` so a
    /// record's id is always the index of its lock.
    pub fn new(states: Vec<TravelerState>) -> Self {
        let records = states
            .into_iter()
            .enumerate()
            .map(|(i, mut s)| {
                s.id = TravelerId(i as u32);
                Mutex::new(s)
            })
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Copy one record under its lock.
    ///
    /// # Panics
    /// Panics if `id` is out of range.
    pub fn read(&self, id: TravelerId) -> TravelerState {
        *self.records[id.index()].lock()
    }

    /// Copy every record, each under its own lock in turn.  The result is
    /// consistent per traveler, not across travelers.
    pub fn read_all(&self) -> Vec<TravelerState> {
        self.records.iter().map(|r| *r.lock()).collect()
    }

    /// Hold one record's lock, e.g. for the duration of drawing it.
    pub fn lock(&self, id: TravelerId) -> MutexGuard<'_, TravelerState> {
        self.records[id.index()].lock()
    }

    /// Mutate one record under its lock.
    pub fn update<R>(&self, id: TravelerId, f: impl FnOnce(&mut TravelerState) -> R) -> R {
        f(&mut self.records[id.index()].lock())
    }

    /// Number of records still flagged live.
    pub fn live_count(&self) -> usize {
        self.records.iter().filter(|r| r.lock().live).count()
    }
}
