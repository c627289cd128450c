//! The three ink tanks of a run.

use std::sync::Arc;

use ink_core::{InkColor, SimConfig};

use crate::InkTank;

/// Red, green, and blue tanks, indexed by [`InkColor`].
///
/// Each tank is reference-counted so a worker can hold just the tank it
/// draws from or refills.
#[derive(Clone, Debug)]
pub struct InkTanks {
    tanks: [Arc<InkTank>; 3],
}

impl InkTanks {
    /// Tanks with the given per-colour levels and capacities.
    pub fn new(levels: [u32; 3], capacities: [u32; 3]) -> Self {
        Self {
            tanks: InkColor::ALL.map(|c| {
                Arc::new(InkTank::new(c, levels[c.index()], capacities[c.index()]))
            }),
        }
    }

    /// Tanks seeded from a run configuration.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.initial_levels, config.tank_capacities)
    }

    #[inline]
    pub fn get(&self, color: InkColor) -> &Arc<InkTank> {
        &self.tanks[color.index()]
    }

    /// Current red, green, and blue levels.  Each tank is read under its own
    /// lock, one after another, so the triple is not an atomic snapshot.
    pub fn levels(&self) -> [u32; 3] {
        InkColor::ALL.map(|c| self.get(c).level())
    }

    pub fn capacities(&self) -> [u32; 3] {
        InkColor::ALL.map(|c| self.get(c).capacity())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<InkTank>> {
        self.tanks.iter()
    }
}
