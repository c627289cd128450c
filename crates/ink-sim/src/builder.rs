//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;
use std::sync::Arc;

use ink_core::{Heading, InkColor, Position, SimConfig, SimRng, TravelerId};
use ink_grid::Grid;
use ink_tank::InkTanks;
use ink_worker::{
    LegPlanner, LiveCounter, RandomPlanner, ShutdownSignal, SleepInterval, TravelerState,
    TravelerTable,
};
use parking_lot::Mutex;

use crate::sim::PlannerFactory;
use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim<P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                           |
/// |-------------------|---------------------------------------------------|
/// | `.travelers(v)`   | Seeded: random colour, distinct interior cell, random heading |
/// | `.planner(f)`     | [`RandomPlanner`] for every traveler               |
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimBuilder::new(config)
///     .travelers(vec![TravelerState::new(TravelerId(0), InkColor::Red, Position::new(1, 1), Heading::North)])
///     .planner(|_| ScriptedPlanner::new([Leg::new(Heading::East, 2)]))
///     .build()?;
/// ```
pub struct SimBuilder<P: LegPlanner = RandomPlanner> {
    config:    SimConfig,
    travelers: Option<Vec<TravelerState>>,
    planner:   PlannerFactory<P>,
}

impl SimBuilder<RandomPlanner> {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            travelers: None,
            planner: Box::new(|_: TravelerId| RandomPlanner),
        }
    }
}

impl<P: LegPlanner> SimBuilder<P> {
    /// Supply the starting travelers (must be length `traveler_count`).
    ///
    /// Records are re-numbered by position in the vector.  Start cells must
    /// lie on the grid, be distinct, and not be corners; unlike seeded
    /// travelers they may sit on an edge.
    pub fn travelers(mut self, travelers: Vec<TravelerState>) -> Self {
        self.travelers = Some(travelers);
        self
    }

    /// Supply the planner each traveler is started with.  The factory is
    /// called once per traveler by [`Sim::start`].
    pub fn planner<Q, F>(self, factory: F) -> SimBuilder<Q>
    where
        Q: LegPlanner,
        F: FnMut(TravelerId) -> Q + Send + 'static,
    {
        SimBuilder {
            config:    self.config,
            travelers: self.travelers,
            planner:   Box::new(factory),
        }
    }

    /// Validate inputs, seed the world, and return a ready-to-start [`Sim`].
    pub fn build(self) -> SimResult<Sim<P>> {
        let config = self.config;
        config.validate()?;

        let travelers = match self.travelers {
            Some(t) => {
                if t.len() != config.traveler_count {
                    return Err(SimError::CountMismatch {
                        expected: config.traveler_count,
                        got:      t.len(),
                        what:     "travelers",
                    });
                }
                check_placements(&config, &t)?;
                t
            }
            None => seed_travelers(&config),
        };

        Ok(Sim {
            grid:      Arc::new(Grid::new(config.rows, config.cols)),
            tanks:     InkTanks::from_config(&config),
            records:   Arc::new(TravelerTable::new(travelers)),
            live:      Arc::new(LiveCounter::new(0)),
            interval:  Arc::new(SleepInterval::new(config.producer_sleep())),
            shutdown:  ShutdownSignal::new(),
            planner:   Mutex::new(self.planner),
            travelers: Vec::new(),
            producers: Vec::new(),
            started:   false,
            config,
        })
    }
}

/// Random colour, heading, and a distinct interior start cell per traveler.
///
/// `config` must already be valid, so there are at least as many interior
/// cells as travelers.
fn seed_travelers(config: &SimConfig) -> Vec<TravelerState> {
    let mut rng = SimRng::new(config.seed);
    let mut cells: Vec<Position> = (1..config.rows - 1)
        .flat_map(|r| (1..config.cols - 1).map(move |c| Position::new(r, c)))
        .collect();

    // Partial Fisher-Yates: the first `traveler_count` cells end up a
    // uniform sample without replacement.
    let n = config.traveler_count.min(cells.len());
    for i in 0..n {
        let j = rng.gen_range(i..cells.len());
        cells.swap(i, j);
    }

    cells[..n]
        .iter()
        .enumerate()
        .map(|(i, &position)| {
            let color = InkColor::from_index(rng.gen_range(0..InkColor::COUNT));
            let heading = Heading::from_index(rng.gen_range(0..Heading::ALL.len()));
            TravelerState::new(TravelerId(i as u32), color, position, heading)
        })
        .collect()
}

fn check_placements(config: &SimConfig, travelers: &[TravelerState]) -> SimResult<()> {
    let mut taken = HashSet::with_capacity(travelers.len());
    for (i, t) in travelers.iter().enumerate() {
        let id = TravelerId(i as u32);
        let reason = if t.position.row >= config.rows || t.position.col >= config.cols {
            Some("outside the grid")
        } else if t.position.is_corner(config.rows, config.cols) {
            Some("corner cells end a walk")
        } else if !taken.insert(t.position) {
            Some("cell already taken")
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(SimError::Placement { id, position: t.position, reason });
        }
    }
    Ok(())
}
