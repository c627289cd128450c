//! The `LegPlanner` trait: how a traveler picks its next leg.

use std::collections::VecDeque;

use ink_core::{Heading, TravelerRng};

/// One straight-line move: a heading and a number of cells.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Leg {
    pub heading:  Heading,
    pub distance: u32,
}

impl Leg {
    pub fn new(heading: Heading, distance: u32) -> Self {
        Self { heading, distance }
    }
}

/// Pluggable leg selection.
///
/// A traveler calls [`choose_heading`](Self::choose_heading) and then
/// [`choose_distance`](Self::choose_distance) once per cycle, passing its own
/// RNG.  The worker clamps the returned distance to `span - 1`, so a planner
/// can never send a traveler off the grid.
pub trait LegPlanner: Send + 'static {
    /// New heading given the current one.
    fn choose_heading(&mut self, current: Heading, rng: &mut TravelerRng) -> Heading;

    /// Distance for a leg whose heading leaves `span` cells (counting the
    /// current one) before the edge.
    fn choose_distance(&mut self, span: u32, rng: &mut TravelerRng) -> u32;
}

/// Uniform choices: one of the two perpendicular headings, and a distance in
/// `0..span`.
#[derive(Copy, Clone, Debug, Default)]
pub struct RandomPlanner;

impl LegPlanner for RandomPlanner {
    fn choose_heading(&mut self, current: Heading, rng: &mut TravelerRng) -> Heading {
        let [a, b] = current.perpendicular();
        if rng.gen_bool(0.5) { a } else { b }
    }

    fn choose_distance(&mut self, span: u32, rng: &mut TravelerRng) -> u32 {
        if span == 0 { 0 } else { rng.gen_range(0..span) }
    }
}

/// Replays a fixed list of legs, then falls back to [`RandomPlanner`].
///
/// Used to reproduce a specific walk, e.g. steering a traveler onto a
/// corner.
#[derive(Clone, Debug, Default)]
pub struct ScriptedPlanner {
    legs:    VecDeque<Leg>,
    pending: Option<u32>,
}

impl ScriptedPlanner {
    pub fn new(legs: impl IntoIterator<Item = Leg>) -> Self {
        Self { legs: legs.into_iter().collect(), pending: None }
    }

    /// Legs not yet replayed.
    pub fn remaining(&self) -> usize {
        self.legs.len()
    }
}

impl LegPlanner for ScriptedPlanner {
    fn choose_heading(&mut self, current: Heading, rng: &mut TravelerRng) -> Heading {
        match self.legs.pop_front() {
            Some(leg) => {
                self.pending = Some(leg.distance);
                leg.heading
            }
            None => RandomPlanner.choose_heading(current, rng),
        }
    }

    fn choose_distance(&mut self, span: u32, rng: &mut TravelerRng) -> u32 {
        match self.pending.take() {
            Some(d) => d,
            None => RandomPlanner.choose_distance(span, rng),
        }
    }
}
