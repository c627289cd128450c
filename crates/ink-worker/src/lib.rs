//! `ink-worker` — the autonomous threads of the simulation.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`signal`]    | `ShutdownSignal` — cooperative, interruptible stop flag    |
//! | [`counters`]  | `LiveCounter`, `SleepInterval` — lock-free shared scalars  |
//! | [`record`]    | `TravelerState`, `TravelerTable` — per-traveler locked records |
//! | [`planner`]   | `LegPlanner` trait, `RandomPlanner`, `ScriptedPlanner`     |
//! | [`traveler`]  | `TravelerWorker` — heading/distance/ink/step state machine |
//! | [`producer`]  | `ProducerWorker` — refill-then-sleep loop                  |
//!
//! # Lock domains
//!
//! Three independent lock families exist and none is ever acquired while
//! waiting on another family in a way that could close a cycle:
//!
//! 1. grid cell locks (held by the traveler occupying the cell),
//! 2. traveler record locks (taken briefly by the owning worker and by
//!    renderers, never while a renderer holds anything else),
//! 3. tank locks (held only inside one withdraw/refill call).
//!
//! A traveler does update its own record while holding its current cell;
//! that is safe because record holders never wait on a cell lock.

pub mod counters;
pub mod planner;
pub mod producer;
pub mod record;
pub mod signal;
pub mod traveler;


pub use counters::{LiveCounter, SleepInterval};
pub use planner::{Leg, LegPlanner, RandomPlanner, ScriptedPlanner};
pub use producer::ProducerWorker;
pub use record::{TravelerState, TravelerTable};
pub use signal::ShutdownSignal;
pub use traveler::{CycleOutcome, TravelerExit, TravelerWorker};
