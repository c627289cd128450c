//! `ink-core` — foundational types for the ink-trail grid simulation.
//!
//! This crate is a dependency of every other `ink-*` crate.  It has no
//! `ink-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                               |
//! |---------------|--------------------------------------------------------|
//! | [`ids`]       | `TravelerId`, `ProducerId`                             |
//! | [`color`]     | `InkColor`, packed `Argb` cell value                   |
//! | [`heading`]   | `Heading`, `Position`                                  |
//! | [`rng`]       | `TravelerRng` (per-worker), `SimRng` (initialisation)  |
//! | [`config`]    | `SimConfig` — every tunable constant of a run          |
//! | [`error`]     | `InkError`, `InkResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod color;
pub mod config;
pub mod error;
pub mod heading;
pub mod ids;
pub mod rng;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::{Argb, InkColor};
pub use config::SimConfig;
pub use error::{InkError, InkResult};
pub use heading::{Heading, Position};
pub use ids::{ProducerId, TravelerId};
pub use rng::{SimRng, TravelerRng};
