//! Configuration error type shared by the `ink-*` crates.
//!
//! Resource exhaustion (an empty or full tank) is never an error: tank
//! operations report it as a `false` outcome and the caller retries on its
//! own schedule.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InkError {
    #[error("producer count {0} must be a multiple of 3 (one equal share per ink colour)")]
    ProducerCount(usize),

    #[error("grid {rows}x{cols} is too small; both dimensions must be at least 3")]
    GridTooSmall { rows: u32, cols: u32 },

    #[error("{travelers} travelers do not fit in the {interior} interior cells of the grid")]
    TooManyTravelers { travelers: usize, interior: usize },

    #[error("{color} tank starts at {level}, above its capacity {capacity}")]
    LevelAboveCapacity { color: crate::InkColor, level: u32, capacity: u32 },

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for configuration checks.
pub type InkResult<T> = Result<T, InkError>;
