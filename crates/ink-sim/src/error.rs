use ink_core::{InkError, Position, TravelerId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] InkError),

    #[error("{what} length {got} does not match traveler count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{id} cannot start at {position}: {reason}")]
    Placement {
        id:       TravelerId,
        position: Position,
        reason:   &'static str,
    },

    #[error("failed to spawn {role} thread {index}: {source}")]
    Spawn {
        role:   &'static str,
        index:  usize,
        source: std::io::Error,
    },

    #[error("simulation already started")]
    AlreadyStarted,
}

pub type SimResult<T> = Result<T, SimError>;
