//! `ink-grid` — the shared colour grid.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                      |
//! |------------|---------------------------------------------------------------|
//! | [`grid`]   | `Grid` — packed cell colours plus a parallel table of locks    |
//! | [`guard`]  | `CellGuard` — proof that the holder owns one cell's lock       |
//!
//! # Locking model
//!
//! Every cell has its own lock, stored in a table separate from the colour
//! values.  A traveler holds exactly the lock of the cell it occupies, and
//! moves by acquiring the destination lock *before* releasing the source, so
//! at every instant at least one of the two cells is held by the mover.
//!
//! Colour values are `AtomicU32`s: only the lock holder writes a cell, while
//! renderers read any cell at any time without locking.  Those reads may
//! observe a trail mid-update, which is harmless for drawing.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | [`Grid::cells`] copies rows on Rayon's thread pool.     |

pub mod grid;
pub mod guard;


pub use grid::Grid;
pub use guard::CellGuard;
