//! `ink-tank` — the three capacity-bounded ink pools.
//!
//! | Module     | Contents                                             |
//! |------------|------------------------------------------------------|
//! | [`tank`]   | `InkTank` — one pool behind its own lock             |
//! | [`tanks`]  | `InkTanks` — the red, green, and blue pools together |
//!
//! A tank's lock is held only for the duration of one withdraw or refill
//! call and never while any other lock is taken, so tanks cannot take part
//! in a lock cycle with grid cells or traveler records.

pub mod tank;
pub mod tanks;


pub use tank::InkTank;
pub use tanks::InkTanks;
