//! `ink-sim` — controller for the ink-trail simulation.
//!
//! # Lifecycle
//!
//! ```text
//! SimBuilder::new(config).build()   validate config, allocate the grid, the
//!                                   three tanks, and one record per traveler
//! Sim::start()                      one named thread per traveler and producer
//! Sim::speed_up() / slow_down()     rescale the shared producer interval
//! Sim::refill(color)                manual top-up of one tank
//! Sim::snapshot()                   read-only view for a renderer
//! Sim::shutdown()                   signal every worker, then join them all
//! ```
//!
//! Nothing here blocks on a worker except `shutdown`.  A renderer may call
//! [`Sim::snapshot`] on its own timer at any point in the run.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `serde`    | `Serialize`/`Deserialize` on `SimConfig` and `StatusReport`. |
//! | `parallel` | Grid copies in snapshots run on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ink_core::SimConfig;
//! use ink_sim::SimBuilder;
//!
//! let mut sim = SimBuilder::new(SimConfig::default()).build()?;
//! sim.start()?;
//! std::thread::sleep(std::time::Duration::from_secs(1));
//! println!("{} travelers alive", sim.snapshot().live_travelers());
//! sim.shutdown();
//! ```

pub mod builder;
pub mod error;
pub mod sim;
pub mod snapshot;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use sim::Sim;
pub use snapshot::{SimSnapshot, StatusReport};
