//! Run configuration.
//!
//! `SimConfig` holds every tunable constant of a run.  `Default` reproduces
//! the classic setup: a 32×30 grid, 8 travelers, 6 producers, 50-unit tanks
//! starting at 20/10/40, and producers waking every 100 ms.
//!
//! Applications usually build one with struct-update syntax:
//!
//! ```rust
//! use ink_core::SimConfig;
//!
//! let cfg = SimConfig { traveler_count: 4, producer_count: 9, ..SimConfig::default() };
//! assert!(cfg.validate().is_ok());
//! ```

use std::time::Duration;

use crate::{InkColor, InkError, InkResult};

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Grid height in cells.  At least 3.
    pub rows: u32,

    /// Grid width in cells.  At least 3.
    pub cols: u32,

    /// Number of traveler workers.  Each starts on its own interior cell.
    pub traveler_count: usize,

    /// Number of producer workers.  Must be a multiple of 3; producer `k`
    /// refills the tank of colour `k % 3`.
    pub producer_count: usize,

    /// Capacity of the red, green, and blue tanks.
    pub tank_capacities: [u32; 3],

    /// Starting level of the red, green, and blue tanks.
    pub initial_levels: [u32; 3],

    /// Units a producer (or a manual refill) adds per attempt.
    pub refill_amount: u32,

    /// Amount added to a cell's channel each time a traveler paints it.
    pub paint_delta: u8,

    /// Pause after every traveler step, in milliseconds.  Paces the
    /// animation for a renderer; 0 runs flat out.
    pub step_delay_ms: u64,

    /// Initial producer sleep interval, in microseconds.
    pub producer_sleep_us: u64,

    /// Floor for the producer sleep interval, in microseconds.  Speeding up
    /// never brings the interval to or below this value.
    pub min_producer_sleep_us: u64,

    /// Multiplier applied to the sleep interval by a speed-up request.
    pub speed_up_factor: f64,

    /// Multiplier applied to the sleep interval by a slow-down request.
    pub slow_down_factor: f64,

    /// How often a traveler blocked on a cell lock re-checks for shutdown,
    /// in milliseconds.
    pub lock_poll_ms: u64,

    /// Master RNG seed for initial placement and per-traveler generators.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rows:                  32,
            cols:                  30,
            traveler_count:        8,
            producer_count:        6,
            tank_capacities:       [50; 3],
            initial_levels:        [20, 10, 40],
            refill_amount:         10,
            paint_delta:           64,
            step_delay_ms:         100,
            producer_sleep_us:     100_000,
            min_producer_sleep_us: 1_000,
            speed_up_factor:       0.8,
            slow_down_factor:      1.2,
            lock_poll_ms:          10,
            seed:                  0,
        }
    }
}

impl SimConfig {
    /// The dimensions and population of a run, every other field at its
    /// default.
    pub fn new(
        rows:            u32,
        cols:            u32,
        traveler_count:  usize,
        producer_count:  usize,
        tank_capacities: [u32; 3],
    ) -> Self {
        Self {
            rows,
            cols,
            traveler_count,
            producer_count,
            tank_capacities,
            ..Self::default()
        }
    }

    #[inline]
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }

    #[inline]
    pub fn producer_sleep(&self) -> Duration {
        Duration::from_micros(self.producer_sleep_us)
    }

    #[inline]
    pub fn lock_poll(&self) -> Duration {
        Duration::from_millis(self.lock_poll_ms.max(1))
    }

    /// Cells that touch no edge: the pool of legal start cells.
    pub fn interior_cells(&self) -> usize {
        self.rows.saturating_sub(2) as usize * self.cols.saturating_sub(2) as usize
    }

    #[inline]
    pub fn capacity(&self, color: InkColor) -> u32 {
        self.tank_capacities[color.index()]
    }

    #[inline]
    pub fn initial_level(&self, color: InkColor) -> u32 {
        self.initial_levels[color.index()]
    }

    /// Check every constraint a run depends on.  Returns the first violation.
    pub fn validate(&self) -> InkResult<()> {
        if self.producer_count % InkColor::COUNT != 0 {
            return Err(InkError::ProducerCount(self.producer_count));
        }
        if self.rows < 3 || self.cols < 3 {
            return Err(InkError::GridTooSmall { rows: self.rows, cols: self.cols });
        }
        let interior = self.interior_cells();
        if self.traveler_count > interior {
            return Err(InkError::TooManyTravelers {
                travelers: self.traveler_count,
                interior,
            });
        }
        for color in InkColor::ALL {
            let capacity = self.capacity(color);
            let level = self.initial_level(color);
            if capacity == 0 {
                return Err(InkError::Config(format!("{color} tank capacity must be positive")));
            }
            if level > capacity {
                return Err(InkError::LevelAboveCapacity { color, level, capacity });
            }
            if self.refill_amount > capacity {
                return Err(InkError::Config(format!(
                    "refill amount {} exceeds {color} tank capacity {capacity}",
                    self.refill_amount
                )));
            }
        }
        if !(self.speed_up_factor > 0.0 && self.speed_up_factor < 1.0) {
            return Err(InkError::Config(format!(
                "speed-up factor {} must lie strictly between 0 and 1",
                self.speed_up_factor
            )));
        }
        if !(self.slow_down_factor > 1.0 && self.slow_down_factor.is_finite()) {
            return Err(InkError::Config(format!(
                "slow-down factor {} must be a finite value above 1",
                self.slow_down_factor
            )));
        }
        if self.producer_sleep_us <= self.min_producer_sleep_us {
            return Err(InkError::Config(format!(
                "producer sleep {} µs must be above the {} µs floor",
                self.producer_sleep_us, self.min_producer_sleep_us
            )));
        }
        Ok(())
    }
}
