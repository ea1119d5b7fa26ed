//! Simulation time model.
//!
//! One step is one simulated day.  `Day` is a plain counter; there is no
//! wall-clock mapping because nothing in the hazard engine depends on time
//! of day.

use std::fmt;

// ── Day ───────────────────────────────────────────────────────────────────────

/// An absolute simulation day counter.  Day 0 is the first step.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Day(pub u64);

impl Day {
    pub const ZERO: Day = Day(0);

    /// The day after `self`.
    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }

    /// Days elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Day) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u64) -> Day {
        Day(self.0 + rhs)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {}", self.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically filled in by the application from its own parameter file and
/// passed to `MicrosimBuilder`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Days to simulate with `Microsim::run`.
    pub total_days: u64,

    /// Explicit RNG seed.  `None` derives a per-instance seed that differs
    /// between instances started concurrently (see [`crate::SimRng`]).
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,

    /// Call the snapshot observer every N days.  1 = every day, 0 = never.
    pub output_interval_days: u64,
}

impl SimConfig {
    /// The day at which `run` stops (exclusive upper bound).
    #[inline]
    pub fn end_day(&self) -> Day {
        Day(self.total_days)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_days:           10,
            seed:                 None,
            output_interval_days: 1,
        }
    }
}
