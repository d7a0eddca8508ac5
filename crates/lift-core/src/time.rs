//! Simulation time model and run configuration.
//!
//! # Design
//!
//! Time is a monotonically increasing millisecond counter advanced in
//! fixed steps of `tick_interval_ms`.  Using an integer millisecond clock
//! as the canonical time unit means all wait/ride accumulator arithmetic
//! is exact (no floating-point drift) and every accumulated duration is a
//! multiple of the tick interval by construction.
//!
//! Only elevator *positions* are floating point; everything temporal is
//! `i64` milliseconds.

use std::fmt;

use crate::{LiftError, LiftResult};

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The master simulation clock.
///
/// Cheap to copy; advanced exactly once per tick by the building's loop.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Current simulated time in milliseconds since the run started.
    pub now_ms: i64,
    /// How many milliseconds one tick represents.
    pub tick_interval_ms: i64,
}

impl SimClock {
    pub fn new(tick_interval_ms: i64) -> Self {
        Self { now_ms: 0, tick_interval_ms }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.now_ms += self.tick_interval_ms;
    }

    /// Number of whole ticks elapsed since the run started.
    #[inline]
    pub fn ticks_elapsed(&self) -> i64 {
        self.now_ms / self.tick_interval_ms
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t={:.1}s", self.now_ms as f64 / 1000.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Construct with [`SimConfig::new`] and adjust the tolerance/dwell fields
/// as needed; `validate()` is called by the building before any tick runs
/// and fails fast — invalid values are never silently clamped.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total simulated duration in milliseconds.  The loop runs while
    /// `now_ms <= duration_ms` (inclusive).
    pub duration_ms: i64,

    /// Number of floors, numbered `1..=floors`.  Must be at least 2.
    pub floors: i32,

    /// Height of one floor in meters.  Floor `f` sits at
    /// `(f - 1) * floor_height_m`.
    pub floor_height_m: f64,

    /// Milliseconds per tick.
    pub tick_interval_ms: i64,

    /// Distance in meters within which an elevator counts as "at" a floor
    /// for boarding/alighting.  Absorbs discrete tick granularity.
    pub arrival_tolerance_m: f64,

    /// Base dwell added to the door timer on any tick where at least one
    /// passenger boards or alights.
    pub door_base_ms: i64,

    /// Additional dwell per boarding and per alighting passenger.
    pub door_per_passenger_ms: i64,
}

/// Observed defaults for the tolerance/dwell constants.  Kept configurable
/// rather than re-derived from physical first principles.
pub const DEFAULT_ARRIVAL_TOLERANCE_M: f64 = 0.3;
pub const DEFAULT_DOOR_BASE_MS: i64 = 1_000;
pub const DEFAULT_DOOR_PER_PASSENGER_MS: i64 = 300;

impl SimConfig {
    /// Create a config with the default tolerance and dwell constants.
    pub fn new(duration_ms: i64, floors: i32, floor_height_m: f64, tick_interval_ms: i64) -> Self {
        Self {
            duration_ms,
            floors,
            floor_height_m,
            tick_interval_ms,
            arrival_tolerance_m:   DEFAULT_ARRIVAL_TOLERANCE_M,
            door_base_ms:          DEFAULT_DOOR_BASE_MS,
            door_per_passenger_ms: DEFAULT_DOOR_PER_PASSENGER_MS,
        }
    }

    /// Check every construction parameter; called before the first tick.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floors < 2 {
            return Err(LiftError::Config(format!(
                "a building needs at least 2 floors, got {}",
                self.floors
            )));
        }
        if self.floor_height_m <= 0.0 {
            return Err(LiftError::Config(format!(
                "floor height must be positive, got {}",
                self.floor_height_m
            )));
        }
        if self.tick_interval_ms <= 0 {
            return Err(LiftError::Config(format!(
                "tick interval must be positive, got {}",
                self.tick_interval_ms
            )));
        }
        if self.duration_ms < 0 {
            return Err(LiftError::Config(format!(
                "duration must be non-negative, got {}",
                self.duration_ms
            )));
        }
        if self.arrival_tolerance_m <= 0.0 {
            return Err(LiftError::Config(format!(
                "arrival tolerance must be positive, got {}",
                self.arrival_tolerance_m
            )));
        }
        if self.door_base_ms < 0 || self.door_per_passenger_ms < 0 {
            return Err(LiftError::Config(
                "door dwell durations must be non-negative".into(),
            ));
        }
        Ok(())
    }

    /// Height of the top floor — the upper clamp bound for positions.
    #[inline]
    pub fn top_height_m(&self) -> f64 {
        (self.floors - 1) as f64 * self.floor_height_m
    }

    /// Height of floor `f` (1-based).
    #[inline]
    pub fn floor_height_of(&self, floor: i32) -> f64 {
        (floor - 1) as f64 * self.floor_height_m
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_interval_ms)
    }
}
