//! `lift-gen` — passenger arrival rules for the liftsim simulator.
//!
//! An [`ArrivalRule`] decides *when* the next hall call appears and *which*
//! floors it connects.  Each rule privately tracks its next fire time,
//! re-randomized after every fire within a configured `[min, max]` interval;
//! rules with a peak window switch to a second (typically much shorter)
//! interval range while the simulated clock is inside the window.  The
//! result is a non-stationary, bursty arrival process — steady background
//! load plus a surge — rather than a flat Poisson stream.
//!
//! # Variants
//!
//! | Rule                | Pattern                                         |
//! |---------------------|-------------------------------------------------|
//! | [`LimitedFloorRule`]| uniform traffic within a floor band             |
//! | [`PeakTargetRule`]  | everyone heads to one floor (lobby rush)        |
//! | [`TimeWindowRule`]  | main source→target flow with a reverse trickle  |
//!
//! All randomness flows through a per-rule [`lift_core::SimRng`], so runs
//! are reproducible from a seed regardless of how many rules a model wires.

pub mod interval;
pub mod limited_floor;
pub mod peak_target;
pub mod rule;
pub mod time_window;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use interval::{IntervalRange, IntervalSampler, PeakWindow};
pub use limited_floor::LimitedFloorRule;
pub use peak_target::PeakTargetRule;
pub use rule::{ArrivalRule, HallRequest};
pub use time_window::TimeWindowRule;
