//! `lift-core` — foundational types for the `liftsim` elevator dispatch
//! simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It
//! intentionally has no `lift-*` dependencies and minimal external ones
//! (only `rand` and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                        |
//! |---------------|-------------------------------------------------|
//! | [`ids`]       | `ElevatorId`, `PassengerId`                     |
//! | [`direction`] | `Direction` (motion state and call direction)   |
//! | [`passenger`] | `Passenger` value entity                        |
//! | [`time`]      | `SimClock`, `SimConfig`                         |
//! | [`rng`]       | `SimRng` (deterministic, seedable)              |
//! | [`error`]     | `LiftError`, `LiftResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.    |

pub mod direction;
pub mod error;
pub mod ids;
pub mod passenger;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use direction::Direction;
pub use error::{LiftError, LiftResult};
pub use ids::{ElevatorId, PassengerId};
pub use passenger::Passenger;
pub use rng::SimRng;
pub use time::{SimClock, SimConfig};
