//! `lift-policy` — elevator scheduling policies for liftsim.
//!
//! A [`SchedulingPolicy`] is asked once per elevator per tick which way
//! the car should head next.  It sees the world through two read-only
//! views ([`BuildingView`], [`ElevatorView`]) and answers with a
//! [`lift_core::Direction`]; the building writes the answer back.  That
//! narrow shape makes the write surface of a policy exactly one field,
//! by construction.
//!
//! # The five algorithms
//!
//! | Policy     | Strategy                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`Fcfs`]   | serve the single oldest request, strictly in call order   |
//! | [`Scan`]   | sweep to the building extremes, reverse only there        |
//! | [`Look`]   | sweep while requests remain ahead, reverse early          |
//! | [`Sstf`]   | chase the nearest request (fast, can starve far calls)    |
//! | [`FdScan`] | LOOK over persistent direction-tagged hall-call queues    |
//!
//! # Contract
//!
//! * `decide` never touches `DoorOpen` — dwell is the physical layer's
//!   business; a policy asked to decide for a `DoorOpen` car returns
//!   `DoorOpen` unchanged.
//! * `decide` is idempotent: called twice with unchanged state it returns
//!   the same direction (tests rely on this).
//! * "No candidate" is not an error — every policy answers `Idle` when
//!   nothing needs serving.

pub mod fcfs;
pub mod fdscan;
pub mod look;
pub mod policy;
pub mod scan;
pub mod sstf;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use fcfs::Fcfs;
pub use fdscan::FdScan;
pub use look::Look;
pub use policy::{BuildingView, ElevatorView, SchedulingPolicy};
pub use scan::Scan;
pub use sstf::Sstf;
