//! `lift-sim` — tick loop orchestrator for liftsim.
//!
//! # Four-phase tick loop
//!
//! ```text
//! while now_ms <= duration_ms:
//!   ① Arrivals  — poll every arrival rule; each hit mints a Passenger,
//!                 appends it to the waiting pool (FIFO), records a
//!                 PassengerCall, and notifies every elevator's policy.
//!   ② Decisions — ask each elevator's policy for a direction, in
//!                 registration order; only `direction` is written back.
//!   ③ Physics   — advance each elevator: constant-speed motion or door
//!                 countdown, then boarding/alighting with door dwell.
//!   ④ Clock     — advance by tick_interval_ms; waiting passengers gain
//!                 waiting time, riding passengers gain ride time.
//! ```
//!
//! The phase order is load-bearing: policies never observe a mid-tick
//! position, and motion never uses a direction staler than this tick's
//! calls.  Everything is sequential and deterministic given the rules'
//! seeds; registration order doubles as the iteration order everywhere.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_gen::LimitedFloorRule;
//! use lift_policy::Look;
//! use lift_sim::{Building, NoopObserver};
//!
//! let cfg = SimConfig::new(3_600_000, 10, 3.0, 100);
//! let mut building = Building::new(cfg)?;
//! building.register_elevator(1.5, Box::new(Look))?;
//! building.register_generator(Box::new(LimitedFloorRule::new(5_000, 20_000, 1, 10, 42)?));
//! building.run(&mut NoopObserver)?;
//! let served = building.recorder().count_of(lift_sim::EventKind::PassengerAlighted);
//! ```

pub mod building;
pub mod elevator;
pub mod error;
pub mod event;
pub mod observer;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use building::Building;
pub use elevator::Elevator;
pub use error::{SimError, SimResult};
pub use event::{Event, EventKind, EventRecorder, PassengerRecord};
pub use observer::{NoopObserver, SimObserver};
