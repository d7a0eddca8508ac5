//! The `SchedulingPolicy` trait and the read-only views it decides over.

use lift_core::{Direction, ElevatorId, Passenger};

// ── BuildingView ──────────────────────────────────────────────────────────────

/// A read-only snapshot of the building state passed to every policy call.
///
/// Built fresh by the simulation loop for each decision, *before* any
/// elevator has moved this tick — policies never observe a mid-tick
/// position.
///
/// # Lifetimes
///
/// All borrows live for one decision call.  The loop never allows mutable
/// access to the waiting pool while a view is live.
pub struct BuildingView<'a> {
    /// Number of floors (`1..=floors` valid).
    pub floors: i32,

    /// Height of one floor in meters.
    pub floor_height_m: f64,

    /// Distance within which the physical layer counts a car as "at" a
    /// floor.  Policies use the same tolerance so decisions agree with
    /// boarding behavior.
    pub arrival_tolerance_m: f64,

    /// Current simulated time in milliseconds.
    pub now_ms: i64,

    /// The hall waiting pool, in call (FIFO) order.
    pub waiting: &'a [Passenger],
}

impl BuildingView<'_> {
    /// Height of the top floor — the upper travel bound.
    #[inline]
    pub fn top_height_m(&self) -> f64 {
        (self.floors - 1) as f64 * self.floor_height_m
    }

    /// Height of floor `f` (1-based).
    #[inline]
    pub fn floor_height_of(&self, floor: i32) -> f64 {
        (floor - 1) as f64 * self.floor_height_m
    }

    /// Any waiting passenger whose origin is strictly above `height_m`?
    pub fn waiting_above(&self, height_m: f64) -> bool {
        self.waiting
            .iter()
            .any(|p| p.origin_height_m(self.floor_height_m) > height_m)
    }

    /// Any waiting passenger whose origin is strictly below `height_m`?
    pub fn waiting_below(&self, height_m: f64) -> bool {
        self.waiting
            .iter()
            .any(|p| p.origin_height_m(self.floor_height_m) < height_m)
    }

    /// The waiting passenger whose origin is nearest to `height_m` by
    /// absolute distance (first wins ties — call order).
    pub fn nearest_waiting(&self, height_m: f64) -> Option<&Passenger> {
        self.waiting.iter().min_by(|a, b| {
            let da = (a.origin_height_m(self.floor_height_m) - height_m).abs();
            let db = (b.origin_height_m(self.floor_height_m) - height_m).abs();
            da.partial_cmp(&db).expect("floor heights are finite")
        })
    }
}

// ── ElevatorView ──────────────────────────────────────────────────────────────

/// A read-only snapshot of one elevator's state.
pub struct ElevatorView<'a> {
    pub id: ElevatorId,

    /// Continuous position in meters, within `[0, top_height_m]`.
    pub position_m: f64,

    /// Direction decided on the *previous* tick (or `Idle`/`DoorOpen`).
    pub direction: Direction,

    /// Onboard passengers in boarding order.  Index 0 is the oldest —
    /// FCFS treats it as the request currently being served.
    pub onboard: &'a [Passenger],
}

impl ElevatorView<'_> {
    /// Any onboard passenger whose target is strictly above the car?
    pub fn onboard_target_above(&self, floor_height_m: f64) -> bool {
        self.onboard
            .iter()
            .any(|p| p.target_height_m(floor_height_m) > self.position_m)
    }

    /// Any onboard passenger whose target is strictly below the car?
    pub fn onboard_target_below(&self, floor_height_m: f64) -> bool {
        self.onboard
            .iter()
            .any(|p| p.target_height_m(floor_height_m) < self.position_m)
    }

    /// The onboard passenger whose target is nearest to the car.
    pub fn nearest_onboard(&self, floor_height_m: f64) -> Option<&Passenger> {
        self.onboard.iter().min_by(|a, b| {
            let da = (a.target_height_m(floor_height_m) - self.position_m).abs();
            let db = (b.target_height_m(floor_height_m) - self.position_m).abs();
            da.partial_cmp(&db).expect("floor heights are finite")
        })
    }
}

// ── SchedulingPolicy ──────────────────────────────────────────────────────────

/// Pluggable per-elevator dispatch logic.
///
/// One policy instance is attached to each elevator at registration, so
/// stateful policies (FD-SCAN) own their bookkeeping outright — there is
/// no cross-elevator map to get wrong.
///
/// # Contract
///
/// * Return `DoorOpen` unchanged when `elevator.direction == DoorOpen`.
/// * Never observe-and-panic on empty pools; answer `Idle`.
/// * `decide` must be idempotent under unchanged state.
pub trait SchedulingPolicy {
    /// Choose the elevator's direction for this tick.
    ///
    /// The building writes the returned value into the elevator before the
    /// physics step; nothing else about the world may be affected (other
    /// than the policy's own private state).
    fn decide(&mut self, building: &BuildingView<'_>, elevator: &ElevatorView<'_>) -> Direction;

    /// Hook fired once per new hall call, before the next `decide`, for
    /// every elevator's policy — stateful policies use it to maintain
    /// per-elevator call queues.  Default: ignore.
    fn on_passenger_call(
        &mut self,
        _building: &BuildingView<'_>,
        _elevator: &ElevatorView<'_>,
        _passenger: &Passenger,
    ) {
    }
}
