//! The `ArrivalRule` trait — the extension point for traffic models.

use lift_core::SimRng;

/// The floor pair produced by a firing rule.
///
/// The building mints the actual `Passenger` (assigning the next
/// `PassengerId` and deriving the call direction), so identity stays with
/// the single owner of the waiting pool.  Rules only choose floors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HallRequest {
    pub origin_floor: i32,
    pub target_floor: i32,
}

/// Pluggable passenger arrival behavior.
///
/// The building polls every registered rule once per tick, *before* the
/// decision phase:
///
/// 1. `should_fire(now)` — pure check against the rule's private
///    `next_fire_ms`.  A rule that has fallen behind still fires at most
///    once per tick.
/// 2. `generate(now, floors)` — returns the floor pair and re-randomizes
///    the next fire time.  Implementations must guarantee
///    `origin_floor != target_floor`.
pub trait ArrivalRule {
    /// `true` when the rule is due to emit a passenger at `now_ms`.
    fn should_fire(&self, now_ms: i64) -> bool;

    /// Produce the next hall request and schedule the following fire.
    ///
    /// `floors` is the building's floor count (`1..=floors` valid).
    fn generate(&mut self, now_ms: i64, floors: i32) -> HallRequest;
}

/// Uniform origin/target pair over `[min_floor, max_floor]` with the
/// shift-up trick guaranteeing `origin != target`: the target is sampled
/// from a range one floor short and bumped past the origin on collision.
pub(crate) fn distinct_pair(rng: &mut SimRng, min_floor: i32, max_floor: i32) -> HallRequest {
    let origin = rng.gen_range(min_floor..=max_floor);
    let mut target = rng.gen_range(min_floor..max_floor);
    if target >= origin {
        target += 1;
    }
    HallRequest { origin_floor: origin, target_floor: target }
}
