//! The passenger value entity.

use crate::{Direction, LiftError, LiftResult, PassengerId};

/// One passenger request, from hall call to alighting.
///
/// Lifecycle: minted by the building when an arrival rule fires; sits in
/// the waiting pool accumulating `waiting_ms`; moves into an elevator's
/// onboard list accumulating `ride_ms`; finally leaves the simulation as
/// an immutable snapshot inside a `PassengerAlighted` event.  At every
/// instant a passenger lives in exactly one of those three places.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passenger {
    /// Stable identity, unique within one run.
    pub id: PassengerId,

    /// Floor the hall call was made from (1-based).
    pub origin_floor: i32,

    /// Floor the passenger wants to reach (1-based, never `origin_floor`).
    pub target_floor: i32,

    /// `Up` iff `origin_floor < target_floor` — derived at creation.
    pub call_direction: Direction,

    /// Total time spent waiting in the hall, in milliseconds.
    pub waiting_ms: i64,

    /// Total time spent inside an elevator, in milliseconds.
    pub ride_ms: i64,
}

impl Passenger {
    /// Create a passenger.  Rejects `origin_floor == target_floor` — a
    /// request that goes nowhere is a generator bug, not a degenerate ride.
    pub fn new(id: PassengerId, origin_floor: i32, target_floor: i32) -> LiftResult<Self> {
        if origin_floor == target_floor {
            return Err(LiftError::InvalidPassenger {
                origin: origin_floor,
                target: target_floor,
            });
        }
        let call_direction = if origin_floor < target_floor {
            Direction::Up
        } else {
            Direction::Down
        };
        Ok(Self {
            id,
            origin_floor,
            target_floor,
            call_direction,
            waiting_ms: 0,
            ride_ms:    0,
        })
    }

    /// Height of the origin floor in meters.
    #[inline]
    pub fn origin_height_m(&self, floor_height_m: f64) -> f64 {
        (self.origin_floor - 1) as f64 * floor_height_m
    }

    /// Height of the target floor in meters.
    #[inline]
    pub fn target_height_m(&self, floor_height_m: f64) -> f64 {
        (self.target_floor - 1) as f64 * floor_height_m
    }

    /// Accumulate hall waiting time.
    #[inline]
    pub fn add_waiting(&mut self, ms: i64) {
        self.waiting_ms += ms;
    }

    /// Accumulate onboard ride time.
    #[inline]
    pub fn add_ride(&mut self, ms: i64) {
        self.ride_ms += ms;
    }
}
