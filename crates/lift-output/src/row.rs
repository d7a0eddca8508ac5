//! Plain data row types written by export backends.

use lift_core::Direction;

/// One completed passenger trip, derived from an alighted event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PassengerTripRow {
    pub passenger_id:    u64,
    pub origin_floor:    i32,
    pub target_floor:    i32,
    pub call_direction:  Direction,
    /// The elevator the trip completed in.
    pub elevator:        u32,
    /// Simulated time the passenger alighted.
    pub completed_at_ms: i64,
    pub waiting_ms:      i64,
    pub ride_ms:         i64,
}

impl PassengerTripRow {
    /// Total time in the system: hall wait plus ride.
    #[inline]
    pub fn service_ms(&self) -> i64 {
        self.waiting_ms + self.ride_ms
    }
}

/// Aggregate statistics over every completed trip of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripSummaryRow {
    pub completed_trips: u64,
    pub mean_waiting_ms: f64,
    pub mean_ride_ms:    f64,
    pub mean_service_ms: f64,
    pub max_waiting_ms:  i64,
    pub max_ride_ms:     i64,
}
