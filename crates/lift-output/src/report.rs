//! Trip report derived from the event log.
//!
//! The report consumes only recorded events — it never reaches into the
//! building or elevator state, so it can be built during or after a run
//! without disturbing anything.

use lift_sim::{Event, EventKind, EventRecorder};

use crate::row::{PassengerTripRow, TripSummaryRow};
use crate::writer::ExportWriter;
use crate::OutputResult;

/// Completed-trip statistics for one run.
///
/// Built from the recorder's `PassengerAlighted` events; passengers still
/// waiting or riding when the run ended are not part of the report.
pub struct ServiceReport {
    trips: Vec<PassengerTripRow>,
}

impl ServiceReport {
    pub fn from_recorder(recorder: &EventRecorder) -> Self {
        let trips = recorder
            .events_of_kind(EventKind::PassengerAlighted)
            .map(trip_of)
            .collect();
        Self { trips }
    }

    /// Completed trips in alighting order.
    pub fn trips(&self) -> &[PassengerTripRow] {
        &self.trips
    }

    /// Aggregate means and maxima; all zero when no trip completed.
    pub fn summary(&self) -> TripSummaryRow {
        let n = self.trips.len() as u64;
        if n == 0 {
            return TripSummaryRow {
                completed_trips: 0,
                mean_waiting_ms: 0.0,
                mean_ride_ms:    0.0,
                mean_service_ms: 0.0,
                max_waiting_ms:  0,
                max_ride_ms:     0,
            };
        }

        let mut wait_sum = 0i64;
        let mut ride_sum = 0i64;
        let mut wait_max = 0i64;
        let mut ride_max = 0i64;
        for t in &self.trips {
            wait_sum += t.waiting_ms;
            ride_sum += t.ride_ms;
            wait_max = wait_max.max(t.waiting_ms);
            ride_max = ride_max.max(t.ride_ms);
        }

        TripSummaryRow {
            completed_trips: n,
            mean_waiting_ms: wait_sum as f64 / n as f64,
            mean_ride_ms:    ride_sum as f64 / n as f64,
            mean_service_ms: (wait_sum + ride_sum) as f64 / n as f64,
            max_waiting_ms:  wait_max,
            max_ride_ms:     ride_max,
        }
    }

    /// Push the whole report through an export backend and finish it.
    pub fn write_to<W: ExportWriter>(&self, writer: &mut W) -> OutputResult<()> {
        writer.write_trips(&self.trips)?;
        writer.write_summary(&self.summary())?;
        writer.finish()
    }
}

fn trip_of(event: &Event) -> PassengerTripRow {
    let p = &event.passenger;
    PassengerTripRow {
        passenger_id:    p.id.0,
        origin_floor:    p.origin_floor,
        target_floor:    p.target_floor,
        call_direction:  p.call_direction,
        elevator:        event.elevator.map_or(u32::MAX, |id| id.0),
        completed_at_ms: event.at_ms,
        waiting_ms:      p.waiting_ms,
        ride_ms:         p.ride_ms,
    }
}
