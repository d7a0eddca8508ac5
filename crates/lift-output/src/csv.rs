//! CSV export backend.
//!
//! Creates two files in the configured output directory:
//! - `passenger_trips.csv`
//! - `trip_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ExportWriter;
use crate::{OutputResult, PassengerTripRow, TripSummaryRow};

/// Writes the trip report to two CSV files.
pub struct CsvWriter {
    trips:    Writer<File>,
    summary:  Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trips = Writer::from_path(dir.join("passenger_trips.csv"))?;
        trips.write_record([
            "passenger_id",
            "origin_floor",
            "target_floor",
            "call_direction",
            "elevator",
            "completed_at_ms",
            "waiting_ms",
            "ride_ms",
            "service_ms",
        ])?;

        let mut summary = Writer::from_path(dir.join("trip_summary.csv"))?;
        summary.write_record([
            "completed_trips",
            "mean_waiting_ms",
            "mean_ride_ms",
            "mean_service_ms",
            "max_waiting_ms",
            "max_ride_ms",
        ])?;

        Ok(Self {
            trips,
            summary,
            finished: false,
        })
    }
}

impl ExportWriter for CsvWriter {
    fn write_trips(&mut self, rows: &[PassengerTripRow]) -> OutputResult<()> {
        for row in rows {
            self.trips.write_record(&[
                row.passenger_id.to_string(),
                row.origin_floor.to_string(),
                row.target_floor.to_string(),
                row.call_direction.as_str().to_string(),
                row.elevator.to_string(),
                row.completed_at_ms.to_string(),
                row.waiting_ms.to_string(),
                row.ride_ms.to_string(),
                row.service_ms().to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &TripSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.completed_trips.to_string(),
            format!("{:.1}", row.mean_waiting_ms),
            format!("{:.1}", row.mean_ride_ms),
            format!("{:.1}", row.mean_service_ms),
            row.max_waiting_ms.to_string(),
            row.max_ride_ms.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trips.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
