//! The `ExportWriter` trait implemented by all export backends.

use crate::{OutputResult, PassengerTripRow, TripSummaryRow};

/// Trait implemented by the CSV and plain-text exporters.
pub trait ExportWriter {
    /// Write a batch of completed trips.
    fn write_trips(&mut self, rows: &[PassengerTripRow]) -> OutputResult<()>;

    /// Write the run's aggregate summary row.
    fn write_summary(&mut self, row: &TripSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
