//! `lift-output` — result exporters for the liftsim simulator.
//!
//! Everything here is derived from the recorder's event log; nothing
//! reads live building or elevator state.  Two surfaces are provided:
//!
//! | Surface           | Output                                            |
//! |-------------------|---------------------------------------------------|
//! | [`ServiceReport`] | per-trip rows + aggregate summary                 |
//! | [`TextDump`]      | raw event log, one line per event                 |
//!
//! Report backends implement [`ExportWriter`]; the CSV backend creates
//! `passenger_trips.csv` and `trip_summary.csv`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, ServiceReport};
//!
//! building.run(&mut NoopObserver)?;
//! let report = ServiceReport::from_recorder(building.recorder());
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! report.write_to(&mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod report;
pub mod row;
pub mod text;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use report::ServiceReport;
pub use row::{PassengerTripRow, TripSummaryRow};
pub use text::TextDump;
pub use writer::ExportWriter;
