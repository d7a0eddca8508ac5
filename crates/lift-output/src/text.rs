//! Plain-text event dump.
//!
//! Renders the raw event log, one line per event in recording order, to
//! any `io::Write` sink.  Meant for eyeballing a run, not for parsing —
//! use the CSV backend for that.

use std::io::Write;

use lift_sim::Event;

use crate::OutputResult;

/// Writes a human-readable line per event.
///
/// ```text
/// t=    4200ms call      p7   2->5  up    e=-  wait=0ms ride=0ms
/// t=    9800ms boarded   p7   2->5  up    e=0  wait=5600ms ride=0ms
/// ```
pub struct TextDump<W: Write> {
    out: W,
}

impl<W: Write> TextDump<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Dump `events` in the order given.
    pub fn write_events(&mut self, events: &[Event]) -> OutputResult<()> {
        for event in events {
            let p = &event.passenger;
            let elevator = match event.elevator {
                Some(id) => id.0.to_string(),
                None => "-".to_string(),
            };
            writeln!(
                self.out,
                "t={:>8}ms {:<9} p{:<5} {}->{}  {:<5} e={}  wait={}ms ride={}ms",
                event.at_ms,
                event.kind.as_str(),
                p.id.0,
                p.origin_floor,
                p.target_floor,
                p.call_direction.as_str(),
                elevator,
                p.waiting_ms,
                p.ride_ms,
            )?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Unwrap the inner sink (e.g. to inspect an in-memory buffer).
    pub fn into_inner(self) -> W {
        self.out
    }
}
