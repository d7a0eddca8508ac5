//! Typed, append-only domain event log.
//!
//! The recorder is the *only* channel through which statistics leave the
//! simulation: exporters and reports consume `events_of_kind` /
//! `all_events` and never reach into building or elevator internals.
//! Nothing recorded is ever mutated or removed; the log lives as long as
//! the run.

use lift_core::{Direction, ElevatorId, Passenger, PassengerId};
use rustc_hash::FxHashMap;

// ── Event types ───────────────────────────────────────────────────────────────

/// What happened.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    /// A passenger appeared in the hall and pressed the call button.
    PassengerCall,
    /// A passenger stepped from the hall into an elevator.
    PassengerBoarded,
    /// A passenger reached their target floor and left the elevator.
    PassengerAlighted,
}

impl EventKind {
    /// Stable label for dumps and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::PassengerCall     => "call",
            EventKind::PassengerBoarded  => "boarded",
            EventKind::PassengerAlighted => "alighted",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of a passenger at the moment an event fired.
///
/// Alighted snapshots carry the final accumulators — once a passenger is
/// done, this record is the only place they continue to exist.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PassengerRecord {
    pub id:             PassengerId,
    pub origin_floor:   i32,
    pub target_floor:   i32,
    pub call_direction: Direction,
    pub waiting_ms:     i64,
    pub ride_ms:        i64,
}

impl From<&Passenger> for PassengerRecord {
    fn from(p: &Passenger) -> Self {
        Self {
            id:             p.id,
            origin_floor:   p.origin_floor,
            target_floor:   p.target_floor,
            call_direction: p.call_direction,
            waiting_ms:     p.waiting_ms,
            ride_ms:        p.ride_ms,
        }
    }
}

/// One immutable log entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub kind:      EventKind,
    /// Simulated time the event was recorded at.
    pub at_ms:     i64,
    /// The elevator involved; `None` for hall-side events.
    pub elevator:  Option<ElevatorId>,
    pub passenger: PassengerRecord,
}

// ── EventRecorder ─────────────────────────────────────────────────────────────

/// Append-only event log with a per-kind index.
///
/// `record` is O(1); `events_of_kind` walks the index lazily and yields
/// events in stable insertion order.
#[derive(Default)]
pub struct EventRecorder {
    events:  Vec<Event>,
    by_kind: FxHashMap<EventKind, Vec<usize>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.  Never fails, never reallocates the past.
    pub fn record(&mut self, event: Event) {
        self.by_kind
            .entry(event.kind)
            .or_default()
            .push(self.events.len());
        self.events.push(event);
    }

    /// All events of one kind, in insertion order.
    pub fn events_of_kind(&self, kind: EventKind) -> impl Iterator<Item = &Event> {
        self.by_kind
            .get(&kind)
            .into_iter()
            .flatten()
            .map(|&i| &self.events[i])
    }

    /// Number of events of one kind.
    pub fn count_of(&self, kind: EventKind) -> usize {
        self.by_kind.get(&kind).map_or(0, Vec::len)
    }

    /// The raw log, in recording order.
    pub fn all_events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
