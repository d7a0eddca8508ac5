//! Per-elevator physical state machine: constant-speed motion, floor
//! arrival detection, and door dwell.

use lift_core::{Direction, ElevatorId, Passenger, SimConfig};

use crate::event::{Event, EventKind, EventRecorder, PassengerRecord};
use crate::{SimError, SimResult};

/// One elevator car.
///
/// Owned exclusively by the [`Building`][crate::Building]; policies see it
/// only through a read-only view and influence it only through the
/// `direction` field the building writes back after each decision.
#[derive(Debug)]
pub struct Elevator {
    /// Stable id, assigned at registration (registration order).
    pub id: ElevatorId,

    /// Constant travel speed in meters per second.
    pub speed_mps: f64,

    /// Continuous position in meters, clamped to `[0, top_height_m]`.
    pub position_m: f64,

    /// Current motion state.  `DoorOpen` is entered and left only here in
    /// the physical layer.
    pub direction: Direction,

    /// Remaining dwell while `DoorOpen`; counts down by one tick interval
    /// per tick.
    pub door_timer_ms: i64,

    /// Riding passengers in boarding order.
    pub onboard: Vec<Passenger>,
}

impl Elevator {
    pub fn new(id: ElevatorId, speed_mps: f64) -> Self {
        Self {
            id,
            speed_mps,
            position_m: 0.0,
            direction: Direction::Idle,
            door_timer_ms: 0,
            onboard: Vec::new(),
        }
    }

    /// Continuous floor coordinate (1-based): floor 1 is `1.0`, halfway
    /// between floors 2 and 3 is `2.5`.
    #[inline]
    pub fn floor_position(&self, cfg: &SimConfig) -> f64 {
        self.position_m / cfg.floor_height_m + 1.0
    }

    /// Advance one tick of physical state: motion or door countdown, then
    /// boarding/alighting against `waiting`, then door dwell bookkeeping.
    ///
    /// Called by the building after the decision phase; `now_ms` is the
    /// clock value *before* this tick's advance.
    pub(crate) fn step(
        &mut self,
        cfg: &SimConfig,
        now_ms: i64,
        waiting: &mut Vec<Passenger>,
        recorder: &mut EventRecorder,
    ) -> SimResult<()> {
        self.advance_position(cfg)?;

        // Snapshot-then-mutate: find everyone flowing through the doors
        // this tick before touching either collection.
        let exits = self.passengers_to_exit(cfg);
        let entries = passengers_to_enter(cfg, self.position_m, waiting);

        if !exits.is_empty() || !entries.is_empty() {
            // One base dwell per opening tick, plus a per-head increment
            // below — dwell scales with flow through the doors.
            self.door_timer_ms += cfg.door_base_ms;
            self.direction = Direction::DoorOpen;
        }

        // Alight.  Indices are ascending; each removal shifts the ones
        // still ahead down by the number already taken out.
        self.door_timer_ms += exits.len() as i64 * cfg.door_per_passenger_ms;
        for (removed, idx) in exits.into_iter().enumerate() {
            let passenger = self.onboard.remove(idx - removed);
            recorder.record(Event {
                kind:      EventKind::PassengerAlighted,
                at_ms:     now_ms,
                elevator:  Some(self.id),
                passenger: PassengerRecord::from(&passenger),
            });
        }

        // Board, preserving hall FIFO order — FCFS reads onboard[0] as the
        // request currently being served.
        self.door_timer_ms += entries.len() as i64 * cfg.door_per_passenger_ms;
        for (removed, idx) in entries.into_iter().enumerate() {
            let passenger = waiting.remove(idx - removed);
            recorder.record(Event {
                kind:      EventKind::PassengerBoarded,
                at_ms:     now_ms,
                elevator:  Some(self.id),
                passenger: PassengerRecord::from(&passenger),
            });
            self.onboard.push(passenger);
        }

        Ok(())
    }

    /// Motion for the tick.  Clamping never flips the direction — the next
    /// decision phase sees the car parked at the extreme and reassesses.
    fn advance_position(&mut self, cfg: &SimConfig) -> SimResult<()> {
        let dt_s = cfg.tick_interval_ms as f64 / 1000.0;
        match self.direction {
            Direction::Idle => {}
            Direction::Up => {
                self.position_m += self.speed_mps * dt_s;
                if self.position_m >= cfg.top_height_m() {
                    self.position_m = cfg.top_height_m();
                }
            }
            Direction::Down => {
                self.position_m -= self.speed_mps * dt_s;
                if self.position_m <= 0.0 {
                    self.position_m = 0.0;
                }
            }
            Direction::DoorOpen => {
                self.door_timer_ms -= cfg.tick_interval_ms;
                if self.door_timer_ms <= 0 {
                    self.door_timer_ms = 0;
                    self.direction = Direction::Idle;
                }
            }
        }

        // Clamping above makes this unreachable short of NaN speed or a
        // corrupted position; the single-owner invariant downstream
        // assumes it, so a violation aborts the run.
        if !(0.0..=cfg.top_height_m()).contains(&self.position_m) {
            return Err(SimError::PositionOutOfBounds {
                elevator:   self.id,
                position_m: self.position_m,
            });
        }
        Ok(())
    }

    /// Indices (ascending) of onboard passengers at their target floor.
    fn passengers_to_exit(&self, cfg: &SimConfig) -> Vec<usize> {
        self.onboard
            .iter()
            .enumerate()
            .filter(|(_, p)| {
                (p.target_height_m(cfg.floor_height_m) - self.position_m).abs()
                    < cfg.arrival_tolerance_m
            })
            .map(|(i, _)| i)
            .collect()
    }
}

/// Indices (ascending) of waiting passengers whose origin floor the car is
/// currently at.  Boarding is by position alone — a car stopped at the
/// floor takes everyone there, whatever direction they asked for.
fn passengers_to_enter(cfg: &SimConfig, position_m: f64, waiting: &[Passenger]) -> Vec<usize> {
    waiting
        .iter()
        .enumerate()
        .filter(|(_, p)| {
            (p.origin_height_m(cfg.floor_height_m) - position_m).abs() < cfg.arrival_tolerance_m
        })
        .map(|(i, _)| i)
        .collect()
}
