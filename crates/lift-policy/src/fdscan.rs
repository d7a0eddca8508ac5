//! FD-SCAN — LOOK generalized over persistent direction-tagged call queues.

use lift_core::{Direction, Passenger, PassengerId};

use crate::policy::{BuildingView, ElevatorView, SchedulingPolicy};

/// One pending hall call as remembered by the policy.  Only the identity
/// and origin matter for steering; the full passenger stays in the
/// building's pool.
#[derive(Copy, Clone, Debug, PartialEq)]
struct HallCall {
    passenger: PassengerId,
    origin_height_m: f64,
}

/// Full-direction SCAN.  Where LOOK re-scans the global waiting pool
/// every tick, FD-SCAN keeps two persistent queues of pending hall calls
/// per elevator — `up_calls` and `down_calls`, tagged by the *caller's*
/// travel direction — and steers by them:
///
/// * riders onboard → LOOK-style sweep over their targets;
/// * empty and moving up → up-call above, else down-call above (serve an
///   opposite-direction call encountered en route), else down-call below,
///   else up-call below, else `Idle` — symmetric when moving down;
/// * idle → toward the nearest pending call of either queue.
///
/// Each decide starts by refreshing the queues: entries whose passenger
/// has left the waiting pool (boarded by *any* car) are dropped, and any
/// waiting passenger not yet queued is added to the queue matching their
/// call direction.  `on_passenger_call` inserts new calls eagerly so the
/// very next decide already sees them.
///
/// One `FdScan` instance is attached to one elevator, so the queues are
/// plain fields — no map keyed by elevator identity to desynchronize.
#[derive(Debug, Default)]
pub struct FdScan {
    up_calls: Vec<HallCall>,
    down_calls: Vec<HallCall>,
}

impl FdScan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pending calls remembered for this elevator (test hook).
    pub fn pending_calls(&self) -> (usize, usize) {
        (self.up_calls.len(), self.down_calls.len())
    }

    fn queue_for(&mut self, direction: Direction) -> &mut Vec<HallCall> {
        match direction {
            Direction::Down => &mut self.down_calls,
            _ => &mut self.up_calls,
        }
    }

    fn enqueue(&mut self, passenger: &Passenger, floor_height_m: f64) {
        let call = HallCall {
            passenger: passenger.id,
            origin_height_m: passenger.origin_height_m(floor_height_m),
        };
        let queue = self.queue_for(passenger.call_direction);
        if !queue.iter().any(|c| c.passenger == call.passenger) {
            queue.push(call);
        }
    }

    /// Drop satisfied calls, pick up unqueued waiting passengers.
    fn refresh(&mut self, building: &BuildingView<'_>) {
        let still_waiting =
            |c: &HallCall| building.waiting.iter().any(|p| p.id == c.passenger);
        self.up_calls.retain(still_waiting);
        self.down_calls.retain(still_waiting);

        for passenger in building.waiting {
            self.enqueue(passenger, building.floor_height_m);
        }
    }

    fn any_above(calls: &[HallCall], position_m: f64) -> bool {
        calls.iter().any(|c| c.origin_height_m > position_m)
    }

    fn any_below(calls: &[HallCall], position_m: f64) -> bool {
        calls.iter().any(|c| c.origin_height_m < position_m)
    }

    /// The pending call (either queue) nearest to the car.
    fn nearest_call(&self, position_m: f64) -> Option<HallCall> {
        self.up_calls
            .iter()
            .chain(self.down_calls.iter())
            .copied()
            .min_by(|a, b| {
                let da = (a.origin_height_m - position_m).abs();
                let db = (b.origin_height_m - position_m).abs();
                da.partial_cmp(&db).expect("floor heights are finite")
            })
    }

    /// Preference order over the hall-call queues for a car in motion.
    fn steer_empty(&self, current: Direction, position_m: f64) -> Direction {
        let up_above = Self::any_above(&self.up_calls, position_m);
        let up_below = Self::any_below(&self.up_calls, position_m);
        let down_above = Self::any_above(&self.down_calls, position_m);
        let down_below = Self::any_below(&self.down_calls, position_m);

        match current {
            Direction::Up => {
                if up_above || down_above {
                    Direction::Up
                } else if down_below || up_below {
                    Direction::Down
                } else {
                    Direction::Idle
                }
            }
            Direction::Down => {
                if down_below || up_below {
                    Direction::Down
                } else if up_above || down_above {
                    Direction::Up
                } else {
                    Direction::Idle
                }
            }
            // Idle: toward the nearest pending call of either direction.
            _ => match self.nearest_call(position_m) {
                Some(call) if call.origin_height_m > position_m => Direction::Up,
                Some(call) if call.origin_height_m < position_m => Direction::Down,
                _ => Direction::Idle,
            },
        }
    }

    /// LOOK-style sweep over onboard targets.
    fn steer_onboard(building: &BuildingView<'_>, elevator: &ElevatorView<'_>) -> Direction {
        let h = building.floor_height_m;
        let above = elevator.onboard_target_above(h);
        let below = elevator.onboard_target_below(h);
        match elevator.direction {
            Direction::Up => {
                if above {
                    Direction::Up
                } else if below {
                    Direction::Down
                } else {
                    Direction::Idle
                }
            }
            Direction::Down => {
                if below {
                    Direction::Down
                } else if above {
                    Direction::Up
                } else {
                    Direction::Idle
                }
            }
            _ => {
                if above {
                    Direction::Up
                } else if below {
                    Direction::Down
                } else {
                    Direction::Idle
                }
            }
        }
    }
}

impl SchedulingPolicy for FdScan {
    fn decide(&mut self, building: &BuildingView<'_>, elevator: &ElevatorView<'_>) -> Direction {
        if elevator.direction == Direction::DoorOpen {
            return Direction::DoorOpen;
        }

        self.refresh(building);

        if !elevator.onboard.is_empty() {
            Self::steer_onboard(building, elevator)
        } else {
            self.steer_empty(elevator.direction, elevator.position_m)
        }
    }

    fn on_passenger_call(
        &mut self,
        building: &BuildingView<'_>,
        _elevator: &ElevatorView<'_>,
        passenger: &Passenger,
    ) {
        self.enqueue(passenger, building.floor_height_m);
    }
}
