//! Full-sweep SCAN dispatch.

use lift_core::Direction;

use crate::policy::{BuildingView, ElevatorView, SchedulingPolicy};

/// Sweeps all the way to the building's physical extremes: the car never
/// reverses before reaching floor 1 or the top floor, no matter what
/// requests remain behind it, and reverses deterministically exactly upon
/// reaching an extreme.
///
/// Door stops reset the car to `Idle`, so the policy remembers the sweep
/// direction itself and resumes it once the doors close.  An idle car with
/// no sweep in progress starts one toward outstanding work (above first);
/// a car reaching an extreme with no outstanding request anywhere parks
/// `Idle` instead of bouncing between the ends forever.
#[derive(Debug)]
pub struct Scan {
    /// Direction of the sweep in progress; `Idle` when parked.
    sweep: Direction,
}

impl Scan {
    pub fn new() -> Self {
        Self { sweep: Direction::Idle }
    }

    /// Any request at all — an onboard target or a waiting origin?
    fn any_outstanding(building: &BuildingView<'_>, elevator: &ElevatorView<'_>) -> bool {
        !elevator.onboard.is_empty() || !building.waiting.is_empty()
    }

    /// Direction of the sweep to start from rest: toward any request
    /// above, else below, else stay put.
    fn bootstrap(building: &BuildingView<'_>, elevator: &ElevatorView<'_>) -> Direction {
        let h = building.floor_height_m;
        if elevator.onboard_target_above(h) || building.waiting_above(elevator.position_m) {
            Direction::Up
        } else if elevator.onboard_target_below(h) || building.waiting_below(elevator.position_m) {
            Direction::Down
        } else {
            Direction::Idle
        }
    }
}

impl Default for Scan {
    fn default() -> Self {
        Self::new()
    }
}

impl SchedulingPolicy for Scan {
    fn decide(&mut self, building: &BuildingView<'_>, elevator: &ElevatorView<'_>) -> Direction {
        if elevator.direction == Direction::DoorOpen {
            return Direction::DoorOpen;
        }

        // An idle car resumes the remembered sweep, if one is in progress.
        let heading = if elevator.direction.is_moving() {
            elevator.direction
        } else {
            self.sweep
        };

        let at_top = elevator.position_m >= building.top_height_m();
        let at_bottom = elevator.position_m <= 0.0;

        let next = match heading {
            // Reverse only at the extremes; elsewhere keep sweeping even if
            // nothing remains ahead.
            Direction::Up if at_top => {
                if Self::any_outstanding(building, elevator) {
                    Direction::Down
                } else {
                    Direction::Idle
                }
            }
            Direction::Down if at_bottom => {
                if Self::any_outstanding(building, elevator) {
                    Direction::Up
                } else {
                    Direction::Idle
                }
            }
            Direction::Up => Direction::Up,
            Direction::Down => Direction::Down,
            _ => Self::bootstrap(building, elevator),
        };
        self.sweep = next;
        next
    }
}
