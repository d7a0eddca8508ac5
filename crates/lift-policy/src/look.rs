//! LOOK dispatch — SCAN that turns back early.

use lift_core::Direction;

use crate::policy::{BuildingView, ElevatorView, SchedulingPolicy};

/// Sweeps like SCAN but reverses as soon as no outstanding request —
/// onboard target or waiting origin — remains ahead in the current
/// direction; the car never travels to an extreme just to touch it.
///
/// Onboard requests take priority: while anyone is riding, only their
/// targets steer the sweep.  From `Idle` the tie-break is: onboard
/// requests first; else `Up` if any waiting origin lies above the car,
/// else `Down` if any lies below, else stay `Idle`.
#[derive(Debug, Default)]
pub struct Look;

impl Look {
    /// Sweep over onboard targets only.
    fn over_onboard(building: &BuildingView<'_>, elevator: &ElevatorView<'_>) -> Direction {
        let h = building.floor_height_m;
        let above = elevator.onboard_target_above(h);
        let below = elevator.onboard_target_below(h);
        Self::sweep(elevator.direction, above, below)
    }

    /// Sweep over waiting origins only.
    fn over_waiting(building: &BuildingView<'_>, elevator: &ElevatorView<'_>) -> Direction {
        let above = building.waiting_above(elevator.position_m);
        let below = building.waiting_below(elevator.position_m);
        Self::sweep(elevator.direction, above, below)
    }

    /// Continue while work remains ahead, reverse when it only remains
    /// behind, park when none remains at all.
    fn sweep(current: Direction, above: bool, below: bool) -> Direction {
        match current {
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
            // Idle tie-break: above wins.
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

impl SchedulingPolicy for Look {
    fn decide(&mut self, building: &BuildingView<'_>, elevator: &ElevatorView<'_>) -> Direction {
        if elevator.direction == Direction::DoorOpen {
            return Direction::DoorOpen;
        }

        if !elevator.onboard.is_empty() {
            return Self::over_onboard(building, elevator);
        }
        if !building.waiting.is_empty() {
            return Self::over_waiting(building, elevator);
        }
        Direction::Idle
    }
}
