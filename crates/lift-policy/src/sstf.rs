//! Shortest-seek-time-first dispatch.

use lift_core::Direction;

use crate::policy::{BuildingView, ElevatorView, SchedulingPolicy};

/// Always chases the single nearest unresolved request by absolute height
/// distance — the disk-scheduling SSTF transplanted to a shaft.  Onboard
/// targets take priority whenever anyone is riding; otherwise the nearest
/// waiting origin wins.  When the car is already within the arrival
/// tolerance of the nearest waiting passenger, direction comes from that
/// passenger's *own target*, so the car rolls straight into the ride
/// instead of idling at the pickup floor.
///
/// Known weakness, kept deliberately: under continuous nearby arrivals a
/// far request can be starved indefinitely.  The regression tests pin
/// this property down rather than "fixing" it.
#[derive(Debug, Default)]
pub struct Sstf;

impl SchedulingPolicy for Sstf {
    fn decide(&mut self, building: &BuildingView<'_>, elevator: &ElevatorView<'_>) -> Direction {
        if elevator.direction == Direction::DoorOpen {
            return Direction::DoorOpen;
        }

        let h = building.floor_height_m;

        // Riders first: head for the nearest onboard target.
        if let Some(rider) = elevator.nearest_onboard(h) {
            let target = rider.target_height_m(h);
            return if target > elevator.position_m + building.arrival_tolerance_m {
                Direction::Up
            } else if target < elevator.position_m - building.arrival_tolerance_m {
                Direction::Down
            } else {
                // Within tolerance — the physics step will open the doors.
                Direction::Idle
            };
        }

        // Empty car: chase the nearest waiting origin.
        match building.nearest_waiting(elevator.position_m) {
            Some(caller) => {
                let origin = caller.origin_height_m(h);
                let gap = origin - elevator.position_m;
                if gap.abs() < building.arrival_tolerance_m {
                    // Already at the pickup floor: continue toward where
                    // this passenger wants to go.
                    let target = caller.target_height_m(h);
                    if target > elevator.position_m {
                        Direction::Up
                    } else {
                        Direction::Down
                    }
                } else if gap > 0.0 {
                    Direction::Up
                } else {
                    Direction::Down
                }
            }
            None => Direction::Idle,
        }
    }
}
