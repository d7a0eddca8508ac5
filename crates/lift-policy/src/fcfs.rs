//! First-come-first-served dispatch.

use lift_core::Direction;

use crate::policy::{BuildingView, ElevatorView, SchedulingPolicy};

/// Serves the single oldest active request and nothing else: the head of
/// the onboard list if someone is riding, otherwise the head of the
/// waiting pool (FIFO by call order).  Direction is simply "toward that
/// passenger's floor"; every other request is invisible until the current
/// one resolves.
///
/// Strictly fair by arrival order and trivially simple, which is exactly
/// why it collapses under load: the car happily drives past closer
/// requests on its way to the oldest one.  Useful as the baseline the
/// other four algorithms are measured against.
#[derive(Debug, Default)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn decide(&mut self, building: &BuildingView<'_>, elevator: &ElevatorView<'_>) -> Direction {
        if elevator.direction == Direction::DoorOpen {
            return Direction::DoorOpen;
        }

        // A rider is being served: head straight for their target.
        if let Some(rider) = elevator.onboard.first() {
            let target = rider.target_height_m(building.floor_height_m);
            return if elevator.position_m <= target {
                Direction::Up
            } else {
                Direction::Down
            };
        }

        // Otherwise the oldest hall call governs.
        match building.waiting.first() {
            Some(caller) => {
                let origin = caller.origin_height_m(building.floor_height_m);
                if elevator.position_m <= origin {
                    Direction::Up
                } else {
                    Direction::Down
                }
            }
            None => Direction::Idle,
        }
    }
}
