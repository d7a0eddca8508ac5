use lift_core::{ElevatorId, LiftError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] LiftError),

    #[error("elevator speed must be positive, got {0} m/s")]
    InvalidSpeed(f64),

    #[error(
        "arrival rule produced floors {origin_floor} -> {target_floor}, outside this building's 1..={floors}"
    )]
    RequestOutOfRange {
        origin_floor: i32,
        target_floor: i32,
        floors:       i32,
    },

    #[error("elevator {elevator} position {position_m} m escaped the shaft after clamping")]
    PositionOutOfBounds {
        elevator:   ElevatorId,
        position_m: f64,
    },

    #[error("no elevator registered with id {0}")]
    UnknownElevator(ElevatorId),
}

pub type SimResult<T> = Result<T, SimError>;
