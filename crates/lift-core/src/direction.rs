//! Elevator motion state, doubling as a hall-call direction.
//!
//! A passenger's `call_direction` is restricted to `Up`/`Down` by the
//! `Passenger` constructor; `Idle` and `DoorOpen` are elevator-only states.

/// The motion state of an elevator, or (restricted to `Up`/`Down`) the
/// direction of a hall call.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Stationary, eligible for redirection (default state).
    #[default]
    Idle,
    /// Moving up at the elevator's constant speed.
    Up,
    /// Moving down at the elevator's constant speed.
    Down,
    /// Stationary with doors open, counting down the dwell timer.
    /// Policies never enter or leave this state — it is owned by the
    /// physical layer.
    DoorOpen,
}

impl Direction {
    /// Sign of the position change per tick: `+1.0` for `Up`, `-1.0` for
    /// `Down`, `0.0` otherwise.
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            Direction::Up   => 1.0,
            Direction::Down => -1.0,
            Direction::Idle | Direction::DoorOpen => 0.0,
        }
    }

    /// `true` for the two moving states.
    #[inline]
    pub fn is_moving(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// The opposite sweep direction.  `Idle` and `DoorOpen` map to
    /// themselves.
    #[inline]
    pub fn reversed(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
            other => other,
        }
    }

    /// Human-readable label, useful for event dumps and CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Idle     => "idle",
            Direction::Up       => "up",
            Direction::Down     => "down",
            Direction::DoorOpen => "door-open",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
