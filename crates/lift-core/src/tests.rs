//! Unit tests for lift-core primitives.

#[cfg(test)]
mod ids {
    use crate::{ElevatorId, PassengerId};

    #[test]
    fn index_and_next() {
        let id = ElevatorId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(id.next(), ElevatorId(4));
        assert_eq!(PassengerId(9).next(), PassengerId(10));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(ElevatorId::INVALID.0, u32::MAX);
        assert_eq!(PassengerId::INVALID.0, u64::MAX);
        assert_eq!(ElevatorId::default(), ElevatorId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(ElevatorId(7).to_string(), "ElevatorId(7)");
        assert_eq!(PassengerId(1).to_string(), "PassengerId(1)");
    }
}

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn signs() {
        assert_eq!(Direction::Up.sign(), 1.0);
        assert_eq!(Direction::Down.sign(), -1.0);
        assert_eq!(Direction::Idle.sign(), 0.0);
        assert_eq!(Direction::DoorOpen.sign(), 0.0);
    }

    #[test]
    fn moving_states() {
        assert!(Direction::Up.is_moving());
        assert!(Direction::Down.is_moving());
        assert!(!Direction::Idle.is_moving());
        assert!(!Direction::DoorOpen.is_moving());
    }

    #[test]
    fn reversal_fixes_non_moving_states() {
        assert_eq!(Direction::Up.reversed(), Direction::Down);
        assert_eq!(Direction::Down.reversed(), Direction::Up);
        assert_eq!(Direction::Idle.reversed(), Direction::Idle);
        assert_eq!(Direction::DoorOpen.reversed(), Direction::DoorOpen);
    }
}

#[cfg(test)]
mod passenger {
    use crate::{Direction, Passenger, PassengerId};

    #[test]
    fn call_direction_derived_from_floors() {
        let up = Passenger::new(PassengerId(0), 2, 5).unwrap();
        assert_eq!(up.call_direction, Direction::Up);
        let down = Passenger::new(PassengerId(1), 5, 2).unwrap();
        assert_eq!(down.call_direction, Direction::Down);
    }

    #[test]
    fn same_floor_rejected() {
        assert!(Passenger::new(PassengerId(0), 3, 3).is_err());
    }

    #[test]
    fn floor_heights() {
        let p = Passenger::new(PassengerId(0), 2, 5).unwrap();
        assert_eq!(p.origin_height_m(3.0), 3.0);
        assert_eq!(p.target_height_m(3.0), 12.0);
    }

    #[test]
    fn accumulators() {
        let mut p = Passenger::new(PassengerId(0), 1, 2).unwrap();
        p.add_waiting(100);
        p.add_waiting(100);
        p.add_ride(100);
        assert_eq!(p.waiting_ms, 200);
        assert_eq!(p.ride_ms, 100);
    }
}

#[cfg(test)]
mod time {
    use crate::{LiftError, SimClock, SimConfig};

    #[test]
    fn clock_advances_by_interval() {
        let mut clock = SimClock::new(100);
        clock.advance();
        clock.advance();
        assert_eq!(clock.now_ms, 200);
        assert_eq!(clock.ticks_elapsed(), 2);
    }

    #[test]
    fn valid_config_passes() {
        let cfg = SimConfig::new(10_000, 5, 3.0, 100);
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.top_height_m(), 12.0);
        assert_eq!(cfg.floor_height_of(3), 6.0);
    }

    #[test]
    fn bad_configs_fail_fast() {
        let cases = [
            SimConfig::new(10_000, 1, 3.0, 100),  // too few floors
            SimConfig::new(10_000, 5, 0.0, 100),  // zero floor height
            SimConfig::new(10_000, 5, 3.0, 0),    // zero tick interval
            SimConfig::new(-1, 5, 3.0, 100),      // negative duration
        ];
        for cfg in cases {
            assert!(matches!(cfg.validate(), Err(LiftError::Config(_))), "{cfg:?}");
        }
    }

    #[test]
    fn zero_tolerance_rejected() {
        let mut cfg = SimConfig::new(10_000, 5, 3.0, 100);
        cfg.arrival_tolerance_m = 0.0;
        assert!(cfg.validate().is_err());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.gen_range(0..1_000_000), b.gen_range(0..1_000_000));
        }
    }

    #[test]
    fn children_diverge() {
        let mut root1 = SimRng::new(42);
        let mut root2 = SimRng::new(42);
        let mut c1 = root1.child(1);
        let mut c2 = root2.child(2);
        let same = (0..32).all(|_| c1.gen_range(0..1_000_000) == c2.gen_range(0..1_000_000));
        assert!(!same);
    }
}
