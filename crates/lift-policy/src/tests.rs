//! Unit tests for the five scheduling policies.
//!
//! Views are built by hand around small waiting/onboard slices; a floor
//! height of 3.0 m and a 5-floor building are used throughout unless a
//! test says otherwise (so floor f sits at (f-1)*3.0 m).

use lift_core::{Direction, ElevatorId, Passenger, PassengerId};

use crate::{BuildingView, ElevatorView, Fcfs, FdScan, Look, Scan, SchedulingPolicy, Sstf};

// ── Helpers ───────────────────────────────────────────────────────────────────

const FLOOR_H: f64 = 3.0;

fn passenger(id: u64, origin: i32, target: i32) -> Passenger {
    Passenger::new(PassengerId(id), origin, target).unwrap()
}

fn building<'a>(floors: i32, waiting: &'a [Passenger]) -> BuildingView<'a> {
    BuildingView {
        floors,
        floor_height_m: FLOOR_H,
        arrival_tolerance_m: 0.3,
        now_ms: 0,
        waiting,
    }
}

fn elevator<'a>(position_m: f64, direction: Direction, onboard: &'a [Passenger]) -> ElevatorView<'a> {
    ElevatorView {
        id: ElevatorId(0),
        position_m,
        direction,
        onboard,
    }
}

fn all_policies() -> Vec<Box<dyn SchedulingPolicy>> {
    vec![
        Box::new(Fcfs),
        Box::new(Scan::new()),
        Box::new(Look),
        Box::new(Sstf),
        Box::new(FdScan::new()),
    ]
}

// ── Shared contract ───────────────────────────────────────────────────────────

#[cfg(test)]
mod contract {
    use super::*;

    #[test]
    fn door_open_is_untouchable() {
        let waiting = [passenger(0, 2, 5)];
        let b = building(5, &waiting);
        let e = elevator(0.0, Direction::DoorOpen, &[]);
        for mut policy in all_policies() {
            assert_eq!(policy.decide(&b, &e), Direction::DoorOpen);
        }
    }

    #[test]
    fn empty_world_is_idle_not_an_error() {
        let b = building(5, &[]);
        let e = elevator(6.0, Direction::Idle, &[]);
        for mut policy in all_policies() {
            assert_eq!(policy.decide(&b, &e), Direction::Idle);
        }
    }

    #[test]
    fn decide_is_idempotent() {
        let waiting = [passenger(0, 4, 1), passenger(1, 2, 5)];
        let onboard = [passenger(2, 1, 3)];
        let b = building(5, &waiting);
        let e = elevator(2.0, Direction::Up, &onboard);
        for mut policy in all_policies() {
            let first = policy.decide(&b, &e);
            let second = policy.decide(&b, &e);
            assert_eq!(first, second);
        }
    }
}

// ── FCFS ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fcfs {
    use super::*;

    #[test]
    fn heads_for_oldest_waiting_call() {
        // Oldest call is at floor 2; a newer, closer one at floor 4 must
        // not distract the car sitting at floor 5 (12 m).
        let waiting = [passenger(0, 2, 5), passenger(1, 4, 5)];
        let b = building(5, &waiting);
        let e = elevator(12.0, Direction::Idle, &[]);
        assert_eq!(Fcfs.decide(&b, &e), Direction::Down);
    }

    #[test]
    fn rider_at_head_governs() {
        // Head rider wants floor 1; second rider wants floor 5.
        let onboard = [passenger(0, 3, 1), passenger(1, 3, 5)];
        let waiting = [passenger(2, 5, 1)];
        let b = building(5, &waiting);
        let e = elevator(6.0, Direction::Up, &onboard);
        assert_eq!(Fcfs.decide(&b, &e), Direction::Down);
    }

    #[test]
    fn equal_height_ties_up() {
        let waiting = [passenger(0, 3, 1)];
        let b = building(5, &waiting);
        let e = elevator(6.0, Direction::Idle, &[]); // exactly at floor 3
        assert_eq!(Fcfs.decide(&b, &e), Direction::Up);
    }

    #[test]
    fn single_call_goes_up_immediately() {
        // Baseline scenario: passenger at floor 2 → 5, car at floor 1.
        let waiting = [passenger(0, 2, 5)];
        let b = building(5, &waiting);
        let e = elevator(0.0, Direction::Idle, &[]);
        assert_eq!(Fcfs.decide(&b, &e), Direction::Up);
    }
}

// ── SCAN ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scan {
    use super::*;

    #[test]
    fn never_reverses_mid_sweep() {
        // All remaining work is below, but the car keeps sweeping up.
        let waiting = [passenger(0, 1, 3)];
        let b = building(5, &waiting);
        let e = elevator(9.0, Direction::Up, &[]);
        assert_eq!(Scan::new().decide(&b, &e), Direction::Up);
    }

    #[test]
    fn reverses_exactly_at_extremes() {
        let waiting = [passenger(0, 2, 4)];
        let b = building(5, &waiting);

        let top = elevator(12.0, Direction::Up, &[]);
        assert_eq!(Scan::new().decide(&b, &top), Direction::Down);

        let bottom = elevator(0.0, Direction::Down, &[]);
        assert_eq!(Scan::new().decide(&b, &bottom), Direction::Up);
    }

    #[test]
    fn parks_at_extreme_when_building_is_empty() {
        let b = building(5, &[]);
        let top = elevator(12.0, Direction::Up, &[]);
        assert_eq!(Scan::new().decide(&b, &top), Direction::Idle);
    }

    #[test]
    fn sweep_survives_a_door_stop() {
        // The car boarded someone mid-sweep and the doors reset it to
        // Idle; the pass must resume upward even with all work behind.
        let waiting = [passenger(0, 1, 2)];
        let b = building(5, &waiting);
        let mut policy = Scan::new();

        let rising = elevator(3.0, Direction::Up, &[]);
        assert_eq!(policy.decide(&b, &rising), Direction::Up);

        let after_doors = elevator(6.0, Direction::Idle, &[]);
        assert_eq!(policy.decide(&b, &after_doors), Direction::Up);
    }

    #[test]
    fn idle_bootstrap_prefers_above() {
        let waiting = [passenger(0, 1, 2), passenger(1, 5, 1)];
        let b = building(5, &waiting);
        let e = elevator(6.0, Direction::Idle, &[]);
        assert_eq!(Scan::new().decide(&b, &e), Direction::Up);
    }

    #[test]
    fn idle_bootstrap_falls_back_below() {
        let waiting = [passenger(0, 1, 2)];
        let b = building(5, &waiting);
        let e = elevator(6.0, Direction::Idle, &[]);
        assert_eq!(Scan::new().decide(&b, &e), Direction::Down);
    }
}

// ── LOOK ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod look {
    use super::*;

    #[test]
    fn reverses_as_soon_as_nothing_remains_ahead() {
        // Same setup where SCAN keeps going up: LOOK turns around.
        let waiting = [passenger(0, 1, 3)];
        let b = building(5, &waiting);
        let e = elevator(9.0, Direction::Up, &[]);
        assert_eq!(Look.decide(&b, &e), Direction::Down);
    }

    #[test]
    fn onboard_targets_take_priority() {
        // Rider wants to go up; a waiting origin below must not reverse us.
        let onboard = [passenger(0, 2, 5)];
        let waiting = [passenger(1, 1, 2)];
        let b = building(5, &waiting);
        let e = elevator(6.0, Direction::Up, &onboard);
        assert_eq!(Look.decide(&b, &e), Direction::Up);
    }

    #[test]
    fn keeps_sweeping_while_work_remains_ahead() {
        let waiting = [passenger(0, 5, 1)];
        let b = building(5, &waiting);
        let e = elevator(6.0, Direction::Up, &[]);
        assert_eq!(Look.decide(&b, &e), Direction::Up);
    }

    #[test]
    fn idle_tie_break_above_then_below() {
        let above = [passenger(0, 5, 1)];
        let b = building(5, &above);
        let e = elevator(6.0, Direction::Idle, &[]);
        assert_eq!(Look.decide(&b, &e), Direction::Up);

        let below = [passenger(1, 1, 4)];
        let b = building(5, &below);
        assert_eq!(Look.decide(&b, &e), Direction::Down);
    }

    #[test]
    fn goes_idle_when_served_out() {
        let b = building(5, &[]);
        let e = elevator(9.0, Direction::Up, &[]);
        assert_eq!(Look.decide(&b, &e), Direction::Idle);
    }
}

// ── SSTF ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sstf {
    use super::*;

    #[test]
    fn chases_nearest_waiting_origin() {
        // Car at floor 3 (6 m); calls at floors 2 (3 m) and 5 (12 m).
        let waiting = [passenger(0, 5, 1), passenger(1, 2, 1)];
        let b = building(5, &waiting);
        let e = elevator(6.0, Direction::Idle, &[]);
        assert_eq!(Sstf.decide(&b, &e), Direction::Down);
    }

    #[test]
    fn nearest_onboard_target_wins_over_waiting() {
        let onboard = [passenger(0, 3, 4)];
        let waiting = [passenger(1, 1, 2)];
        let b = building(5, &waiting);
        let e = elevator(6.0, Direction::Up, &onboard);
        assert_eq!(Sstf.decide(&b, &e), Direction::Up);
    }

    #[test]
    fn at_pickup_floor_continues_toward_target() {
        // Car within tolerance of the caller's origin: direction must come
        // from the caller's own target, not collapse to Idle.
        let waiting = [passenger(0, 3, 1)];
        let b = building(5, &waiting);
        let e = elevator(6.1, Direction::Idle, &[]);
        assert_eq!(Sstf.decide(&b, &e), Direction::Down);
    }

    #[test]
    fn within_tolerance_of_onboard_target_idles_for_the_doors() {
        let onboard = [passenger(0, 1, 3)];
        let b = building(5, &[]);
        let e = elevator(6.05, Direction::Up, &onboard);
        assert_eq!(Sstf.decide(&b, &e), Direction::Idle);
    }
}

// ── FD-SCAN ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fdscan {
    use super::*;

    #[test]
    fn serves_up_call_before_reversing_for_down_call() {
        // Moving up between two opposite-direction calls straddling the
        // car: the up-call above must be served first, and the down-call
        // stays queued until its passenger leaves the waiting pool.
        let waiting = [passenger(0, 4, 5), passenger(1, 2, 1)];
        let b = building(5, &waiting);
        let e = elevator(6.0, Direction::Up, &[]);

        let mut policy = FdScan::new();
        assert_eq!(policy.decide(&b, &e), Direction::Up);
        let (up, down) = policy.pending_calls();
        assert_eq!((up, down), (1, 1));
    }

    #[test]
    fn en_route_down_call_above_keeps_car_rising() {
        let waiting = [passenger(0, 4, 1)]; // down-call above the car
        let b = building(5, &waiting);
        let e = elevator(3.0, Direction::Up, &[]);
        assert_eq!(FdScan::new().decide(&b, &e), Direction::Up);
    }

    #[test]
    fn satisfied_calls_are_dropped_on_refresh() {
        let waiting = [passenger(0, 4, 5), passenger(1, 2, 1)];
        let b = building(5, &waiting);
        let e = elevator(6.0, Direction::Up, &[]);

        let mut policy = FdScan::new();
        policy.decide(&b, &e);
        assert_eq!(policy.pending_calls(), (1, 1));

        // Passenger 0 boarded somewhere: only the down-call survives.
        let still_waiting = [passenger(1, 2, 1)];
        let b = building(5, &still_waiting);
        policy.decide(&b, &e);
        assert_eq!(policy.pending_calls(), (0, 1));
    }

    #[test]
    fn call_hook_enqueues_before_next_decide() {
        let p = passenger(0, 4, 5);
        let b = building(5, &[]);
        let e = elevator(0.0, Direction::Idle, &[]);

        let mut policy = FdScan::new();
        policy.on_passenger_call(&b, &e, &p);
        assert_eq!(policy.pending_calls(), (1, 0));
    }

    #[test]
    fn hook_does_not_duplicate_queue_entries() {
        let p = passenger(0, 4, 5);
        let waiting = [p.clone()];
        let b = building(5, &waiting);
        let e = elevator(0.0, Direction::Idle, &[]);

        let mut policy = FdScan::new();
        policy.on_passenger_call(&b, &e, &p);
        policy.decide(&b, &e); // refresh sees the same passenger
        assert_eq!(policy.pending_calls(), (1, 0));
    }

    #[test]
    fn idle_steers_toward_nearest_pending_call() {
        let waiting = [passenger(0, 5, 1), passenger(1, 2, 4)];
        let b = building(5, &waiting);
        let e = elevator(6.0, Direction::Idle, &[]);
        // Floor 2 (3 m) is nearer to 6 m than floor 5 (12 m).
        assert_eq!(FdScan::new().decide(&b, &e), Direction::Down);
    }

    #[test]
    fn onboard_riders_steer_like_look() {
        let onboard = [passenger(0, 2, 5)];
        let waiting = [passenger(1, 1, 2)];
        let b = building(5, &waiting);
        let e = elevator(6.0, Direction::Up, &onboard);
        assert_eq!(FdScan::new().decide(&b, &e), Direction::Up);
    }
}
