//! Unit tests for the arrival rules.

use crate::{ArrivalRule, IntervalRange, LimitedFloorRule, PeakTargetRule, PeakWindow, TimeWindowRule};

#[cfg(test)]
mod intervals {
    use super::*;
    use crate::IntervalSampler;
    use lift_core::SimRng;

    #[test]
    fn range_bounds_validated() {
        assert!(IntervalRange::new(0, 100).is_err());
        assert!(IntervalRange::new(100, 100).is_err());
        assert!(IntervalRange::new(200, 100).is_err());
        assert!(IntervalRange::new(100, 200).is_ok());
    }

    #[test]
    fn window_bounds_validated() {
        assert!(PeakWindow::new(100, 50).is_err());
        let w = PeakWindow::new(50, 100).unwrap();
        assert!(w.contains(50));
        assert!(w.contains(100));
        assert!(!w.contains(101));
    }

    #[test]
    fn first_fire_is_not_at_zero() {
        let mut rng = SimRng::new(7);
        let s = IntervalSampler::steady(IntervalRange::new(100, 200).unwrap(), &mut rng);
        assert!(!s.due(0));
        assert!(s.due(200));
    }

    #[test]
    fn peak_range_used_inside_window() {
        let mut rng = SimRng::new(7);
        let off = IntervalRange::new(10_000, 10_001).unwrap();
        let peak = IntervalRange::new(100, 101).unwrap();
        let window = PeakWindow::new(0, 1_000_000).unwrap();
        let mut s = IntervalSampler::with_peak(off, window, peak, &mut rng);

        // First fire drawn from the off-peak range.
        let first = (0..).find(|t| s.due(*t * 100) ).unwrap() * 100;
        s.reschedule(first, &mut rng);
        // Inside the window the gap must be the peak gap (exactly 100).
        assert!(s.due(first + 100));
    }
}

#[cfg(test)]
mod rules {
    use super::*;

    /// Drive a rule through `ticks` ticks of `tick_ms` and collect fires.
    fn collect_fires(
        rule: &mut dyn ArrivalRule,
        floors: i32,
        tick_ms: i64,
        ticks: i64,
    ) -> Vec<(i64, crate::HallRequest)> {
        let mut out = Vec::new();
        let mut now = 0;
        for _ in 0..ticks {
            if rule.should_fire(now) {
                out.push((now, rule.generate(now, floors)));
            }
            now += tick_ms;
        }
        out
    }

    #[test]
    fn limited_floor_stays_in_band_and_distinct() {
        let mut rule = LimitedFloorRule::new(1_000, 5_000, 2, 6, 42).unwrap();
        let fires = collect_fires(&mut rule, 10, 100, 10_000);
        assert!(!fires.is_empty());
        for (_, req) in &fires {
            assert!((2..=6).contains(&req.origin_floor), "{req:?}");
            assert!((2..=6).contains(&req.target_floor), "{req:?}");
            assert_ne!(req.origin_floor, req.target_floor);
        }
    }

    #[test]
    fn limited_floor_rejects_bad_band() {
        assert!(LimitedFloorRule::new(1_000, 5_000, 5, 5, 42).is_err());
        assert!(LimitedFloorRule::new(1_000, 5_000, 0, 5, 42).is_err());
        assert!(LimitedFloorRule::new(5_000, 1_000, 1, 5, 42).is_err());
    }

    #[test]
    fn limited_floor_reproducible_from_seed() {
        let mut a = LimitedFloorRule::new(1_000, 5_000, 1, 8, 99).unwrap();
        let mut b = LimitedFloorRule::new(1_000, 5_000, 1, 8, 99).unwrap();
        assert_eq!(
            collect_fires(&mut a, 8, 100, 5_000),
            collect_fires(&mut b, 8, 100, 5_000),
        );
    }

    #[test]
    fn peak_target_converges_on_target() {
        let mut rule =
            PeakTargetRule::new(0, 1_000_000, 5_000, 10_000, 500, 1_000, 1, 7).unwrap();
        let fires = collect_fires(&mut rule, 10, 100, 10_000);
        assert!(!fires.is_empty());
        for (_, req) in &fires {
            assert_eq!(req.target_floor, 1);
            assert_ne!(req.origin_floor, 1);
            assert!((1..=10).contains(&req.origin_floor));
        }
    }

    #[test]
    fn peak_window_raises_rate() {
        // Peak covers the first half of the run with 10x shorter gaps.
        let mut rule =
            PeakTargetRule::new(0, 500_000, 20_000, 40_000, 2_000, 4_000, 1, 3).unwrap();
        let fires = collect_fires(&mut rule, 10, 100, 10_000);
        let in_peak = fires.iter().filter(|(t, _)| *t <= 500_000).count();
        let off_peak = fires.len() - in_peak;
        assert!(
            in_peak > off_peak * 3,
            "peak {in_peak} fires vs off-peak {off_peak}"
        );
    }

    #[test]
    fn time_window_main_flow_and_reverse() {
        let mut rule = TimeWindowRule::new(
            0, 1_000_000, 2_000, 4_000, 2_000, 4_000, 1, 9, 0.2, 11,
        )
        .unwrap();
        let fires = collect_fires(&mut rule, 10, 100, 20_000);
        assert!(!fires.is_empty());

        let mut main = 0usize;
        let mut reverse = 0usize;
        for (_, req) in &fires {
            assert_ne!(req.origin_floor, req.target_floor);
            if req.origin_floor == 1 && req.target_floor == 9 {
                main += 1;
            } else {
                assert_eq!(req.origin_floor, 9, "reverse rides depart the main target");
                reverse += 1;
            }
        }
        assert!(main > reverse, "main {main} vs reverse {reverse}");
        assert!(reverse > 0, "a 20% reverse trickle should appear over {} fires", fires.len());
    }

    #[test]
    fn time_window_validates_parameters() {
        let bad_floors = TimeWindowRule::new(0, 1, 100, 200, 100, 200, 3, 3, 0.1, 1);
        assert!(bad_floors.is_err());
        let bad_prob = TimeWindowRule::new(0, 1, 100, 200, 100, 200, 1, 3, 1.5, 1);
        assert!(bad_prob.is_err());
    }

    #[test]
    fn at_most_one_fire_per_tick() {
        // Huge tick vs. tiny intervals: the rule is perpetually overdue but
        // still fires only once per poll.
        let mut rule = LimitedFloorRule::new(10, 20, 1, 5, 42).unwrap();
        let fires = collect_fires(&mut rule, 5, 60_000, 100);
        assert!(fires.len() <= 100);
        let times: Vec<i64> = fires.iter().map(|(t, _)| *t).collect();
        let mut deduped = times.clone();
        deduped.dedup();
        assert_eq!(times, deduped);
    }
}
