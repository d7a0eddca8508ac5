//! Many floors converging on one target — the morning-commute surge.

use lift_core::{LiftError, LiftResult, SimRng};

use crate::interval::{IntervalRange, IntervalSampler, PeakWindow};
use crate::rule::{ArrivalRule, HallRequest};

/// Every generated passenger heads to `target_floor`; origins are uniform
/// over all other floors.  Inside the peak window the (shorter) peak
/// interval range takes over, producing the rush.
///
/// Models an apartment block at commute time: residents all over the
/// building heading for the lobby.
pub struct PeakTargetRule {
    target_floor: i32,
    sampler: IntervalSampler,
    rng: SimRng,
}

impl PeakTargetRule {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        peak_start_ms: i64,
        peak_end_ms: i64,
        min_interval_ms: i64,
        max_interval_ms: i64,
        peak_min_interval_ms: i64,
        peak_max_interval_ms: i64,
        target_floor: i32,
        seed: u64,
    ) -> LiftResult<Self> {
        if target_floor < 1 {
            return Err(LiftError::Config(format!(
                "target floor must be at least 1, got {target_floor}"
            )));
        }
        let off_peak = IntervalRange::new(min_interval_ms, max_interval_ms)?;
        let peak = IntervalRange::new(peak_min_interval_ms, peak_max_interval_ms)?;
        let window = PeakWindow::new(peak_start_ms, peak_end_ms)?;
        let mut rng = SimRng::new(seed);
        let sampler = IntervalSampler::with_peak(off_peak, window, peak, &mut rng);
        Ok(Self { target_floor, sampler, rng })
    }
}

impl ArrivalRule for PeakTargetRule {
    fn should_fire(&self, now_ms: i64) -> bool {
        self.sampler.due(now_ms)
    }

    fn generate(&mut self, now_ms: i64, floors: i32) -> HallRequest {
        self.sampler.reschedule(now_ms, &mut self.rng);

        // Resample until the origin differs from the common target.
        let mut origin = self.rng.gen_range(1..=floors);
        while origin == self.target_floor {
            origin = self.rng.gen_range(1..=floors);
        }

        HallRequest {
            origin_floor: origin,
            target_floor: self.target_floor,
        }
    }
}
