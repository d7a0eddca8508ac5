//! Directed main flow with a probabilistic reverse trickle.

use lift_core::{LiftError, LiftResult, SimRng};

use crate::interval::{IntervalRange, IntervalSampler, PeakWindow};
use crate::rule::{ArrivalRule, HallRequest};

/// Most passengers ride `source_floor → target_floor`; with probability
/// `reverse_probability` a passenger instead departs `target_floor`
/// toward a uniformly random other floor.  The peak window compresses the
/// inter-arrival gaps like [`PeakTargetRule`][crate::PeakTargetRule].
///
/// Models an office tower: ground floor up to the office levels in the
/// morning, a trickle of people leaving against the flow.
pub struct TimeWindowRule {
    source_floor: i32,
    target_floor: i32,
    reverse_probability: f64,
    sampler: IntervalSampler,
    rng: SimRng,
}

impl TimeWindowRule {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        peak_start_ms: i64,
        peak_end_ms: i64,
        min_interval_ms: i64,
        max_interval_ms: i64,
        peak_min_interval_ms: i64,
        peak_max_interval_ms: i64,
        source_floor: i32,
        target_floor: i32,
        reverse_probability: f64,
        seed: u64,
    ) -> LiftResult<Self> {
        if source_floor == target_floor {
            return Err(LiftError::Config(format!(
                "main flow needs distinct floors, got {source_floor} -> {target_floor}"
            )));
        }
        if source_floor < 1 || target_floor < 1 {
            return Err(LiftError::Config(format!(
                "floors must be at least 1, got {source_floor} -> {target_floor}"
            )));
        }
        if !(0.0..=1.0).contains(&reverse_probability) {
            return Err(LiftError::Config(format!(
                "reverse probability must be in [0, 1], got {reverse_probability}"
            )));
        }
        let off_peak = IntervalRange::new(min_interval_ms, max_interval_ms)?;
        let peak = IntervalRange::new(peak_min_interval_ms, peak_max_interval_ms)?;
        let window = PeakWindow::new(peak_start_ms, peak_end_ms)?;
        let mut rng = SimRng::new(seed);
        let sampler = IntervalSampler::with_peak(off_peak, window, peak, &mut rng);
        Ok(Self {
            source_floor,
            target_floor,
            reverse_probability,
            sampler,
            rng,
        })
    }
}

impl ArrivalRule for TimeWindowRule {
    fn should_fire(&self, now_ms: i64) -> bool {
        self.sampler.due(now_ms)
    }

    fn generate(&mut self, now_ms: i64, floors: i32) -> HallRequest {
        self.sampler.reschedule(now_ms, &mut self.rng);

        if self.rng.gen_bool(self.reverse_probability) {
            // Against the flow: depart the main target for any other floor.
            let origin = self.target_floor;
            let mut target = self.rng.gen_range(1..=floors);
            while target == origin {
                target = self.rng.gen_range(1..=floors);
            }
            HallRequest { origin_floor: origin, target_floor: target }
        } else {
            HallRequest {
                origin_floor: self.source_floor,
                target_floor: self.target_floor,
            }
        }
    }
}
