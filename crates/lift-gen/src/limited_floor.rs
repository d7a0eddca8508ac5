//! Uniform traffic confined to a band of floors.

use lift_core::{LiftError, LiftResult, SimRng};

use crate::interval::{IntervalRange, IntervalSampler};
use crate::rule::{distinct_pair, ArrivalRule, HallRequest};

/// Generates passengers whose origin and target both lie in
/// `[min_floor, max_floor]`, at steady random intervals.
///
/// The background-load workhorse: a mall model uses one of these over the
/// whole building, an office model one per tenant band.
pub struct LimitedFloorRule {
    min_floor: i32,
    max_floor: i32,
    sampler: IntervalSampler,
    rng: SimRng,
}

impl LimitedFloorRule {
    /// `interval` bounds the inter-arrival gap; floors are inclusive.
    pub fn new(
        min_interval_ms: i64,
        max_interval_ms: i64,
        min_floor: i32,
        max_floor: i32,
        seed: u64,
    ) -> LiftResult<Self> {
        if min_floor < 1 || min_floor >= max_floor {
            return Err(LiftError::Config(format!(
                "floor band out of order: [{min_floor}, {max_floor}]"
            )));
        }
        let interval = IntervalRange::new(min_interval_ms, max_interval_ms)?;
        let mut rng = SimRng::new(seed);
        let sampler = IntervalSampler::steady(interval, &mut rng);
        Ok(Self { min_floor, max_floor, sampler, rng })
    }
}

impl ArrivalRule for LimitedFloorRule {
    fn should_fire(&self, now_ms: i64) -> bool {
        self.sampler.due(now_ms)
    }

    fn generate(&mut self, now_ms: i64, _floors: i32) -> HallRequest {
        self.sampler.reschedule(now_ms, &mut self.rng);
        distinct_pair(&mut self.rng, self.min_floor, self.max_floor)
    }
}
