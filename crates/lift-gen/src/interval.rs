//! Fire-time scheduling shared by all arrival rules.
//!
//! Every rule advances a private `next_fire_ms` by a uniform draw from an
//! interval range after each fire.  Rules with a [`PeakWindow`] use a
//! second, usually much shorter, range while the clock is inside the
//! window — that two-range scheme is what makes the arrival process
//! bursty instead of stationary.

use lift_core::{LiftError, LiftResult, SimRng};

// ── IntervalRange ─────────────────────────────────────────────────────────────

/// An inclusive-exclusive `[min_ms, max_ms)` range of inter-arrival gaps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IntervalRange {
    pub min_ms: i64,
    pub max_ms: i64,
}

impl IntervalRange {
    /// Validated constructor: `0 < min < max`.
    pub fn new(min_ms: i64, max_ms: i64) -> LiftResult<Self> {
        if min_ms <= 0 {
            return Err(LiftError::Config(format!(
                "arrival interval minimum must be positive, got {min_ms}"
            )));
        }
        if min_ms >= max_ms {
            return Err(LiftError::Config(format!(
                "arrival interval bounds out of order: min {min_ms} >= max {max_ms}"
            )));
        }
        Ok(Self { min_ms, max_ms })
    }

    /// Draw one gap from the range.
    #[inline]
    pub fn sample(&self, rng: &mut SimRng) -> i64 {
        rng.gen_range(self.min_ms..self.max_ms)
    }
}

// ── PeakWindow ────────────────────────────────────────────────────────────────

/// A `[start_ms, end_ms]` window of simulated time during which a rule
/// switches to its peak interval range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PeakWindow {
    pub start_ms: i64,
    pub end_ms: i64,
}

impl PeakWindow {
    pub fn new(start_ms: i64, end_ms: i64) -> LiftResult<Self> {
        if start_ms > end_ms {
            return Err(LiftError::Config(format!(
                "peak window out of order: start {start_ms} > end {end_ms}"
            )));
        }
        Ok(Self { start_ms, end_ms })
    }

    /// `true` while `now_ms` is inside the window (bounds inclusive).
    #[inline]
    pub fn contains(&self, now_ms: i64) -> bool {
        now_ms >= self.start_ms && now_ms <= self.end_ms
    }
}

// ── IntervalSampler ───────────────────────────────────────────────────────────

/// Owns a rule's `next_fire_ms` and the off-peak/peak interval ranges.
///
/// The first fire time is drawn from the off-peak range at construction,
/// so a rule never fires at `t = 0` regardless of seed.
#[derive(Debug)]
pub struct IntervalSampler {
    off_peak: IntervalRange,
    peak: Option<(PeakWindow, IntervalRange)>,
    next_fire_ms: i64,
}

impl IntervalSampler {
    /// A sampler with a single interval range and no peak window.
    pub fn steady(off_peak: IntervalRange, rng: &mut SimRng) -> Self {
        let next_fire_ms = off_peak.sample(rng);
        Self { off_peak, peak: None, next_fire_ms }
    }

    /// A sampler that switches to `peak_range` while inside `window`.
    pub fn with_peak(
        off_peak: IntervalRange,
        window: PeakWindow,
        peak_range: IntervalRange,
        rng: &mut SimRng,
    ) -> Self {
        let next_fire_ms = off_peak.sample(rng);
        Self {
            off_peak,
            peak: Some((window, peak_range)),
            next_fire_ms,
        }
    }

    /// `true` when the scheduled fire time has been reached.
    #[inline]
    pub fn due(&self, now_ms: i64) -> bool {
        now_ms >= self.next_fire_ms
    }

    /// Schedule the next fire after a fire at `now_ms`, using the peak
    /// range if `now_ms` falls inside the peak window.
    pub fn reschedule(&mut self, now_ms: i64, rng: &mut SimRng) {
        let range = match &self.peak {
            Some((window, peak_range)) if window.contains(now_ms) => peak_range,
            _ => &self.off_peak,
        };
        // Advance from the previous schedule, not from `now`: a rule that
        // fell behind keeps its cadence instead of drifting late.
        self.next_fire_ms += range.sample(rng);
    }
}
