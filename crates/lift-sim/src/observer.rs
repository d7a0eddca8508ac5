//! Simulation observer trait for progress reporting and data collection.

/// Callbacks invoked by [`Building::run`][crate::Building::run] at tick
/// boundaries.
///
/// All methods have default no-op implementations so implementors only
/// need to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { every_ms: i64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, now_ms: i64, waiting: usize, riding: usize) {
///         if now_ms % self.every_ms == 0 {
///             println!("t={}s: {waiting} waiting, {riding} riding", now_ms / 1000);
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the arrival phase.
    fn on_tick_start(&mut self, _now_ms: i64) {}

    /// Called at the end of each tick, after the accumulator phase.
    ///
    /// `waiting` and `riding` are the passenger counts in the hall pool
    /// and across all elevators at that moment.
    fn on_tick_end(&mut self, _now_ms: i64, _waiting: usize, _riding: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _now_ms: i64) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
