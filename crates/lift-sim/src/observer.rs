//! Simulation observer trait for progress reporting and data collection.

use lift_core::Tick;
use lift_dispatch::StepOutcome;

use crate::Statistics;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — door counter
///
/// ```rust,ignore
/// struct DoorCounter(usize);
///
/// impl SimObserver for DoorCounter {
///     fn on_tick_end(&mut self, outcome: &StepOutcome) {
///         if outcome.doors_opened {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before arrivals are generated.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick with everything the car did.
    ///
    /// `outcome.delivered` holds the people dropped off this tick, with all
    /// three timestamps set.
    fn on_tick_end(&mut self, _outcome: &StepOutcome) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick, _stats: &Statistics) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
