//! The `Sim` struct and its tick loop.

use lift_core::{Floor, Person, PersonId, SimClock, SimConfig, SimRng, Tick};
use lift_dispatch::{Controller, StepOutcome};
use log::{debug, info};

use crate::{ArrivalModel, SimObserver, SimResult, Statistics};

/// The main simulation runner.
///
/// `Sim<A>` owns the controller, the arrival model, the run's only RNG and
/// everything recorded so far.  Each tick:
///
/// 1. **Arrivals**: ask the arrival model who appears, wrap each as a
///    `Person` with a fresh `PersonId`, and submit it to the controller.
/// 2. **Step**: advance the controller one tick.
/// 3. **Record**: append the car's floor to the position trace and every
///    delivered person's trip to the statistics.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<A: ArrivalModel> {
    /// Global configuration (floors, iterations, threshold, seed).
    pub config: SimConfig,

    /// Simulation clock — tracks the next tick to process.
    pub clock: SimClock,

    /// The seed actually used, whether configured or drawn from entropy.
    pub seed: u64,

    pub(crate) rng:         SimRng,
    pub(crate) arrivals:    A,
    pub(crate) controller:  Controller,
    pub(crate) stats:       Statistics,
    /// Car floor at the end of each processed tick.
    pub(crate) trace:       Vec<Floor>,
    pub(crate) next_person: PersonId,
}

impl<A: ArrivalModel> Sim<A> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to the end of the clock.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            "running {} ticks on {} floors (seed {}, max wait {}, pickup bound {})",
            self.clock.remaining(),
            self.config.floors,
            self.seed,
            self.config.max_wait_threshold,
            self.config.fairness_bound()
        );
        while !self.clock.is_finished() {
            self.tick(observer)?;
        }
        info!(
            "finished at {}: {} delivered, {} waiting, {} aboard",
            self.clock.current_tick,
            self.stats.delivered(),
            self.controller.waiting_count(),
            self.controller.aboard_count()
        );
        observer.on_sim_end(self.clock.current_tick, &self.stats);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores the end of the clock).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.tick(observer)?;
        }
        Ok(())
    }

    /// The dispatch controller, for inspecting the car and waiting riders.
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Trips completed so far.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Car floor at the end of every processed tick, in tick order.
    pub fn trace(&self) -> &[Floor] {
        &self.trace
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn tick<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);
        let outcome = self.process_tick(now)?;
        observer.on_tick_end(&outcome);
        self.clock.advance();
        Ok(())
    }

    fn process_tick(&mut self, now: Tick) -> SimResult<StepOutcome> {
        // ── Phase 1: arrivals ─────────────────────────────────────────────
        let arrivals = self.arrivals.arrivals(now, self.config.floors, &mut self.rng);
        let arrived = arrivals.len();
        for arrival in arrivals {
            let id = self.next_person;
            self.next_person = id.next();
            self.controller
                .submit(Person::new(id, arrival.origin, arrival.destination, now))?;
        }

        // ── Phase 2: controller step ──────────────────────────────────────
        let outcome = self.controller.step(now);

        // ── Phase 3: record ───────────────────────────────────────────────
        self.trace.push(outcome.floor);
        for person in &outcome.delivered {
            if let Some(trip) = person.trip() {
                self.stats.record(trip);
            }
        }

        debug!(
            "{now}: {arrived} arrived, car at {} heading {}, {} boarded, {} delivered",
            outcome.floor,
            outcome.direction,
            outcome.boarded.len(),
            outcome.delivered.len()
        );
        Ok(outcome)
    }
}
