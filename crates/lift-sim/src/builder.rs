//! Fluent builder for constructing a [`Sim`].

use lift_core::{Floor, PersonId, SimClock, SimConfig, SimRng};
use lift_dispatch::{Controller, DispatchConfig};
use log::info;

use crate::{ArrivalModel, Sim, SimResult, Statistics};

/// Fluent builder for [`Sim<A>`].
///
/// # Required inputs
///
/// - [`SimConfig`] — floors, iterations, wait threshold, seed
/// - `A: ArrivalModel` — the passenger generator
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default        |
/// |---------------------|----------------|
/// | `.start_floor(f)`   | `Floor::LOBBY` |
///
/// # Example
///
/// ```rust,ignore
/// let arrivals = UniformArrivals::from_config(&config);
/// let mut sim = SimBuilder::new(config, arrivals).build()?;
/// sim.run(&mut NoopObserver)?;
/// println!("{}", sim.stats().summary());
/// ```
pub struct SimBuilder<A: ArrivalModel> {
    config:      SimConfig,
    arrivals:    A,
    start_floor: Option<Floor>,
}

impl<A: ArrivalModel> SimBuilder<A> {
    pub fn new(config: SimConfig, arrivals: A) -> Self {
        Self {
            config,
            arrivals,
            start_floor: None,
        }
    }

    /// Park the car somewhere other than the lobby at tick 0.
    pub fn start_floor(mut self, floor: Floor) -> Self {
        self.start_floor = Some(floor);
        self
    }

    /// Validate the configuration, resolve the seed, and return a
    /// ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<A>> {
        self.config.validate()?;

        let seed = match self.config.seed {
            Some(seed) => seed,
            None => {
                let seed = SimRng::entropy_seed();
                info!("no seed configured; drew {seed} (pass it back to reproduce this run)");
                seed
            }
        };

        let mut dispatch = DispatchConfig::new(self.config.floors, self.config.max_wait_threshold);
        if let Some(floor) = self.start_floor {
            dispatch.start_floor = floor;
        }
        let controller = Controller::new(dispatch)?;

        Ok(Sim {
            clock:       SimClock::new(self.config.iterations),
            config:      self.config,
            seed,
            rng:         SimRng::new(seed),
            arrivals:    self.arrivals,
            controller,
            stats:       Statistics::default(),
            trace:       Vec::new(),
            next_person: PersonId(0),
        })
    }
}
