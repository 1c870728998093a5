//! Passenger arrival models.
//!
//! An [`ArrivalModel`] decides, once per tick, who appears at which landing
//! and where they want to go.  The engine turns each [`Arrival`] into a
//! `Person` and hands it to the controller.

use lift_core::{Floor, LiftError, LiftResult, SimConfig, SimRng, Tick};
use rand::Rng;
use rand::distributions::WeightedIndex;
use rand_distr::Exp;

/// A new passenger request: where they are and where they are going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Arrival {
    pub origin:      Floor,
    pub destination: Floor,
}

/// Pluggable passenger generator.
///
/// All randomness must come from `rng` so a run is reproducible from its
/// seed.  Every returned arrival must have both floors in `1..=floors` and
/// `origin != destination`; the controller rejects anything else and the run
/// aborts.
///
/// # Example
///
/// ```rust,ignore
/// struct LobbyRush;
///
/// impl ArrivalModel for LobbyRush {
///     fn arrivals(&mut self, _tick: Tick, floors: u32, rng: &mut SimRng) -> Vec<Arrival> {
///         let destination = Floor(rng.gen_range(2..=floors));
///         vec![Arrival { origin: Floor::LOBBY, destination }]
///     }
/// }
/// ```
pub trait ArrivalModel {
    /// Arrivals appearing at `tick`, in the order they should be numbered.
    fn arrivals(&mut self, tick: Tick, floors: u32, rng: &mut SimRng) -> Vec<Arrival>;
}

impl<M: ArrivalModel + ?Sized> ArrivalModel for Box<M> {
    fn arrivals(&mut self, tick: Tick, floors: u32, rng: &mut SimRng) -> Vec<Arrival> {
        (**self).arrivals(tick, floors, rng)
    }
}

/// A destination drawn uniformly from every floor except `origin`.
fn uniform_destination(origin: Floor, floors: u32, rng: &mut SimRng) -> Floor {
    let pick: u32 = rng.gen_range(1..floors);
    if pick >= origin.0 { Floor(pick + 1) } else { Floor(pick) }
}

// ── UniformArrivals ───────────────────────────────────────────────────────────

/// Every floor independently receives `0..=max_per_tick` new people each
/// tick, each bound for a uniformly chosen other floor.
#[derive(Clone, Debug)]
pub struct UniformArrivals {
    pub max_per_tick: u32,
}

impl UniformArrivals {
    pub fn new(max_per_tick: u32) -> Self {
        Self { max_per_tick }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(config.max_new_people_per_tick)
    }
}

impl ArrivalModel for UniformArrivals {
    fn arrivals(&mut self, _tick: Tick, floors: u32, rng: &mut SimRng) -> Vec<Arrival> {
        if self.max_per_tick == 0 {
            return Vec::new();
        }
        let mut out = Vec::new();
        for f in 1..=floors {
            let origin = Floor(f);
            let count: u32 = rng.gen_range(0..=self.max_per_tick);
            for _ in 0..count {
                out.push(Arrival {
                    origin,
                    destination: uniform_destination(origin, floors, rng),
                });
            }
        }
        out
    }
}

// ── PoissonArrivals ───────────────────────────────────────────────────────────

/// Lobby-heavy traffic.
///
/// Each floor runs its own countdown with exponentially distributed gaps of
/// rate `1 / (i² + 1)`, `i` being the zero-based floor index, so low floors
/// are far busier than high ones.  When a countdown expires a group of
/// `1..=max_group` people appears there and the next countdown starts at
/// two ticks plus a fresh gap.  Destinations favour low floors with the same
/// `1 / (i² + 1)` weights.
#[derive(Clone, Debug)]
pub struct PoissonArrivals {
    pub max_group: u32,
    /// Spawn gap distribution per floor index.
    gaps:          Vec<Exp<f64>>,
    /// Destination weights over every floor index.
    destinations:  WeightedIndex<f64>,
    /// Next spawn tick per floor index.  Filled on the first call.
    next_spawn:    Vec<Tick>,
}

impl PoissonArrivals {
    /// Build the per-floor distributions for a building of `floors` floors.
    pub fn new(max_group: u32, floors: u32) -> LiftResult<Self> {
        if floors < 2 {
            return Err(LiftError::Config(format!(
                "Poisson arrivals need at least 2 floors, got {floors}"
            )));
        }
        let rates: Vec<f64> = (0..floors as usize).map(Self::rate).collect();
        let gaps = rates
            .iter()
            .map(|&rate| Exp::new(rate))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| LiftError::Config(format!("arrival rate: {e}")))?;
        let destinations = WeightedIndex::new(&rates)
            .map_err(|e| LiftError::Config(format!("destination weights: {e}")))?;

        Ok(Self {
            max_group,
            gaps,
            destinations,
            next_spawn: Vec::new(),
        })
    }

    pub fn from_config(config: &SimConfig) -> LiftResult<Self> {
        Self::new(config.max_new_people_per_tick, config.floors)
    }

    #[inline]
    fn rate(index: usize) -> f64 {
        let i = index as f64;
        1.0 / (i * i + 1.0)
    }

    /// A whole-tick spawn gap for floor `index`.
    fn gap(&self, index: usize, rng: &mut SimRng) -> u64 {
        rng.inner().sample(&self.gaps[index]) as u64
    }

    /// Weighted destination, resampled until it differs from `origin`.
    fn destination(&self, origin: Floor, rng: &mut SimRng) -> Floor {
        loop {
            let pick = Floor::from_index(rng.inner().sample(&self.destinations));
            if pick != origin {
                return pick;
            }
        }
    }
}

impl ArrivalModel for PoissonArrivals {
    fn arrivals(&mut self, tick: Tick, floors: u32, rng: &mut SimRng) -> Vec<Arrival> {
        debug_assert_eq!(floors as usize, self.gaps.len());
        if self.next_spawn.is_empty() {
            self.next_spawn = (0..self.gaps.len())
                .map(|i| tick + self.gap(i, rng))
                .collect();
        }

        let mut out = Vec::new();
        for i in 0..self.gaps.len() {
            if self.next_spawn[i] > tick {
                continue;
            }
            let origin = Floor::from_index(i);
            let group: u32 = rng.gen_range(1..=self.max_group.max(1));
            for _ in 0..group {
                out.push(Arrival {
                    origin,
                    destination: self.destination(origin, rng),
                });
            }
            self.next_spawn[i] = tick + (self.gap(i, rng) + 2);
        }
        out
    }
}

// ── ScriptedArrivals ──────────────────────────────────────────────────────────

/// A fixed arrival list, replayed at the given ticks.  No randomness.
#[derive(Clone, Debug, Default)]
pub struct ScriptedArrivals {
    script: Vec<(Tick, Arrival)>,
}

impl ScriptedArrivals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a person appearing at `origin` at `tick`, bound for `destination`.
    pub fn at(mut self, tick: u64, origin: u32, destination: u32) -> Self {
        self.script.push((
            Tick(tick),
            Arrival {
                origin:      Floor(origin),
                destination: Floor(destination),
            },
        ));
        self
    }
}

impl ArrivalModel for ScriptedArrivals {
    fn arrivals(&mut self, tick: Tick, _floors: u32, _rng: &mut SimRng) -> Vec<Arrival> {
        self.script
            .iter()
            .filter(|(t, _)| *t == tick)
            .map(|&(_, arrival)| arrival)
            .collect()
    }
}
