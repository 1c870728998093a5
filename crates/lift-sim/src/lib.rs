//! `lift-sim` — tick loop orchestrator for the liftsim elevator simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0..config.iterations:
//!   ① Arrivals  — ArrivalModel::arrivals produces new (origin, destination)
//!                 pairs; each becomes a Person submitted to the controller.
//!   ② Step      — Controller::step moves the car or serves a floor.
//!   ③ Record    — the car's floor goes to the position trace, delivered
//!                 trips go to Statistics.
//! ```
//!
//! # Arrival models
//!
//! | Model              | Traffic                                              |
//! |--------------------|------------------------------------------------------|
//! | `UniformArrivals`  | `0..=max` people per floor per tick, any destination |
//! | `PoissonArrivals`  | Exponential gaps per floor, lobby-heavy              |
//! | `ScriptedArrivals` | A fixed list; for tests and replays                  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::SimConfig;
//! use lift_sim::{NoopObserver, SimBuilder, UniformArrivals};
//!
//! let config = SimConfig { seed: Some(7), ..SimConfig::default() };
//! let mut sim = SimBuilder::new(config.clone(), UniformArrivals::from_config(&config))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! println!("{}", sim.stats().summary());
//! ```

pub mod arrivals;
pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;
pub mod stats;


pub use arrivals::{Arrival, ArrivalModel, PoissonArrivals, ScriptedArrivals, UniformArrivals};
pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::Sim;
pub use stats::{Statistics, WaitSummary};
