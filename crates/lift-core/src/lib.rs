//! `lift-core` — foundational types for the `liftsim` elevator simulator.
//!
//! This crate is a dependency of every other `lift-*` crate.  It has no
//! `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`floor`]     | `Floor`, `Direction`                                  |
//! | [`time`]      | `Tick`, `SimClock`                                    |
//! | [`person`]    | `PersonId`, `Person`, `TripRecord`                    |
//! | [`config`]    | `SimConfig` and its validation                        |
//! | [`rng`]       | `SimRng` (the single seeded random source of a run)   |
//! | [`error`]     | `LiftError`, `LiftResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                                                    |
//! |---------|-------------------------------------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on the public data types; needed to read `SimConfig` from TOML. |

pub mod config;
pub mod error;
pub mod floor;
pub mod person;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{LiftError, LiftResult};
pub use floor::{Direction, Floor};
pub use person::{Person, PersonId, TripRecord};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
