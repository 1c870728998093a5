//! `lift-dispatch` — the elevator dispatch controller.
//!
//! The [`Controller`] owns the car and the pool of outstanding requests.  The
//! simulation engine feeds it passengers with [`Controller::submit`] and
//! drives it with [`Controller::step`], once per tick; everything the car did
//! during the tick comes back as a [`StepOutcome`].
//!
//! See the [`controller`] module docs for the SCAN sweep and the starvation
//! override.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_core::{Floor, Person, PersonId, Tick};
//! use lift_dispatch::{Controller, DispatchConfig};
//!
//! let mut car = Controller::new(DispatchConfig::new(10, 30))?;
//! car.submit(Person::new(PersonId(0), Floor(1), Floor(7), Tick(0)))?;
//! let outcome = car.step(Tick(0));
//! assert_eq!(outcome.boarded, vec![PersonId(0)]);
//! ```

pub mod controller;
pub mod error;
pub mod landing;
pub mod outcome;

#[cfg(test)]
mod tests;

pub use controller::{Controller, DispatchConfig};
pub use error::{DispatchError, DispatchResult};
pub use landing::Landing;
pub use outcome::StepOutcome;
