//! `lift-output` — simulation output writers for liftsim.
//!
//! | Backend | Files created                    |
//! |---------|----------------------------------|
//! | CSV     | `positions.csv`, `trips.csv`     |
//!
//! `positions.csv` has one row per tick (the car's floor and direction at
//! the end of the tick, for plotting the trajectory); `trips.csv` has one
//! row per delivered passenger with the three timestamps.
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `lift_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{PositionRow, TripRow};
pub use writer::OutputWriter;
