//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use lift_core::Tick;
use lift_dispatch::StepOutcome;
use lift_sim::{SimObserver, Statistics};
use log::{debug, warn};

use crate::row::{PositionRow, TripRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes one position row per tick and one trip row
/// per delivered passenger to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    trips:      usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            trips:      0,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("output write failed: {e}");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, outcome: &StepOutcome) {
        let result = self.writer.write_position(&PositionRow::from(outcome));
        self.store_err(result);

        let rows: Vec<TripRow> = outcome
            .delivered
            .iter()
            .filter_map(|person| person.trip())
            .map(|trip| TripRow::from(&trip))
            .collect();

        if !rows.is_empty() {
            self.trips += rows.len();
            let result = self.writer.write_trips(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick, _stats: &Statistics) {
        let result = self.writer.finish();
        self.store_err(result);
        debug!("output closed at {final_tick} after {} trip rows", self.trips);
    }
}
