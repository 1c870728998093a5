//! The `OutputWriter` trait implemented by backend writers.

use crate::{OutputResult, PositionRow, TripRow};

/// Sink for the position trace and the trip log.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write the car's state for one tick.
    fn write_position(&mut self, row: &PositionRow) -> OutputResult<()>;

    /// Write a batch of completed trips.
    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
