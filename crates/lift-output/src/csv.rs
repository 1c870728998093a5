//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `positions.csv`
//! - `trips.csv`

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PositionRow, TripRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    positions:      Writer<File>,
    trips:          Writer<File>,
    positions_path: PathBuf,
    trips_path:     PathBuf,
    finished:       bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open the two CSV files in it and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let positions_path = dir.join("positions.csv");
        let mut positions = Writer::from_path(&positions_path)?;
        positions.write_record(["tick", "floor", "direction", "doors_opened", "boarded", "delivered"])?;

        let trips_path = dir.join("trips.csv");
        let mut trips = Writer::from_path(&trips_path)?;
        trips.write_record(["person_id", "origin", "destination", "arrival", "pickup", "dropoff"])?;

        Ok(Self {
            positions,
            trips,
            positions_path,
            trips_path,
            finished: false,
        })
    }

    /// Close both files and delete them.  Used when a run fails part way so
    /// no truncated output is left behind.
    pub fn discard(self) -> OutputResult<()> {
        let Self { positions, trips, positions_path, trips_path, .. } = self;
        drop(positions);
        drop(trips);
        fs::remove_file(&positions_path)?;
        fs::remove_file(&trips_path)?;
        Ok(())
    }
}

impl OutputWriter for CsvWriter {
    fn write_position(&mut self, row: &PositionRow) -> OutputResult<()> {
        self.positions.write_record(&[
            row.tick.to_string(),
            row.floor.to_string(),
            row.direction.as_str().to_string(),
            (row.doors_opened as u8).to_string(),
            row.boarded.to_string(),
            row.delivered.to_string(),
        ])?;
        Ok(())
    }

    fn write_trips(&mut self, rows: &[TripRow]) -> OutputResult<()> {
        for row in rows {
            self.trips.write_record(&[
                row.person_id.to_string(),
                row.origin.to_string(),
                row.destination.to_string(),
                row.arrival.to_string(),
                row.pickup.to_string(),
                row.dropoff.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.positions.flush()?;
        self.trips.flush()?;
        Ok(())
    }
}
