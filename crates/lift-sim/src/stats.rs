//! Wait-time statistics over delivered passengers.

use std::fmt;

use lift_core::TripRecord;

/// Append-only log of completed trips.
///
/// People still waiting or aboard when the run ends are not in the log and
/// do not contribute to any mean.
#[derive(Clone, Debug, Default)]
pub struct Statistics {
    trips: Vec<TripRecord>,
}

impl Statistics {
    pub fn record(&mut self, trip: TripRecord) {
        self.trips.push(trip);
    }

    /// Delivered trips in dropoff order.
    pub fn trips(&self) -> &[TripRecord] {
        &self.trips
    }

    #[inline]
    pub fn delivered(&self) -> usize {
        self.trips.len()
    }

    fn mean(&self, f: impl Fn(&TripRecord) -> u64) -> Option<f64> {
        if self.trips.is_empty() {
            return None;
        }
        let sum: u64 = self.trips.iter().map(f).sum();
        Some(sum as f64 / self.trips.len() as f64)
    }

    /// Mean of `pickup - arrival`.
    pub fn mean_waiting_for_elevator(&self) -> Option<f64> {
        self.mean(TripRecord::waiting_for_elevator)
    }

    /// Mean of `dropoff - pickup`.
    pub fn mean_waiting_on_elevator(&self) -> Option<f64> {
        self.mean(TripRecord::waiting_on_elevator)
    }

    /// Mean of `dropoff - arrival`.
    pub fn mean_total_wait(&self) -> Option<f64> {
        self.mean(TripRecord::total)
    }

    /// Longest pickup wait of any delivered person.
    pub fn max_waiting_for_elevator(&self) -> Option<u64> {
        self.trips.iter().map(TripRecord::waiting_for_elevator).max()
    }

    pub fn summary(&self) -> WaitSummary {
        WaitSummary {
            delivered:                 self.delivered(),
            mean_waiting_for_elevator: self.mean_waiting_for_elevator(),
            mean_waiting_on_elevator:  self.mean_waiting_on_elevator(),
            mean_total_wait:           self.mean_total_wait(),
            max_waiting_for_elevator:  self.max_waiting_for_elevator(),
        }
    }
}

// ── WaitSummary ───────────────────────────────────────────────────────────────

/// The end-of-run report.  `Display` prints the three means, three decimals
/// each, or `n/a` when nobody was delivered.
#[derive(Clone, Debug, PartialEq)]
pub struct WaitSummary {
    pub delivered:                 usize,
    pub mean_waiting_for_elevator: Option<f64>,
    pub mean_waiting_on_elevator:  Option<f64>,
    pub mean_total_wait:           Option<f64>,
    pub max_waiting_for_elevator:  Option<u64>,
}

struct Mean(Option<f64>);

impl fmt::Display for Mean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.3}"),
            None    => f.write_str("n/a"),
        }
    }
}

impl fmt::Display for WaitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mean waiting for elevator time: {}", Mean(self.mean_waiting_for_elevator))?;
        writeln!(f, "Mean waiting on elevator time : {}", Mean(self.mean_waiting_on_elevator))?;
        write!(f, "Mean total wait time          : {}", Mean(self.mean_total_wait))
    }
}
