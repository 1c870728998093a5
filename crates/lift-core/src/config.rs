//! Run configuration.

use crate::{LiftError, LiftResult};

/// Top-level simulation configuration.
///
/// Built from command-line flags or loaded from a TOML file by the
/// application crate, then checked with [`validate`][Self::validate] before
/// any tick runs.  Keys missing from a file take their [`Default`] values.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SimConfig {
    /// Number of floors in the building.  At least 2.
    pub floors: u32,

    /// Ticks to simulate.  At least 1.
    pub iterations: u64,

    /// Upper bound (inclusive) on new people appearing per floor per tick
    /// with uniform arrivals; group size bound with Poisson arrivals.
    pub max_new_people_per_tick: u32,

    /// Age in ticks beyond which a waiting request is force-committed
    /// regardless of the sweep direction.  At least 1.
    pub max_wait_threshold: u64,

    /// Master RNG seed.  `None` draws one from OS entropy; the same seed
    /// always produces identical results.
    pub seed: Option<u64>,
}

impl SimConfig {
    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> LiftResult<()> {
        if self.floors < 2 {
            return Err(LiftError::Config(format!(
                "floors must be at least 2, got {}",
                self.floors
            )));
        }
        if self.iterations < 1 {
            return Err(LiftError::Config(
                "iterations must be at least 1".to_string(),
            ));
        }
        if self.max_wait_threshold < 1 {
            return Err(LiftError::Config(
                "max_wait_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Worst-case pickup wait promised by the fairness rule when only one
    /// request is overdue at a time.
    #[inline]
    pub fn fairness_bound(&self) -> u64 {
        self.max_wait_threshold + u64::from(self.floors - 1)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            floors:                  50,
            iterations:              100,
            max_new_people_per_tick: 3,
            max_wait_threshold:      100,
            seed:                    None,
        }
    }
}
