//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  One tick is the time
//! the elevator needs to travel one floor; opening the doors on arrival
//! happens within the same tick.  There is no mapping to wall-clock time.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Ticks elapsed from `earlier` to `self`, or 0 if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The simulation clock: the tick about to be processed and the exclusive
/// end of the run.
#[derive(Clone, Debug)]
pub struct SimClock {
    pub current_tick: Tick,
    pub end_tick:     Tick,
}

impl SimClock {
    /// A clock at tick 0 that finishes after `iterations` ticks.
    pub fn new(iterations: u64) -> Self {
        Self {
            current_tick: Tick::ZERO,
            end_tick:     Tick(iterations),
        }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick + 1;
    }

    /// `true` once every configured tick has been processed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current_tick >= self.end_tick
    }

    /// Ticks left before `end_tick` (0 when finished or overrun).
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.end_tick.since(self.current_tick)
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.current_tick, self.end_tick.0)
    }
}
