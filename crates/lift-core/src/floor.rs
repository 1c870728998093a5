//! Floors and travel direction.
//!
//! Floors are numbered from 1 (the lobby) to `floors` inclusive.  Nothing in
//! this module knows the building height; range checks take it as an
//! argument.

use std::fmt;

// ── Floor ─────────────────────────────────────────────────────────────────────

/// A building floor, 1-based.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    /// The ground floor.  Elevators start here unless told otherwise.
    pub const LOBBY: Floor = Floor(1);

    /// `true` if this floor exists in a building with `floors` floors.
    #[inline]
    pub fn in_range(self, floors: u32) -> bool {
        self.0 >= 1 && self.0 <= floors
    }

    /// Number of floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }

    /// The adjacent floor in `direction`.  `Idle` returns `self`.
    ///
    /// Callers are responsible for not stepping below the lobby; stepping
    /// down from floor 1 saturates at floor 1 rather than wrapping.
    #[inline]
    pub fn step(self, direction: Direction) -> Floor {
        match direction {
            Direction::Up   => Floor(self.0 + 1),
            Direction::Down => Floor(self.0.saturating_sub(1).max(1)),
            Direction::Idle => self,
        }
    }

    /// Zero-based index, for per-floor `Vec`s.
    #[inline]
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Inverse of [`index`][Self::index].
    #[inline]
    pub fn from_index(index: usize) -> Floor {
        Floor(index as u32 + 1)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// Direction of travel of the elevator or of a passenger's trip.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    #[default]
    Idle,
}

impl Direction {
    /// Opposite direction.  `Idle` stays `Idle`.
    #[inline]
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Up   => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Idle => Direction::Idle,
        }
    }

    /// Direction needed to get from `from` to `to`; `Idle` if they are equal.
    #[inline]
    pub fn toward(from: Floor, to: Floor) -> Direction {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Direction::Up,
            std::cmp::Ordering::Less    => Direction::Down,
            std::cmp::Ordering::Equal   => Direction::Idle,
        }
    }

    /// `true` if `to` lies strictly ahead of `from` when travelling in `self`.
    #[inline]
    pub fn is_ahead(self, from: Floor, to: Floor) -> bool {
        match self {
            Direction::Up   => to > from,
            Direction::Down => to < from,
            Direction::Idle => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Down => "down",
            Direction::Idle => "idle",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
