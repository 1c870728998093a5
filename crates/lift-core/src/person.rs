//! Passengers and the immutable trip log entry they leave behind.

use std::fmt;

use crate::{Direction, Floor, Tick};

// ── PersonId ──────────────────────────────────────────────────────────────────

/// Sequential passenger identifier, allocated by the simulation engine in
/// arrival order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonId(pub u64);

impl PersonId {
    /// The id following `self`.
    #[inline]
    pub fn next(self) -> PersonId {
        PersonId(self.0 + 1)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

// ── Person ────────────────────────────────────────────────────────────────────

/// One passenger.
///
/// Lifecycle: *waiting* (`pickup == None`) → *aboard* (`pickup` set) →
/// *delivered* (`dropoff` set).  A delivered person is turned into a
/// [`TripRecord`] and leaves all active tracking.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    pub id:          PersonId,
    pub origin:      Floor,
    pub destination: Floor,
    /// Tick at which the person appeared and requested a pickup.
    pub arrival:     Tick,
    /// Tick at which the elevator opened at `origin` and took them aboard.
    pub pickup:      Option<Tick>,
    /// Tick at which the elevator opened at `destination` with them aboard.
    pub dropoff:     Option<Tick>,
}

impl Person {
    /// A waiting person.
    pub fn new(id: PersonId, origin: Floor, destination: Floor, arrival: Tick) -> Self {
        Self {
            id,
            origin,
            destination,
            arrival,
            pickup:  None,
            dropoff: None,
        }
    }

    /// Direction of the trip.  `Idle` only for an invalid same-floor trip.
    #[inline]
    pub fn direction(&self) -> Direction {
        Direction::toward(self.origin, self.destination)
    }

    /// Ticks spent since arrival as of `now`.
    #[inline]
    pub fn age(&self, now: Tick) -> u64 {
        now.since(self.arrival)
    }

    /// The completed trip, or `None` while the person is still waiting or
    /// aboard.
    pub fn trip(&self) -> Option<TripRecord> {
        Some(TripRecord {
            person:      self.id,
            origin:      self.origin,
            destination: self.destination,
            arrival:     self.arrival,
            pickup:      self.pickup?,
            dropoff:     self.dropoff?,
        })
    }
}

// ── TripRecord ────────────────────────────────────────────────────────────────

/// The three timestamps of a delivered passenger.  Never mutated once
/// created.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripRecord {
    pub person:      PersonId,
    pub origin:      Floor,
    pub destination: Floor,
    pub arrival:     Tick,
    pub pickup:      Tick,
    pub dropoff:     Tick,
}

impl TripRecord {
    /// Ticks spent waiting at the origin landing.
    #[inline]
    pub fn waiting_for_elevator(&self) -> u64 {
        self.pickup.since(self.arrival)
    }

    /// Ticks spent riding.
    #[inline]
    pub fn waiting_on_elevator(&self) -> u64 {
        self.dropoff.since(self.pickup)
    }

    /// Ticks from arrival to delivery.
    #[inline]
    pub fn total(&self) -> u64 {
        self.dropoff.since(self.arrival)
    }
}
