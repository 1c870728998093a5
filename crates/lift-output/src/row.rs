//! Plain data row types written by output backends.

use lift_core::{Direction, TripRecord};
use lift_dispatch::StepOutcome;

/// Where the car was at the end of one tick and what it did there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRow {
    pub tick:         u64,
    pub floor:        u32,
    pub direction:    Direction,
    pub doors_opened: bool,
    /// Number of people who boarded this tick.
    pub boarded:      u32,
    /// Number of people dropped off this tick.
    pub delivered:    u32,
}

impl From<&StepOutcome> for PositionRow {
    fn from(outcome: &StepOutcome) -> Self {
        Self {
            tick:         outcome.tick.0,
            floor:        outcome.floor.0,
            direction:    outcome.direction,
            doors_opened: outcome.doors_opened,
            boarded:      outcome.boarded.len() as u32,
            delivered:    outcome.delivered.len() as u32,
        }
    }
}

/// One delivered passenger's trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripRow {
    pub person_id:   u64,
    pub origin:      u32,
    pub destination: u32,
    pub arrival:     u64,
    pub pickup:      u64,
    pub dropoff:     u64,
}

impl From<&TripRecord> for TripRow {
    fn from(trip: &TripRecord) -> Self {
        Self {
            person_id:   trip.person.0,
            origin:      trip.origin.0,
            destination: trip.destination.0,
            arrival:     trip.arrival.0,
            pickup:      trip.pickup.0,
            dropoff:     trip.dropoff.0,
        }
    }
}
