//! Admission errors.
//!
//! Every variant is an invariant violation: a correct arrival generator never
//! produces them, so callers treat them as fatal rather than retrying.

use lift_core::{Floor, PersonId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("{person} requests a trip from {floor} to the same floor")]
    SameFloor {
        person: PersonId,
        floor:  Floor,
    },

    #[error("{person} references {floor}, outside the building's {floors} floors")]
    FloorOutOfRange {
        person: PersonId,
        floor:  Floor,
        floors: u32,
    },

    #[error("{person} was submitted after already being picked up")]
    AlreadyBoarded { person: PersonId },

    #[error("start floor {floor} is outside the building's {floors} floors")]
    StartFloorOutOfRange { floor: Floor, floors: u32 },
}

pub type DispatchResult<T> = Result<T, DispatchError>;
