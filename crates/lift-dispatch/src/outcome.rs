//! What happened during one controller tick.

use lift_core::{Direction, Floor, Person, PersonId, Tick};

/// The result of [`Controller::step`][crate::Controller::step].
///
/// `delivered` hands ownership of every person dropped off this tick back
/// to the caller; the controller keeps no record of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub tick:         Tick,
    /// Elevator floor at the end of the tick.
    pub floor:        Floor,
    /// Elevator direction at the end of the tick (after any door service).
    pub direction:    Direction,
    /// The one-floor move made this tick, or `None` if the car held position.
    pub motion:       Option<Direction>,
    /// `true` if the doors opened at `floor` this tick.
    pub doors_opened: bool,
    /// People who boarded at `floor` this tick.
    pub boarded:      Vec<PersonId>,
    /// People who reached their destination this tick, with `dropoff` set.
    pub delivered:    Vec<Person>,
}

impl StepOutcome {
    pub(crate) fn new(tick: Tick, floor: Floor, direction: Direction) -> Self {
        Self {
            tick,
            floor,
            direction,
            motion:       None,
            doors_opened: false,
            boarded:      Vec::new(),
            delivered:    Vec::new(),
        }
    }
}
