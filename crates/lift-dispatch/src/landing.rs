//! `Landing` — the people waiting at one floor, split by travel direction.

use std::collections::VecDeque;

use lift_core::{Direction, Person, Tick};

/// Waiting passengers at a single floor.
///
/// People are appended in arrival order, so the front of each queue is the
/// oldest request in that direction.
#[derive(Default, Debug)]
pub struct Landing {
    up:   VecDeque<Person>,
    down: VecDeque<Person>,
}

impl Landing {
    /// Queue `person` behind everyone already waiting in their direction.
    pub fn push(&mut self, person: Person) {
        match person.direction() {
            Direction::Up => self.up.push_back(person),
            // Same-floor trips are rejected at admission; nothing lands here
            // with `Idle`.
            Direction::Down | Direction::Idle => self.down.push_back(person),
        }
    }

    /// `true` if at least one person here is travelling `direction`.
    #[inline]
    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up   => !self.up.is_empty(),
            Direction::Down => !self.down.is_empty(),
            Direction::Idle => false,
        }
    }

    /// The longest-waiting person here, in either direction.
    ///
    /// Ties on arrival tick go to the lower `PersonId`.
    pub fn oldest(&self) -> Option<&Person> {
        match (self.up.front(), self.down.front()) {
            (Some(u), Some(d)) => Some(if (d.arrival, d.id) < (u.arrival, u.id) { d } else { u }),
            (u, d) => u.or(d),
        }
    }

    /// Ticks the oldest person here has waited as of `now`.
    #[inline]
    pub fn oldest_age(&self, now: Tick) -> Option<u64> {
        self.oldest().map(|p| p.age(now))
    }

    /// Remove and return everyone travelling `direction`, oldest first.
    pub fn take(&mut self, direction: Direction) -> Vec<Person> {
        match direction {
            Direction::Up   => self.up.drain(..).collect(),
            Direction::Down => self.down.drain(..).collect(),
            Direction::Idle => Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.up.len() + self.down.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }
}
