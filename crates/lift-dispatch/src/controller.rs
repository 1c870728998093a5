//! The `Controller` — elevator state plus the per-tick dispatch decision.
//!
//! # Policy
//!
//! The car sweeps like a disk head (SCAN): it keeps its direction while
//! committed stops remain ahead, reverses when only stops behind remain, and
//! goes idle when nothing is committed.  New pickup requests are admitted
//! into the committed set only when they lie ahead of the car, no further
//! than its farthest current stop, and travel the same way.  Everything else
//! waits for the return sweep.
//!
//! Superimposed on that is the starvation override.  A landing whose oldest
//! request has waited more than `max_wait` ticks is committed regardless of
//! direction, and the car heads straight for the oldest such landing,
//! reversing immediately if it has to.  With one overdue request at a time
//! this bounds the pickup wait by `max_wait + floors - 1`.
//!
//! # Tick anatomy
//!
//! ```text
//! step(now):
//!   ① Admit    — commit landings per the rules above.
//!   ② Doors    — if the current floor is a stop with work to do, serve it
//!                in place and stop there.
//!   ③ Move     — otherwise move one floor toward the heading; if the new
//!                floor is a stop, serve it in the same tick.
//! ```
//!
//! Serving a floor drops off everyone bound for it, picks the departure
//! direction, and boards everyone waiting there who travels that way.

use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound::{Excluded, Unbounded};

use lift_core::{Direction, Floor, Person, Tick};
use log::{debug, trace};

use crate::{DispatchError, DispatchResult, Landing, StepOutcome};

// ── DispatchConfig ────────────────────────────────────────────────────────────

/// Controller parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Number of floors; valid floors are `1..=floors`.
    pub floors:      u32,
    /// Age in ticks beyond which a request is force-committed.
    pub max_wait:    u64,
    /// Where the car is parked at tick 0.
    pub start_floor: Floor,
}

impl DispatchConfig {
    /// A configuration with the car parked in the lobby.
    pub fn new(floors: u32, max_wait: u64) -> Self {
        Self {
            floors,
            max_wait,
            start_floor: Floor::LOBBY,
        }
    }
}

// ── Controller ────────────────────────────────────────────────────────────────

/// Single-car dispatch controller.
///
/// Owns the car (floor, direction, passengers aboard) and the pool of
/// waiting requests.  The only mutators are [`submit`][Self::submit] and
/// [`step`][Self::step].
#[derive(Debug)]
pub struct Controller {
    floors:        u32,
    max_wait:      u64,
    current_floor: Floor,
    direction:     Direction,
    /// Waiting passengers by origin floor.  Empty landings are removed.
    waiting:       BTreeMap<Floor, Landing>,
    /// Passengers aboard by destination floor.  Every key is a dropoff stop.
    aboard:        BTreeMap<Floor, Vec<Person>>,
    /// Pickup floors the car has committed to visit.
    pickups:       BTreeSet<Floor>,
}

impl Controller {
    pub fn new(config: DispatchConfig) -> DispatchResult<Self> {
        if !config.start_floor.in_range(config.floors) {
            return Err(DispatchError::StartFloorOutOfRange {
                floor:  config.start_floor,
                floors: config.floors,
            });
        }
        Ok(Self {
            floors:        config.floors,
            max_wait:      config.max_wait,
            current_floor: config.start_floor,
            direction:     Direction::Idle,
            waiting:       BTreeMap::new(),
            aboard:        BTreeMap::new(),
            pickups:       BTreeSet::new(),
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Register a waiting passenger's pickup request.
    ///
    /// Rejects trips that reference a floor outside the building, trips
    /// whose origin equals the destination, and people already picked up.
    /// These can only come from a faulty generator and are not recoverable.
    pub fn submit(&mut self, person: Person) -> DispatchResult<()> {
        for floor in [person.origin, person.destination] {
            if !floor.in_range(self.floors) {
                return Err(DispatchError::FloorOutOfRange {
                    person: person.id,
                    floor,
                    floors: self.floors,
                });
            }
        }
        if person.origin == person.destination {
            return Err(DispatchError::SameFloor {
                person: person.id,
                floor:  person.origin,
            });
        }
        if person.pickup.is_some() {
            return Err(DispatchError::AlreadyBoarded { person: person.id });
        }
        self.waiting.entry(person.origin).or_default().push(person);
        Ok(())
    }

    /// Advance the car by one tick.
    pub fn step(&mut self, now: Tick) -> StepOutcome {
        self.admit(now);
        let here = self.current_floor;
        let mut outcome = StepOutcome::new(now, here, self.direction);

        if self.is_stop(here) && self.has_work_here(now) {
            self.serve(now, &mut outcome);
        } else {
            // Nobody here would board in the chosen direction.  Admission
            // re-commits the landing later if it still needs a visit.
            self.pickups.remove(&here);
            self.advance(now, &mut outcome);
        }

        debug_assert!(self.current_floor.in_range(self.floors));
        outcome.floor = self.current_floor;
        outcome.direction = self.direction;
        outcome
    }

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The committed stop set: pickup commitments plus the destinations of
    /// everyone aboard.
    pub fn committed_stops(&self) -> BTreeSet<Floor> {
        let mut stops = self.pickups.clone();
        stops.extend(self.aboard.keys().copied());
        stops
    }

    /// People waiting at all landings.
    pub fn waiting_count(&self) -> usize {
        self.waiting.values().map(Landing::len).sum()
    }

    /// People waiting at `floor`.
    pub fn waiting_at(&self, floor: Floor) -> usize {
        self.waiting.get(&floor).map_or(0, Landing::len)
    }

    /// People riding the car.
    pub fn aboard_count(&self) -> usize {
        self.aboard.values().map(Vec::len).sum()
    }

    /// `true` when nobody is waiting or aboard.
    pub fn is_quiescent(&self) -> bool {
        self.waiting.is_empty() && self.aboard.is_empty()
    }

    // ── Admission ─────────────────────────────────────────────────────────

    fn admit(&mut self, now: Tick) {
        let here = self.current_floor;
        let direction = self.direction;
        let farthest = self.farthest_stop(direction);

        let mut admitted = Vec::new();
        for (&floor, landing) in &self.waiting {
            if self.pickups.contains(&floor) {
                continue;
            }
            let Some(age) = landing.oldest_age(now) else {
                continue;
            };
            if age > self.max_wait {
                debug!(
                    "{now}: request at {floor} waited {age} ticks (limit {}), forcing a stop",
                    self.max_wait
                );
                admitted.push(floor);
                continue;
            }
            let en_route = farthest.is_some_and(|limit| {
                direction.is_ahead(here, floor) && !direction.is_ahead(limit, floor)
            });
            if en_route && landing.has(direction) {
                admitted.push(floor);
            }
        }
        self.pickups.extend(admitted);

        if direction == Direction::Idle && !self.has_any_stop() {
            if let Some(floor) = self.nearest_request() {
                trace!("{now}: idle at {here}, committing nearest request at {floor}");
                self.pickups.insert(floor);
            }
        }
    }

    // ── Motion ────────────────────────────────────────────────────────────

    fn advance(&mut self, now: Tick, outcome: &mut StepOutcome) {
        let Some(heading) = self.heading(now) else {
            self.direction = Direction::Idle;
            return;
        };
        if self.direction != Direction::Idle && heading == self.direction.reverse() {
            debug!("{now}: reversing at {} to head {heading}", self.current_floor);
        }

        self.current_floor = self.current_floor.step(heading);
        self.direction = heading;
        outcome.motion = Some(heading);
        trace!("{now}: moved {heading} to {}", self.current_floor);

        if self.is_stop(self.current_floor) {
            self.serve(now, outcome);
        }
    }

    /// Which way to move this tick, or `None` to stay idle.
    fn heading(&self, now: Tick) -> Option<Direction> {
        let here = self.current_floor;
        if let Some(target) = self.overdue_target(now) {
            let toward = Direction::toward(here, target);
            if toward != Direction::Idle {
                return Some(toward);
            }
        }
        match self.direction {
            Direction::Idle => self
                .nearest_stop()
                .map(|floor| Direction::toward(here, floor))
                .filter(|&d| d != Direction::Idle),
            d if self.has_stops_beyond(here, d) => Some(d),
            d if self.has_stops_beyond(here, d.reverse()) => Some(d.reverse()),
            _ => None,
        }
    }

    // ── Doors ─────────────────────────────────────────────────────────────

    /// `true` if opening the doors here would let anyone off or on.
    fn has_work_here(&self, now: Tick) -> bool {
        let here = self.current_floor;
        let departure = self.departure_direction(now);
        self.aboard.contains_key(&here)
            || self.waiting.get(&here).is_some_and(|l| l.has(departure))
    }

    fn serve(&mut self, now: Tick, outcome: &mut StepOutcome) {
        let here = self.current_floor;
        outcome.doors_opened = true;

        if let Some(mut leaving) = self.aboard.remove(&here) {
            for person in &mut leaving {
                person.dropoff = Some(now);
            }
            trace!("{now}: {} left the car at {here}", leaving.len());
            outcome.delivered.append(&mut leaving);
        }
        self.pickups.remove(&here);

        let departure = self.departure_direction(now);
        let mut emptied = false;
        if let Some(landing) = self.waiting.get_mut(&here) {
            for mut person in landing.take(departure) {
                person.pickup = Some(now);
                outcome.boarded.push(person.id);
                self.aboard.entry(person.destination).or_default().push(person);
            }
            emptied = landing.is_empty();
        }
        if emptied {
            self.waiting.remove(&here);
        }
        self.direction = departure;
    }

    /// Direction the car leaves the current floor in, decided while the
    /// doors are open.
    fn departure_direction(&self, now: Tick) -> Direction {
        let here = self.current_floor;
        let landing = self.waiting.get(&here);

        if let Some(target) = self.overdue_target(now) {
            if target != here {
                return Direction::toward(here, target);
            }
            return landing
                .and_then(Landing::oldest)
                .map_or(Direction::Idle, Person::direction);
        }

        let preferred = match self.direction {
            Direction::Idle => landing
                .and_then(Landing::oldest)
                .map(Person::direction)
                .or_else(|| self.nearest_stop().map(|floor| Direction::toward(here, floor)))
                .unwrap_or(Direction::Idle),
            d => d,
        };
        if preferred == Direction::Idle {
            return Direction::Idle;
        }

        [preferred, preferred.reverse()]
            .into_iter()
            .find(|&d| self.has_stops_beyond(here, d) || landing.is_some_and(|l| l.has(d)))
            .unwrap_or(Direction::Idle)
    }

    // ── Stop-set queries ──────────────────────────────────────────────────

    #[inline]
    fn is_stop(&self, floor: Floor) -> bool {
        self.pickups.contains(&floor) || self.aboard.contains_key(&floor)
    }

    #[inline]
    fn has_any_stop(&self) -> bool {
        !self.pickups.is_empty() || !self.aboard.is_empty()
    }

    /// `true` if any committed stop lies strictly beyond `from` in `direction`.
    fn has_stops_beyond(&self, from: Floor, direction: Direction) -> bool {
        match direction {
            Direction::Up => {
                self.pickups.range((Excluded(from), Unbounded)).next().is_some()
                    || self.aboard.range((Excluded(from), Unbounded)).next().is_some()
            }
            Direction::Down => {
                self.pickups.range(..from).next().is_some()
                    || self.aboard.range(..from).next().is_some()
            }
            Direction::Idle => false,
        }
    }

    /// The extreme committed stop in `direction` (highest for `Up`, lowest
    /// for `Down`).
    fn farthest_stop(&self, direction: Direction) -> Option<Floor> {
        match direction {
            Direction::Up => [
                self.pickups.last().copied(),
                self.aboard.keys().next_back().copied(),
            ]
            .into_iter()
            .flatten()
            .max(),
            Direction::Down => [
                self.pickups.first().copied(),
                self.aboard.keys().next().copied(),
            ]
            .into_iter()
            .flatten()
            .min(),
            Direction::Idle => None,
        }
    }

    /// Nearest committed stop; ties go to the stop with the oldest waiting
    /// request, then the lower floor.
    fn nearest_stop(&self) -> Option<Floor> {
        let here = self.current_floor;
        self.committed_stops().into_iter().min_by_key(|&floor| {
            let oldest = self
                .waiting
                .get(&floor)
                .and_then(Landing::oldest)
                .map_or((u64::MAX, u64::MAX), |p| (p.arrival.0, p.id.0));
            (floor.distance(here), oldest, floor)
        })
    }

    /// Nearest landing with anyone waiting; ties go to the oldest request.
    fn nearest_request(&self) -> Option<Floor> {
        let here = self.current_floor;
        self.waiting
            .iter()
            .filter_map(|(&floor, landing)| landing.oldest().map(|p| (floor, p)))
            .min_by_key(|(floor, p)| (floor.distance(here), p.arrival, p.id))
            .map(|(floor, _)| floor)
    }

    /// Landing of the oldest request that has exceeded `max_wait`.
    fn overdue_target(&self, now: Tick) -> Option<Floor> {
        self.waiting
            .iter()
            .filter_map(|(&floor, landing)| landing.oldest().map(|p| (floor, p)))
            .filter(|(_, p)| p.age(now) > self.max_wait)
            .min_by_key(|(_, p)| (p.arrival, p.id))
            .map(|(floor, _)| floor)
    }
}
