//! Unit and scenario tests for the dispatch controller.

use std::collections::{BTreeMap, BTreeSet};

use lift_core::{Direction, Floor, Person, PersonId, SimRng, Tick, TripRecord};

use crate::{Controller, DispatchConfig, DispatchError, StepOutcome};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn person(id: u64, origin: u32, destination: u32, arrival: u64) -> Person {
    Person::new(PersonId(id), Floor(origin), Floor(destination), Tick(arrival))
}

fn car(floors: u32, max_wait: u64) -> Controller {
    Controller::new(DispatchConfig::new(floors, max_wait)).unwrap()
}

fn car_at(floors: u32, max_wait: u64, start: u32) -> Controller {
    let config = DispatchConfig {
        start_floor: Floor(start),
        ..DispatchConfig::new(floors, max_wait)
    };
    Controller::new(config).unwrap()
}

fn floors(list: &[u32]) -> BTreeSet<Floor> {
    list.iter().map(|&f| Floor(f)).collect()
}

/// Step the car through `ticks`, collecting every delivered trip by person.
fn drive(
    car:    &mut Controller,
    ticks:  std::ops::Range<u64>,
    trips:  &mut BTreeMap<PersonId, TripRecord>,
) -> Vec<StepOutcome> {
    ticks
        .map(|t| {
            let outcome = car.step(Tick(t));
            for p in &outcome.delivered {
                trips.insert(p.id, p.trip().unwrap());
            }
            outcome
        })
        .collect()
}

// ── Admission ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod admission_tests {
    use super::*;

    #[test]
    fn same_floor_trip_is_rejected() {
        let mut c = car(5, 10);
        let err = c.submit(person(0, 3, 3, 0)).unwrap_err();
        assert_eq!(err, DispatchError::SameFloor { person: PersonId(0), floor: Floor(3) });
        assert_eq!(c.waiting_count(), 0);
    }

    #[test]
    fn floor_outside_building_is_rejected() {
        let mut c = car(5, 10);
        assert!(matches!(
            c.submit(person(0, 0, 3, 0)),
            Err(DispatchError::FloorOutOfRange { floor: Floor(0), floors: 5, .. })
        ));
        assert!(matches!(
            c.submit(person(1, 2, 6, 0)),
            Err(DispatchError::FloorOutOfRange { floor: Floor(6), floors: 5, .. })
        ));
    }

    #[test]
    fn already_boarded_person_is_rejected() {
        let mut c = car(5, 10);
        let mut p = person(0, 1, 4, 0);
        p.pickup = Some(Tick(0));
        assert_eq!(
            c.submit(p).unwrap_err(),
            DispatchError::AlreadyBoarded { person: PersonId(0) }
        );
    }

    #[test]
    fn start_floor_must_exist() {
        let config = DispatchConfig { start_floor: Floor(9), ..DispatchConfig::new(8, 10) };
        assert!(matches!(
            Controller::new(config),
            Err(DispatchError::StartFloorOutOfRange { floor: Floor(9), floors: 8 })
        ));
    }

    #[test]
    fn accepted_requests_wait_at_their_origin() {
        let mut c = car(5, 10);
        c.submit(person(0, 2, 5, 0)).unwrap();
        c.submit(person(1, 2, 1, 0)).unwrap();
        c.submit(person(2, 4, 1, 0)).unwrap();
        assert_eq!(c.waiting_count(), 3);
        assert_eq!(c.waiting_at(Floor(2)), 2);
        assert_eq!(c.waiting_at(Floor(4)), 1);
        assert_eq!(c.aboard_count(), 0);
        assert!(!c.is_quiescent());
    }
}

// ── Idle behavior ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod idle_tests {
    use super::*;

    #[test]
    fn empty_car_holds_position() {
        let mut c = car(5, 10);
        let out = c.step(Tick(0));
        assert_eq!(out.floor, Floor::LOBBY);
        assert_eq!(out.direction, Direction::Idle);
        assert_eq!(out.motion, None);
        assert!(!out.doors_opened);
        assert!(c.is_quiescent());
    }

    #[test]
    fn pickup_at_current_floor_then_departs_up() {
        let mut c = car(2, 10);
        c.submit(person(0, 1, 2, 0)).unwrap();

        let first = c.step(Tick(0));
        assert!(first.doors_opened);
        assert_eq!(first.motion, None);
        assert_eq!(first.boarded, vec![PersonId(0)]);
        assert_eq!(first.floor, Floor(1));
        assert_eq!(first.direction, Direction::Up);

        let second = c.step(Tick(1));
        assert_eq!(second.motion, Some(Direction::Up));
        assert_eq!(second.floor, Floor(2));
        assert_eq!(second.delivered.len(), 1);
        let trip = second.delivered[0].trip().unwrap();
        assert_eq!((trip.arrival, trip.pickup, trip.dropoff), (Tick(0), Tick(0), Tick(1)));
        assert_eq!(second.direction, Direction::Idle);
        assert!(c.is_quiescent());
    }

    #[test]
    fn idle_car_heads_to_nearest_request() {
        let mut c = car_at(10, 50, 5);
        c.submit(person(0, 8, 9, 0)).unwrap();
        c.submit(person(1, 3, 1, 0)).unwrap();

        let out = c.step(Tick(0));
        assert_eq!(out.motion, Some(Direction::Down));
        assert_eq!(out.floor, Floor(4));
        assert_eq!(c.committed_stops(), floors(&[3]));
    }

    #[test]
    fn equidistant_requests_go_to_the_oldest() {
        // Floor 3 was requested first.
        let mut c = car_at(10, 50, 5);
        c.submit(person(0, 3, 9, 0)).unwrap();
        c.submit(person(1, 7, 1, 1)).unwrap();
        assert_eq!(c.step(Tick(1)).motion, Some(Direction::Down));

        // Floor 7 was requested first.
        let mut c = car_at(10, 50, 5);
        c.submit(person(0, 7, 1, 0)).unwrap();
        c.submit(person(1, 3, 9, 1)).unwrap();
        assert_eq!(c.step(Tick(1)).motion, Some(Direction::Up));
    }

    #[test]
    fn quiescent_car_stays_put() {
        let mut c = car(4, 10);
        c.submit(person(0, 1, 3, 0)).unwrap();
        let mut trips = BTreeMap::new();
        drive(&mut c, 0..3, &mut trips);
        assert_eq!(trips.len(), 1);
        assert!(c.is_quiescent());

        let parked = c.current_floor();
        for out in drive(&mut c, 3..10, &mut trips) {
            assert_eq!(out.floor, parked);
            assert_eq!(out.motion, None);
            assert!(!out.doors_opened);
            assert_eq!(out.direction, Direction::Idle);
        }
    }
}

// ── SCAN sweep ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sweep_tests {
    use super::*;

    #[test]
    fn same_direction_request_ahead_is_admitted() {
        let mut c = car(10, 100);
        c.submit(person(0, 1, 8, 0)).unwrap();
        c.step(Tick(0));
        c.step(Tick(1)); // → floor 2

        c.submit(person(1, 5, 9, 2)).unwrap(); // up, ahead: admitted
        c.submit(person(2, 4, 1, 2)).unwrap(); // down, ahead: left for later
        c.step(Tick(2)); // → floor 3
        assert_eq!(c.committed_stops(), floors(&[5, 8]));

        let at4 = c.step(Tick(3));
        assert_eq!(at4.floor, Floor(4));
        assert!(!at4.doors_opened, "down-bound request must not stop an up sweep");

        let at5 = c.step(Tick(4));
        assert_eq!(at5.floor, Floor(5));
        assert_eq!(at5.boarded, vec![PersonId(1)]);
        assert_eq!(c.waiting_at(Floor(4)), 1);
        assert_eq!(c.committed_stops(), floors(&[8, 9]));
    }

    #[test]
    fn simultaneous_requests_at_one_floor_are_one_stop() {
        let mut c = car(8, 100);
        c.submit(person(0, 1, 6, 0)).unwrap();
        c.step(Tick(0));

        c.submit(person(1, 4, 5, 1)).unwrap();
        c.submit(person(2, 4, 7, 1)).unwrap();
        c.submit(person(3, 4, 8, 1)).unwrap();
        c.step(Tick(1));
        assert_eq!(c.committed_stops(), floors(&[4, 6]));

        c.step(Tick(2));
        let at4 = c.step(Tick(3));
        assert_eq!(at4.floor, Floor(4));
        assert_eq!(at4.boarded, vec![PersonId(1), PersonId(2), PersonId(3)]);
        assert_eq!(c.aboard_count(), 4);
        assert_eq!(c.committed_stops(), floors(&[5, 6, 7, 8]));
    }

    #[test]
    fn request_beyond_farthest_stop_waits_for_next_sweep() {
        let mut c = car(10, 100);
        c.submit(person(0, 1, 3, 0)).unwrap();
        c.step(Tick(0));

        c.submit(person(1, 6, 8, 1)).unwrap();
        c.step(Tick(1));
        assert_eq!(c.committed_stops(), floors(&[3]));

        let at3 = c.step(Tick(2));
        assert_eq!(at3.delivered.len(), 1);
        assert_eq!(at3.direction, Direction::Idle);

        let mut trips = BTreeMap::new();
        let outs = drive(&mut c, 3..6, &mut trips);
        assert_eq!(outs[2].floor, Floor(6));
        assert_eq!(outs[2].boarded, vec![PersonId(1)]);
    }
}

// ── Opposite directions at one floor ──────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    /// X rides 1 → 6 and sets the sweep upward; A (3 → 5) and B (3 → 1) appear
    /// together at floor 3 one tick later.
    fn opposite_directions(max_wait: u64) -> (BTreeMap<PersonId, TripRecord>, Vec<StepOutcome>) {
        let mut c = car(6, max_wait);
        let mut trips = BTreeMap::new();
        c.submit(person(0, 1, 6, 0)).unwrap();
        let mut outs = drive(&mut c, 0..1, &mut trips);
        c.submit(person(1, 3, 5, 1)).unwrap();
        c.submit(person(2, 3, 1, 1)).unwrap();
        outs.extend(drive(&mut c, 1..20, &mut trips));
        assert!(c.is_quiescent());
        (trips, outs)
    }

    #[test]
    fn sweep_direction_served_first_other_on_return() {
        let (trips, _) = opposite_directions(100);
        let a = trips[&PersonId(1)];
        let b = trips[&PersonId(2)];
        let x = trips[&PersonId(0)];

        assert_eq!((a.pickup, a.dropoff), (Tick(2), Tick(4)));
        assert_eq!(x.dropoff, Tick(5));
        assert_eq!((b.pickup, b.dropoff), (Tick(8), Tick(10)));
        assert!(b.pickup > a.pickup);
    }

    #[test]
    fn overdue_request_forces_reversal() {
        let (trips, outs) = opposite_directions(2);
        let a = trips[&PersonId(1)];
        let b = trips[&PersonId(2)];
        let x = trips[&PersonId(0)];

        // B turns overdue at tick 4 with the car at floor 4 heading up.
        assert_eq!(outs[3].floor, Floor(4));
        assert_eq!(outs[4].motion, Some(Direction::Down));
        assert_eq!(outs[4].boarded, vec![PersonId(2)]);

        assert_eq!((b.pickup, b.dropoff), (Tick(4), Tick(6)));
        assert_eq!(a.dropoff, Tick(10));
        assert_eq!(x.dropoff, Tick(11));
    }

    #[test]
    fn forced_stop_at_current_floor_opens_in_place() {
        let (trips, outs) = opposite_directions(1);
        assert_eq!(outs[3].motion, None);
        assert!(outs[3].doors_opened);
        assert_eq!(outs[3].floor, Floor(3));
        assert_eq!(outs[3].boarded, vec![PersonId(2)]);
        assert_eq!(trips[&PersonId(2)].pickup, Tick(3));
    }

    #[test]
    fn pickup_wait_respects_fairness_bound() {
        for max_wait in 1..=8 {
            let (trips, _) = opposite_directions(max_wait);
            assert_eq!(trips.len(), 3);
            for trip in trips.values() {
                assert!(
                    trip.waiting_for_elevator() <= max_wait + 5,
                    "max_wait {max_wait}: {trip:?}"
                );
            }
        }
    }
}

// ── Starvation override ───────────────────────────────────────────────────────

#[cfg(test)]
mod override_tests {
    use super::*;

    #[test]
    fn overdue_landing_with_wrong_direction_riders_does_not_stall() {
        // O (3 → 1) is the oldest request; N (5 → 8) turns overdue while the
        // car passes floor 5 on its way down to O.
        let mut c = car_at(10, 1, 5);
        let mut trips = BTreeMap::new();
        c.submit(person(0, 5, 10, 0)).unwrap();
        c.submit(person(1, 3, 1, 0)).unwrap();
        let mut outs = drive(&mut c, 0..1, &mut trips);
        c.submit(person(2, 5, 8, 1)).unwrap();
        outs.extend(drive(&mut c, 1..30, &mut trips));

        assert_eq!(outs[2].floor, Floor(5));
        assert_eq!(outs[3].motion, Some(Direction::Down));
        assert_eq!(outs[3].floor, Floor(4));
        assert!(!outs[3].doors_opened);

        assert_eq!(trips[&PersonId(1)].pickup, Tick(4));
        assert_eq!(trips[&PersonId(2)].pickup, Tick(6));
        assert_eq!(trips.len(), 3);
    }

    #[test]
    fn idle_car_serves_overdue_request() {
        let mut c = car_at(9, 1, 1);
        c.submit(person(0, 9, 1, 0)).unwrap();
        let mut trips = BTreeMap::new();
        drive(&mut c, 0..20, &mut trips);
        let trip = trips[&PersonId(0)];
        assert!(trip.waiting_for_elevator() <= 1 + 8);
        assert_eq!(trip.pickup, Tick(7));
    }
}

// ── Invariants under random load ──────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use super::*;

    #[test]
    fn car_moves_at_most_one_floor_per_tick_and_timestamps_are_ordered() {
        let floors_n = 8;
        for seed in 0..5 {
            let mut rng = SimRng::new(seed);
            let mut c = car(floors_n, 12);
            let mut next_id = 0;
            let mut last = c.current_floor();
            let mut delivered = 0;

            for t in 0..500u64 {
                if t < 300 && rng.gen_bool(0.4) {
                    let origin: u32 = rng.gen_range(1..=floors_n);
                    let mut dest: u32 = rng.gen_range(1..floors_n);
                    if dest >= origin {
                        dest += 1;
                    }
                    c.submit(person(next_id, origin, dest, t)).unwrap();
                    next_id += 1;
                }

                let out = c.step(Tick(t));
                assert!(out.floor.in_range(floors_n));
                assert!(out.floor.distance(last) <= 1, "seed {seed} tick {t}");
                if out.motion.is_none() {
                    assert_eq!(out.floor, last);
                }
                last = out.floor;

                for p in &out.delivered {
                    let trip = p.trip().unwrap();
                    assert!(trip.arrival <= trip.pickup);
                    assert!(trip.pickup <= trip.dropoff);
                    assert_eq!(trip.dropoff, Tick(t));
                    assert_eq!(out.floor, p.destination);
                    delivered += 1;
                }
            }
            assert_eq!(delivered, next_id, "seed {seed}: everyone delivered after load stops");
        }
    }
}
