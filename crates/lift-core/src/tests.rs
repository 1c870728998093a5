//! Unit tests for lift-core primitives.

#[cfg(test)]
mod floor {
    use crate::{Direction, Floor};

    #[test]
    fn range_check_is_one_based() {
        assert!(!Floor(0).in_range(5));
        assert!(Floor(1).in_range(5));
        assert!(Floor(5).in_range(5));
        assert!(!Floor(6).in_range(5));
    }

    #[test]
    fn step_and_distance() {
        assert_eq!(Floor(3).step(Direction::Up), Floor(4));
        assert_eq!(Floor(3).step(Direction::Down), Floor(2));
        assert_eq!(Floor(3).step(Direction::Idle), Floor(3));
        assert_eq!(Floor::LOBBY.step(Direction::Down), Floor::LOBBY);
        assert_eq!(Floor(2).distance(Floor(7)), 5);
        assert_eq!(Floor(7).distance(Floor(2)), 5);
    }

    #[test]
    fn index_roundtrip() {
        assert_eq!(Floor(1).index(), 0);
        assert_eq!(Floor::from_index(4), Floor(5));
    }

    #[test]
    fn direction_helpers() {
        assert_eq!(Direction::toward(Floor(2), Floor(5)), Direction::Up);
        assert_eq!(Direction::toward(Floor(5), Floor(2)), Direction::Down);
        assert_eq!(Direction::toward(Floor(3), Floor(3)), Direction::Idle);
        assert_eq!(Direction::Up.reverse(), Direction::Down);
        assert_eq!(Direction::Idle.reverse(), Direction::Idle);
        assert!(Direction::Up.is_ahead(Floor(2), Floor(3)));
        assert!(!Direction::Up.is_ahead(Floor(2), Floor(2)));
        assert!(Direction::Down.is_ahead(Floor(2), Floor(1)));
        assert!(!Direction::Idle.is_ahead(Floor(2), Floor(5)));
    }

    #[test]
    fn display() {
        assert_eq!(Floor(7).to_string(), "F7");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15).since(Tick(10)), 5);
        assert_eq!(Tick(10).since(Tick(15)), 0);
    }

    #[test]
    fn clock_runs_to_end() {
        let mut clock = SimClock::new(3);
        assert_eq!(clock.remaining(), 3);
        for _ in 0..3 {
            assert!(!clock.is_finished());
            clock.advance();
        }
        assert!(clock.is_finished());
        assert_eq!(clock.current_tick, Tick(3));
        assert_eq!(clock.remaining(), 0);
    }
}

#[cfg(test)]
mod person {
    use crate::{Direction, Floor, Person, PersonId, Tick};

    #[test]
    fn direction_follows_trip() {
        let up = Person::new(PersonId(0), Floor(1), Floor(4), Tick(0));
        let down = Person::new(PersonId(1), Floor(4), Floor(1), Tick(0));
        assert_eq!(up.direction(), Direction::Up);
        assert_eq!(down.direction(), Direction::Down);
    }

    #[test]
    fn trip_only_when_delivered() {
        let mut p = Person::new(PersonId(3), Floor(2), Floor(6), Tick(4));
        assert!(p.trip().is_none());
        p.pickup = Some(Tick(7));
        assert!(p.trip().is_none());
        p.dropoff = Some(Tick(11));

        let trip = p.trip().unwrap();
        assert_eq!(trip.person, PersonId(3));
        assert_eq!(trip.waiting_for_elevator(), 3);
        assert_eq!(trip.waiting_on_elevator(), 4);
        assert_eq!(trip.total(), 7);
    }

    #[test]
    fn age_counts_from_arrival() {
        let p = Person::new(PersonId(0), Floor(1), Floor(2), Tick(5));
        assert_eq!(p.age(Tick(5)), 0);
        assert_eq!(p.age(Tick(9)), 4);
    }

    #[test]
    fn ids_are_sequential() {
        assert_eq!(PersonId(41).next(), PersonId(42));
        assert_eq!(PersonId(7).to_string(), "P7");
    }
}

#[cfg(test)]
mod config {
    use crate::{LiftError, SimConfig};

    fn valid() -> SimConfig {
        SimConfig {
            floors:                  10,
            iterations:              50,
            max_new_people_per_tick: 2,
            max_wait_threshold:      20,
            seed:                    Some(1),
        }
    }

    #[test]
    fn accepts_valid_config() {
        assert!(valid().validate().is_ok());
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_single_floor() {
        let cfg = SimConfig { floors: 1, ..valid() };
        assert!(matches!(cfg.validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn rejects_zero_iterations() {
        let cfg = SimConfig { iterations: 0, ..valid() };
        assert!(matches!(cfg.validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn rejects_zero_threshold() {
        let cfg = SimConfig { max_wait_threshold: 0, ..valid() };
        assert!(matches!(cfg.validate(), Err(LiftError::Config(_))));
    }

    #[test]
    fn zero_new_people_is_allowed() {
        let cfg = SimConfig { max_new_people_per_tick: 0, ..valid() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn fairness_bound_adds_one_full_sweep() {
        let cfg = valid();
        assert_eq!(cfg.fairness_bound(), 29);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        let xs: Vec<u64> = (0..16).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..16).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let xs: Vec<u64> = (0..4).map(|_| a.random()).collect();
        let ys: Vec<u64> = (0..4).map(|_| b.random()).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn gen_range_stays_in_bounds() {
        let mut rng = SimRng::new(7);
        for _ in 0..1_000 {
            let v: u32 = rng.gen_range(1..=6);
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn inner_draws_from_the_same_stream() {
        use rand::Rng;

        let mut a = SimRng::new(5);
        let mut b = SimRng::new(5);
        let x: u64 = a.inner().r#gen();
        assert_eq!(x, b.random::<u64>());
    }
}
