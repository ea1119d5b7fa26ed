//! Unit tests for ms-core primitives.

#[cfg(test)]
mod ids {
    use crate::{PersonId, VenueId};

    #[test]
    fn index_roundtrip() {
        let id = PersonId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PersonId::try_from(42usize).unwrap(), id);
        assert_eq!(PersonId::from_index(42), id);
        assert!(VenueId::try_from(usize::MAX).is_err());
    }

    #[test]
    fn all_is_ascending() {
        let ids: Vec<VenueId> = VenueId::all(3).collect();
        assert_eq!(ids, vec![VenueId(0), VenueId(1), VenueId(2)]);
        assert_eq!(PersonId::all(0).count(), 0);
    }

    #[test]
    fn display() {
        assert_eq!(PersonId(7).to_string(), "person 7");
        assert_eq!(VenueId(3).to_string(), "venue 3");
    }
}

#[cfg(test)]
mod activity {
    use crate::ActivityKind;

    #[test]
    fn all_is_in_index_order() {
        for (i, kind) in ActivityKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
        assert_eq!(ActivityKind::ALL.len(), ActivityKind::COUNT);
    }

    #[test]
    fn parses_table_names() {
        assert_eq!("PrimarySchool".parse::<ActivityKind>().unwrap(), ActivityKind::PrimarySchool);
        assert_eq!("secondary_school".parse::<ActivityKind>().unwrap(), ActivityKind::SecondarySchool);
        assert_eq!(" Home ".parse::<ActivityKind>().unwrap(), ActivityKind::Home);
        assert!("church".parse::<ActivityKind>().is_err());
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for kind in ActivityKind::ALL {
            assert_eq!(kind.to_string().parse::<ActivityKind>().unwrap(), kind);
        }
    }
}

#[cfg(test)]
mod status {
    use crate::DiseaseStatus;

    #[test]
    fn infectious_states() {
        let infectious: Vec<_> = DiseaseStatus::ALL.into_iter().filter(|s| s.is_infectious()).collect();
        assert_eq!(
            infectious,
            vec![DiseaseStatus::Presymptomatic, DiseaseStatus::Asymptomatic, DiseaseStatus::Symptomatic]
        );
    }

    #[test]
    fn default_is_susceptible() {
        assert_eq!(DiseaseStatus::default(), DiseaseStatus::Susceptible);
    }

    #[test]
    fn parse() {
        assert_eq!("Symptomatic".parse::<DiseaseStatus>().unwrap(), DiseaseStatus::Symptomatic);
        assert!("zombie".parse::<DiseaseStatus>().is_err());
    }
}

#[cfg(test)]
mod hazard {
    use crate::{ActivityKind, DiseaseStatus, HazardConfig};

    #[test]
    fn empty_config_defaults() {
        let cfg = HazardConfig::new();
        assert!(cfg.is_empty());
        for status in DiseaseStatus::ALL {
            assert_eq!(cfg.status_multiplier(status), 0.0);
        }
        for kind in ActivityKind::ALL {
            assert_eq!(cfg.location_multiplier(kind), 1.0);
        }
    }

    #[test]
    fn configured_values_win() {
        let cfg = HazardConfig::new()
            .with_status_multiplier(DiseaseStatus::Asymptomatic, 2.0)
            .unwrap()
            .with_location_multiplier(ActivityKind::Home, 5.0)
            .unwrap();
        assert_eq!(cfg.status_multiplier(DiseaseStatus::Asymptomatic), 2.0);
        assert_eq!(cfg.status_multiplier(DiseaseStatus::Symptomatic), 0.0);
        assert_eq!(cfg.location_multiplier(ActivityKind::Home), 5.0);
        assert_eq!(cfg.location_multiplier(ActivityKind::Retail), 1.0);
    }

    #[test]
    fn status_table_matches_lookups() {
        let cfg = HazardConfig::new()
            .with_status_multiplier(DiseaseStatus::Symptomatic, 3.0)
            .unwrap();
        let table = cfg.status_table();
        for status in DiseaseStatus::ALL {
            assert_eq!(table[status.index()], cfg.status_multiplier(status));
        }
    }

    #[test]
    fn rejects_negative_and_nan() {
        let mut cfg = HazardConfig::new();
        assert!(cfg.set_status_multiplier(DiseaseStatus::Symptomatic, -1.0).is_err());
        assert!(cfg.set_location_multiplier(ActivityKind::Work, f64::NAN).is_err());
        assert!(cfg.is_empty(), "rejected values must not be stored");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializes_partial_config() {
        let json = r#"{ "individual": { "symptomatic": 3.0 } }"#;
        let cfg: HazardConfig = serde_json::from_str(json).unwrap();
        cfg.validate().unwrap();
        assert_eq!(cfg.status_multiplier(DiseaseStatus::Symptomatic), 3.0);
        assert_eq!(cfg.location_multiplier(ActivityKind::Home), 1.0);
    }
}

#[cfg(test)]
mod time {
    use crate::{Day, SimConfig};

    #[test]
    fn day_arithmetic() {
        assert_eq!(Day(3).next(), Day(4));
        assert_eq!(Day(3) + 4, Day(7));
        assert_eq!(Day(9).since(Day(2)), 7);
        assert_eq!(Day(2).to_string(), "day 2");
    }

    #[test]
    fn end_day() {
        let cfg = SimConfig { total_days: 30, ..SimConfig::default() };
        assert_eq!(cfg.end_day(), Day(30));
        assert_eq!(cfg.seed, None);
    }
}

#[cfg(test)]
mod rng {
    use std::collections::HashSet;

    use crate::SimRng;

    /// Skip 100 draws, then return the next one.
    fn draw(rng: &mut SimRng) -> u64 {
        for _ in 0..100 {
            let _: u64 = rng.random();
        }
        rng.random()
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(2);
        let mut b = SimRng::new(2);
        for _ in 0..1000 {
            let x: u64 = a.random();
            let y: u64 = b.random();
            assert_eq!(x, y);
        }
    }

    #[test]
    fn explicit_and_unseeded_differ() {
        let mut seeded = SimRng::new(2);
        let mut unseeded = SimRng::from_instance_entropy();
        assert_ne!(draw(&mut seeded), draw(&mut unseeded));
    }

    #[test]
    fn derived_seed_replays() {
        let mut original = SimRng::from_instance_entropy();
        let mut replay = SimRng::new(original.seed());
        assert_eq!(draw(&mut original), draw(&mut replay));
    }

    #[test]
    fn optional_seed_dispatch() {
        assert_eq!(SimRng::from_optional_seed(Some(11)).seed(), 11);
        let a = SimRng::from_optional_seed(None);
        let b = SimRng::from_optional_seed(None);
        assert_ne!(a.seed(), b.seed());
    }

    #[test]
    fn concurrent_unseeded_instances_are_distinct() {
        let draws: Vec<u64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        (0..125)
                            .map(|_| draw(&mut SimRng::from_instance_entropy()))
                            .collect::<Vec<u64>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });
        assert_eq!(draws.len(), 1000);
        let unique: HashSet<u64> = draws.iter().copied().collect();
        assert_eq!(unique.len(), draws.len());
    }

    #[test]
    fn children_are_deterministic_and_distinct() {
        let mut root_a = SimRng::new(7);
        let mut root_b = SimRng::new(7);
        let mut c0 = root_a.child(0);
        let mut c0_again = root_b.child(0);
        assert_eq!(draw(&mut c0), draw(&mut c0_again));
        let mut c1 = root_a.child(1);
        assert_ne!(c1.seed(), c0.seed());
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0.0f64..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }
}
