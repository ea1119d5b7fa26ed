//! Unit tests for ms-behavior.

use approx::assert_relative_eq;
use ms_core::{ActivityKind, DiseaseStatus, PersonId};
use ms_population::{IndividualTable, IndividualTableBuilder};

use crate::*;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// `n` people: 0.5 home, 0.3 work, 0.1 primary school, 0.1 retail.
fn workers(n: usize) -> IndividualTable {
    IndividualTableBuilder::new(n)
        .durations(ActivityKind::Home, vec![0.5; n])
        .durations(ActivityKind::Work, vec![0.3; n])
        .durations(ActivityKind::PrimarySchool, vec![0.1; n])
        .durations(ActivityKind::Retail, vec![0.1; n])
        .build()
        .unwrap()
}

fn durations_of(table: &IndividualTable, person: PersonId) -> Vec<f64> {
    ActivityKind::ALL.iter().map(|k| table.duration(person, *k)).collect()
}

fn initials_of(table: &IndividualTable, person: PersonId) -> Vec<f64> {
    ActivityKind::ALL.iter().map(|k| table.duration_initial(person, *k)).collect()
}

#[cfg(test)]
mod policy_tests {
    use super::*;

    #[test]
    fn default_policy() {
        let policy = BehaviorPolicy::default();
        assert_eq!(policy.reduction_fraction, 0.5);
        assert_eq!(policy.triggering_statuses, vec![DiseaseStatus::Symptomatic]);
        assert!(!policy.discretionary.contains(&ActivityKind::Home));
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn fraction_out_of_range_rejected() {
        for bad in [-0.1, 1.5, f64::NAN] {
            let policy = BehaviorPolicy::default().with_reduction_fraction(bad);
            assert!(matches!(ReduceDiscretionary::new(policy), Err(BehaviorError::ReductionFraction(_))));
        }
    }

    #[test]
    fn home_cannot_be_discretionary() {
        let mut policy = BehaviorPolicy::default();
        policy.discretionary.push(ActivityKind::Home);
        assert!(matches!(policy.validate(), Err(BehaviorError::DiscretionaryHome(ActivityKind::Home))));
    }
}

#[cfg(test)]
mod reduce_tests {
    use super::*;

    #[test]
    fn symptomatic_moves_time_home() {
        let mut table = workers(1);
        let p = PersonId(0);
        table.set_status(p, DiseaseStatus::Symptomatic).unwrap();
        let report = change_behavior_with_disease(&mut table, &ReduceDiscretionary::default());

        assert_eq!(report, BehaviorReport { examined: 1, reduced: 1, restored: 0 });
        assert!(!table.status_changed[0]);
        for kind in [ActivityKind::Work, ActivityKind::PrimarySchool, ActivityKind::Retail] {
            assert!(table.duration(p, kind) < table.duration_initial(p, kind));
        }
        assert!(table.duration(p, ActivityKind::Home) > table.duration_initial(p, ActivityKind::Home));
        assert_relative_eq!(table.duration(p, ActivityKind::Work), 0.15, epsilon = 1e-12);
        assert_relative_eq!(table.duration(p, ActivityKind::Home), 0.75, epsilon = 1e-12);
        assert_relative_eq!(table.duration_total(p), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn recovery_restores_exactly() {
        let mut table = workers(1);
        let p = PersonId(0);
        let model = ReduceDiscretionary::default();

        table.set_status(p, DiseaseStatus::Symptomatic).unwrap();
        change_behavior_with_disease(&mut table, &model);
        table.set_status(p, DiseaseStatus::Recovered).unwrap();
        let report = change_behavior_with_disease(&mut table, &model);

        assert_eq!(report.restored, 1);
        assert_eq!(durations_of(&table, p), initials_of(&table, p));
    }

    #[test]
    fn repeated_trigger_does_not_compound() {
        let mut table = workers(1);
        let p = PersonId(0);
        let model = ReduceDiscretionary::default();

        table.set_status(p, DiseaseStatus::Symptomatic).unwrap();
        change_behavior_with_disease(&mut table, &model);
        let first = durations_of(&table, p);

        // Re-arm the flag without a status change in between.
        table.status_changed[0] = true;
        change_behavior_with_disease(&mut table, &model);
        assert_eq!(durations_of(&table, p), first);
    }

    #[test]
    fn presymptomatic_does_not_trigger_by_default() {
        let mut table = workers(1);
        let p = PersonId(0);
        table.set_status(p, DiseaseStatus::Presymptomatic).unwrap();
        let report = change_behavior_with_disease(&mut table, &ReduceDiscretionary::default());

        assert_eq!(report, BehaviorReport { examined: 1, reduced: 0, restored: 0 });
        assert_eq!(durations_of(&table, p), initials_of(&table, p));
    }

    #[test]
    fn triggering_statuses_are_configurable() {
        let policy = BehaviorPolicy::default().with_triggering_statuses(vec![
            DiseaseStatus::Presymptomatic,
            DiseaseStatus::Asymptomatic,
            DiseaseStatus::Symptomatic,
        ]);
        let model = ReduceDiscretionary::new(policy).unwrap();
        assert!(model.triggers(DiseaseStatus::Asymptomatic));
        assert!(!model.triggers(DiseaseStatus::Recovered));

        let mut table = workers(2);
        table.set_status(PersonId(0), DiseaseStatus::Presymptomatic).unwrap();
        table.set_status(PersonId(1), DiseaseStatus::Asymptomatic).unwrap();
        let report = change_behavior_with_disease(&mut table, &model);
        assert_eq!(report.reduced, 2);
    }

    #[test]
    fn full_reduction_sends_everyone_home() {
        let policy = BehaviorPolicy::default().with_reduction_fraction(1.0);
        let model = ReduceDiscretionary::new(policy).unwrap();
        let mut table = workers(1);
        let p = PersonId(0);
        table.set_status(p, DiseaseStatus::Symptomatic).unwrap();
        change_behavior_with_disease(&mut table, &model);

        assert_eq!(table.duration(p, ActivityKind::Work), 0.0);
        assert_eq!(table.duration(p, ActivityKind::Retail), 0.0);
        assert_relative_eq!(table.duration(p, ActivityKind::Home), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn full_reduction_never_exceeds_whole_day() {
        let policy = BehaviorPolicy::default().with_reduction_fraction(1.0);
        let model = ReduceDiscretionary::new(policy).unwrap();
        let mut table = IndividualTableBuilder::new(1)
            .durations(ActivityKind::Home, vec![0.08])
            .durations(ActivityKind::Work, vec![0.06])
            .durations(ActivityKind::Retail, vec![0.8600000000000001])
            .build()
            .unwrap();
        table.set_status(PersonId(0), DiseaseStatus::Symptomatic).unwrap();
        change_behavior_with_disease(&mut table, &model);

        assert_eq!(table.duration(PersonId(0), ActivityKind::Home), 1.0);
        assert!(table.check_durations().is_ok());
    }

    #[test]
    fn non_discretionary_kinds_keep_initial() {
        let mut policy = BehaviorPolicy::default();
        policy.discretionary = vec![ActivityKind::Retail];
        let model = ReduceDiscretionary::new(policy).unwrap();
        let mut table = workers(1);
        let p = PersonId(0);
        table.set_status(p, DiseaseStatus::Symptomatic).unwrap();
        change_behavior_with_disease(&mut table, &model);

        assert_eq!(table.duration(p, ActivityKind::Work), 0.3);
        assert_relative_eq!(table.duration(p, ActivityKind::Retail), 0.05, epsilon = 1e-12);
        assert_relative_eq!(table.duration(p, ActivityKind::Home), 0.55, epsilon = 1e-12);
    }
}

#[cfg(test)]
mod engine_tests {
    use super::*;

    #[test]
    fn unflagged_rows_untouched() {
        let mut table = workers(3);
        // Rewrite person 2's durations by hand; without a flag the pass must
        // not restore them.
        table.set_duration(PersonId(2), ActivityKind::Work, 0.0).unwrap();
        table.set_status(PersonId(0), DiseaseStatus::Symptomatic).unwrap();

        let report = change_behavior_with_disease(&mut table, &ReduceDiscretionary::default());
        assert_eq!(report.examined, 1);
        assert_eq!(table.duration(PersonId(1), ActivityKind::Work), 0.3);
        assert_eq!(table.duration(PersonId(2), ActivityKind::Work), 0.0);
    }

    #[test]
    fn restore_when_already_initial_is_unchanged() {
        let mut table = workers(1);
        table.set_status(PersonId(0), DiseaseStatus::Recovered).unwrap();
        let report = change_behavior_with_disease(&mut table, &ReduceDiscretionary::default());
        assert_eq!(report, BehaviorReport { examined: 1, reduced: 0, restored: 0 });
        assert_eq!(report.applied(), 0);
    }

    #[test]
    fn noop_model_consumes_flags() {
        let mut table = workers(2);
        table.set_status(PersonId(0), DiseaseStatus::Symptomatic).unwrap();
        table.set_status(PersonId(1), DiseaseStatus::Dead).unwrap();
        let report = change_behavior_with_disease(&mut table, &NoBehaviorChange);

        assert_eq!(report.examined, 2);
        assert_eq!(report.applied(), 0);
        assert!(table.status_changed.iter().all(|c| !c));
        assert_eq!(durations_of(&table, PersonId(0)), initials_of(&table, PersonId(0)));
    }

    #[test]
    fn second_pass_without_changes_is_empty() {
        let mut table = workers(2);
        let model = ReduceDiscretionary::default();
        table.set_status(PersonId(1), DiseaseStatus::Symptomatic).unwrap();
        change_behavior_with_disease(&mut table, &model);
        let report = change_behavior_with_disease(&mut table, &model);
        assert_eq!(report, BehaviorReport::default());
    }

    #[test]
    fn works_through_trait_object() {
        let model: Box<dyn BehaviorModel> = Box::new(ReduceDiscretionary::default());
        let mut table = workers(1);
        table.set_status(PersonId(0), DiseaseStatus::Symptomatic).unwrap();
        let report = change_behavior_with_disease(&mut table, model.as_ref());
        assert_eq!(report.reduced, 1);
    }
}
