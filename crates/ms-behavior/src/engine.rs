//! The behaviour-change pass over the population.

use log::debug;
use ms_core::PersonId;
use ms_population::IndividualTable;

use crate::{BehaviorModel, BehaviorOutcome};

/// Counts from one behaviour-change pass.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BehaviorReport {
    /// Individuals whose `status_changed` flag was set.
    pub examined: usize,
    pub reduced:  usize,
    pub restored: usize,
}

impl BehaviorReport {
    /// Individuals whose durations were actually rewritten.
    pub fn applied(&self) -> usize {
        self.reduced + self.restored
    }
}

/// Let `model` react to every status change since the last pass.
///
/// Only individuals with `status_changed` set are visited; the flag is
/// cleared for each of them whatever the model decides.
pub fn change_behavior_with_disease<B>(table: &mut IndividualTable, model: &B) -> BehaviorReport
where
    B: BehaviorModel + ?Sized,
{
    let mut report = BehaviorReport::default();
    for i in 0..table.count {
        if !table.status_changed[i] {
            continue;
        }
        table.status_changed[i] = false;
        report.examined += 1;

        let status = table.status[i];
        let person = PersonId::from_index(i);
        match model.on_status_change(status, &mut table.durations_mut(person)) {
            BehaviorOutcome::Reduced   => report.reduced += 1,
            BehaviorOutcome::Restored  => report.restored += 1,
            BehaviorOutcome::Unchanged => {}
        }
    }
    if report.examined > 0 {
        debug!(
            "behavior change: {} flagged, {} reduced, {} restored",
            report.examined, report.reduced, report.restored
        );
    }
    report
}
