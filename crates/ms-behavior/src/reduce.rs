//! `ReduceDiscretionary`: the policy-driven default behaviour model.

use ms_core::{ActivityKind, DiseaseStatus};
use ms_population::DurationsMut;

use crate::{BehaviorModel, BehaviorOutcome, BehaviorPolicy, BehaviorResult};

/// Moves a fixed share of discretionary time home while an individual is in
/// a triggering status, and restores their initial day otherwise.
///
/// Reduction, from initial values:
///
/// ```text
/// discretionary  = initial × (1 − fraction)
/// home           = initial_home + Σ initial_discretionary × fraction
/// everything else = initial
/// ```
///
/// Total duration is preserved, and a repeated trigger lands on the same
/// values.
#[derive(Clone, Debug)]
pub struct ReduceDiscretionary {
    policy:        BehaviorPolicy,
    triggers:      [bool; DiseaseStatus::COUNT],
    discretionary: [bool; ActivityKind::COUNT],
}

impl ReduceDiscretionary {
    pub fn new(policy: BehaviorPolicy) -> BehaviorResult<Self> {
        policy.validate()?;
        Ok(Self::from_valid(policy))
    }

    fn from_valid(policy: BehaviorPolicy) -> Self {
        let mut triggers = [false; DiseaseStatus::COUNT];
        for status in &policy.triggering_statuses {
            triggers[status.index()] = true;
        }
        let mut discretionary = [false; ActivityKind::COUNT];
        for kind in &policy.discretionary {
            discretionary[kind.index()] = true;
        }
        Self { policy, triggers, discretionary }
    }

    pub fn policy(&self) -> &BehaviorPolicy {
        &self.policy
    }

    #[inline]
    pub fn triggers(&self, status: DiseaseStatus) -> bool {
        self.triggers[status.index()]
    }

    fn reduce(&self, durations: &mut DurationsMut<'_>) {
        let keep = 1.0 - self.policy.reduction_fraction;
        let mut freed = 0.0;
        for kind in ActivityKind::ALL {
            if kind == ActivityKind::Home {
                continue;
            }
            let initial = durations.initial(kind);
            if self.discretionary[kind.index()] {
                let kept = initial * keep;
                freed += initial - kept;
                durations.set(kind, kept);
            } else {
                durations.set(kind, initial);
            }
        }
        // Rounding in `freed` can land a full day a few ulps past 1.0.
        let home = (durations.initial(ActivityKind::Home) + freed).min(1.0);
        durations.set(ActivityKind::Home, home);
    }
}

impl Default for ReduceDiscretionary {
    fn default() -> Self {
        Self::from_valid(BehaviorPolicy::default())
    }
}

impl BehaviorModel for ReduceDiscretionary {
    fn on_status_change(&self, status: DiseaseStatus, durations: &mut DurationsMut<'_>) -> BehaviorOutcome {
        if self.triggers(status) {
            self.reduce(durations);
            BehaviorOutcome::Reduced
        } else if durations.restore_initial() {
            BehaviorOutcome::Restored
        } else {
            BehaviorOutcome::Unchanged
        }
    }
}
