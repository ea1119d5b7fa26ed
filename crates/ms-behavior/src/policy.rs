//! Behaviour-change policy configuration.

use ms_core::{ActivityKind, DiseaseStatus};

use crate::{BehaviorError, BehaviorResult};

/// Share of discretionary time moved home when behaviour change triggers.
pub const DEFAULT_REDUCTION_FRACTION: f64 = 0.5;

/// What changes, for whom, and by how much.
///
/// Which statuses trigger the change is configuration rather than code:
/// the default reacts to `Symptomatic` only, but a scenario can add
/// `Presymptomatic` and `Asymptomatic` (e.g. to model testing and
/// isolation).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BehaviorPolicy {
    /// Fraction of each discretionary activity's initial duration moved to
    /// home.  Must be in [0, 1].
    pub reduction_fraction: f64,

    /// Statuses that put an individual into reduced behaviour.  Any other
    /// status restores their initial durations.
    pub triggering_statuses: Vec<DiseaseStatus>,

    /// Kinds whose time is cut.  Must not include `Home`, which receives the
    /// freed time.
    pub discretionary: Vec<ActivityKind>,
}

impl BehaviorPolicy {
    pub fn validate(&self) -> BehaviorResult<()> {
        if !(0.0..=1.0).contains(&self.reduction_fraction) {
            return Err(BehaviorError::ReductionFraction(self.reduction_fraction));
        }
        if self.discretionary.contains(&ActivityKind::Home) {
            return Err(BehaviorError::DiscretionaryHome(ActivityKind::Home));
        }
        Ok(())
    }

    pub fn with_reduction_fraction(mut self, fraction: f64) -> Self {
        self.reduction_fraction = fraction;
        self
    }

    pub fn with_triggering_statuses(mut self, statuses: Vec<DiseaseStatus>) -> Self {
        self.triggering_statuses = statuses;
        self
    }
}

impl Default for BehaviorPolicy {
    fn default() -> Self {
        Self {
            reduction_fraction:  DEFAULT_REDUCTION_FRACTION,
            triggering_statuses: vec![DiseaseStatus::Symptomatic],
            discretionary:       vec![
                ActivityKind::Work,
                ActivityKind::PrimarySchool,
                ActivityKind::SecondarySchool,
                ActivityKind::Retail,
            ],
        }
    }
}
