//! A behaviour model that never changes anyone's day.

use ms_core::DiseaseStatus;
use ms_population::DurationsMut;

use crate::{BehaviorModel, BehaviorOutcome};

/// A [`BehaviorModel`] that leaves durations alone.
///
/// The engine still consumes `status_changed` flags, so this is the model
/// for runs where behaviour change is switched off.
pub struct NoBehaviorChange;

impl BehaviorModel for NoBehaviorChange {
    fn on_status_change(&self, _status: DiseaseStatus, _durations: &mut DurationsMut<'_>) -> BehaviorOutcome {
        BehaviorOutcome::Unchanged
    }
}
