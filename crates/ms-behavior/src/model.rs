//! The `BehaviorModel` trait: the extension point for behaviour change.

use ms_core::DiseaseStatus;
use ms_population::DurationsMut;

/// What a model did to one individual.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BehaviorOutcome {
    /// Time moved away from discretionary activities.
    Reduced,
    /// Durations put back to their initial values.
    Restored,
    /// Nothing needed changing.
    Unchanged,
}

/// Pluggable behaviour change.
///
/// Called once for each individual whose `status_changed` flag is set, with
/// their new status and a view of their durations across every kind.
/// Implementations must keep the individual's total duration unchanged and
/// should derive new values from `durations.initial(..)` rather than the
/// current values, so repeated calls do not compound.
///
/// # Example
///
/// ```rust,ignore
/// struct StayHomeWhenDead;
///
/// impl BehaviorModel for StayHomeWhenDead {
///     fn on_status_change(&self, status: DiseaseStatus, d: &mut DurationsMut<'_>) -> BehaviorOutcome {
///         if status == DiseaseStatus::Dead {
///             for kind in ActivityKind::ALL { d.set(kind, 0.0); }
///             d.set(ActivityKind::Home, 1.0);
///             BehaviorOutcome::Reduced
///         } else if d.restore_initial() {
///             BehaviorOutcome::Restored
///         } else {
///             BehaviorOutcome::Unchanged
///         }
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    fn on_status_change(&self, status: DiseaseStatus, durations: &mut DurationsMut<'_>) -> BehaviorOutcome;
}
