use std::fmt;

/// Where a [`Microsim`](crate::Microsim) is within its daily step.
///
/// Always `Idle` between calls, including after a failed step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StepPhase {
    #[default]
    Idle,
    RiskReset,
    DangerUpdate,
    RiskAccumulate,
    BehaviorChange,
}

impl StepPhase {
    pub fn name(self) -> &'static str {
        match self {
            StepPhase::Idle           => "idle",
            StepPhase::RiskReset      => "risk_reset",
            StepPhase::DangerUpdate   => "danger_update",
            StepPhase::RiskAccumulate => "risk_accumulate",
            StepPhase::BehaviorChange => "behavior_change",
        }
    }
}

impl fmt::Display for StepPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
