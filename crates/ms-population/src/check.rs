//! Validation shared by the table, its builder, and the flow matrix.

use ms_core::{ActivityKind, PersonId};

use crate::{PopulationError, PopulationResult};

/// How far a non-empty flow row (or a person's duration total) may drift
/// from 1.0 before it counts as malformed.
pub const FLOW_SUM_TOLERANCE: f64 = 1e-6;

/// A duration must be a finite fraction of the day.
#[inline]
pub fn check_duration(person: PersonId, kind: ActivityKind, value: f64) -> PopulationResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(PopulationError::DurationOutOfRange { person, kind, value })
    }
}

/// One individual's flow weights for one activity kind.
///
/// Weights must be finite and non-negative.  An empty row is accepted (the
/// individual has no venue for this kind); a non-empty row must sum to 1.0
/// within [`FLOW_SUM_TOLERANCE`].  Nothing is normalised here.
pub fn check_flow_row(person: PersonId, kind: ActivityKind, flows: &[f64]) -> PopulationResult<()> {
    if flows.is_empty() {
        return Ok(());
    }
    if let Some(&value) = flows.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(PopulationError::InvalidFlow { person, kind, value });
    }
    let sum: f64 = flows.iter().sum();
    if (sum - 1.0).abs() > FLOW_SUM_TOLERANCE {
        return Err(PopulationError::FlowSum { person, kind, sum });
    }
    Ok(())
}
