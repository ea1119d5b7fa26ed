use ms_core::{ActivityKind, CoreError, PersonId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PopulationError {
    #[error("{what} length {got} does not match individual count {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{0} is out of range")]
    UnknownPerson(PersonId),

    #[error("{person} {kind} duration {value} is outside [0, 1]")]
    DurationOutOfRange {
        person: PersonId,
        kind:   ActivityKind,
        value:  f64,
    },

    #[error("{person} {kind}: {venues} venues but {flows} flow weights")]
    FlowLengthMismatch {
        person: PersonId,
        kind:   ActivityKind,
        venues: usize,
        flows:  usize,
    },

    #[error("{person} {kind}: flow weight {value} is negative or not finite")]
    InvalidFlow {
        person: PersonId,
        kind:   ActivityKind,
        value:  f64,
    },

    #[error("{person} {kind}: flow weights sum to {sum}, expected 1.0")]
    FlowSum {
        person: PersonId,
        kind:   ActivityKind,
        sum:    f64,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type PopulationResult<T> = Result<T, PopulationError>;
