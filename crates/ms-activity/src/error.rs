use ms_core::{ActivityKind, PersonId, VenueId};
use ms_population::PopulationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("{what} length {got} does not match {expected}")]
    LengthMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{kind} flow matrix has {got} venue columns but the venue table has {expected} rows")]
    VenueCountMismatch {
        kind:     ActivityKind,
        expected: usize,
        got:      usize,
    },

    #[error("{kind} flow matrix covers {got} individuals, population has {expected}")]
    PopulationMismatch {
        kind:     ActivityKind,
        expected: usize,
        got:      usize,
    },

    #[error("{kind}: {person} refers to {venue}, which is not in the venue table")]
    UnknownVenue {
        kind:   ActivityKind,
        person: PersonId,
        venue:  VenueId,
    },

    #[error("{kind}: {person} has more than one flow to {venue}")]
    DuplicateFlow {
        kind:   ActivityKind,
        person: PersonId,
        venue:  VenueId,
    },

    #[error("{kind}: danger {value} for {venue} is negative or not finite")]
    InvalidDanger {
        kind:  ActivityKind,
        venue: VenueId,
        value: f64,
    },

    #[error("cannot normalise flows: {0}")]
    Normalise(String),

    #[error(transparent)]
    Population(#[from] PopulationError),
}

pub type ActivityResult<T> = Result<T, ActivityError>;
