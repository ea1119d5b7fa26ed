use ms_activity::ActivityError;
use ms_behavior::BehaviorError;
use ms_core::{ActivityKind, CoreError, PersonId};
use ms_population::PopulationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("more than one activity location for {0}")]
    DuplicateKind(ActivityKind),

    /// Raised before a step touches any danger or risk value.
    #[error("{person} has {kind} duration {value} outside [0, 1]")]
    DurationOutOfRange {
        person: PersonId,
        kind:   ActivityKind,
        value:  f64,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Population(#[from] PopulationError),

    #[error(transparent)]
    Activity(#[from] ActivityError),

    #[error(transparent)]
    Behavior(#[from] BehaviorError),
}

impl SimError {
    /// Lift a population error, keeping duration violations as their own
    /// variant.
    pub(crate) fn from_population(err: PopulationError) -> Self {
        match err {
            PopulationError::DurationOutOfRange { person, kind, value } => {
                SimError::DurationOutOfRange { person, kind, value }
            }
            other => SimError::Population(other),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;
