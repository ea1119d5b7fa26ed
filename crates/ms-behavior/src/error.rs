use ms_core::ActivityKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("reduction fraction {0} is outside [0, 1]")]
    ReductionFraction(f64),

    #[error("{0} cannot be discretionary: it receives the freed time")]
    DiscretionaryHome(ActivityKind),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
