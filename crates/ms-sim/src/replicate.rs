//! Independent replicate runs.
//!
//! Each replicate is a whole `Microsim` with its own tables and generator.
//! With the `parallel` feature they run on Rayon's thread pool; a single
//! instance's step always stays on one thread.

use log::debug;
use ms_behavior::BehaviorModel;

use crate::{Microsim, SimResult, StepSummary, SummaryLog};

/// What one replicate produced.
#[derive(Clone, Debug)]
pub struct ReplicateOutcome {
    /// Position in `0..count`.
    pub index: usize,

    /// Seed of the replicate's generator, for replaying it alone.
    pub seed: u64,

    /// One entry per simulated day.
    pub days: Vec<StepSummary>,
}

/// Build `count` simulations with `make(index)` and run each to its
/// `config.end_day()`.
///
/// Outcomes are returned in index order whichever thread ran them.  The
/// first error from any replicate is returned.
pub fn run_replicates<B, F>(count: usize, make: F) -> SimResult<Vec<ReplicateOutcome>>
where
    B: BehaviorModel,
    F: Fn(usize) -> SimResult<Microsim<B>> + Sync,
{
    let run_one = |index: usize| -> SimResult<ReplicateOutcome> {
        let mut sim = make(index)?;
        let mut log = SummaryLog::default();
        sim.run(&mut log)?;
        debug!("replicate {index} finished after {} days (seed {})", log.days.len(), sim.seed());
        Ok(ReplicateOutcome { index, seed: sim.seed(), days: log.days })
    };

    #[cfg(not(feature = "parallel"))]
    {
        (0..count).map(run_one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        (0..count).into_par_iter().map(run_one).collect()
    }
}
