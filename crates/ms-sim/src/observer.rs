//! Simulation observer trait for progress reporting and data collection.

use ms_activity::ActivityLocation;
use ms_behavior::BehaviorReport;
use ms_core::{ActivityKind, Day};
use ms_population::IndividualTable;

/// Headline numbers for one completed day.
#[derive(Clone, Debug, PartialEq)]
pub struct StepSummary {
    pub day: Day,

    /// Sum of venue danger per kind, indexed by `ActivityKind::index`.
    /// Kinds with no activity location stay at 0.
    pub danger_by_kind: [f64; ActivityKind::COUNT],

    /// Individuals whose `current_risk` is above zero.
    pub at_risk: usize,

    pub max_risk: f64,

    pub behavior: BehaviorReport,
}

impl StepSummary {
    pub fn total_danger(&self) -> f64 {
        self.danger_by_kind.iter().sum()
    }

    #[inline]
    pub fn danger(&self, kind: ActivityKind) -> f64 {
        self.danger_by_kind[kind.index()]
    }

    /// Individuals whose durations were rewritten by behaviour change.
    #[inline]
    pub fn behavior_changes(&self) -> usize {
        self.behavior.applied()
    }
}

/// Callbacks invoked by [`Microsim::run`][crate::Microsim::run] at key points
/// in the day loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  This is where persistence and
/// dashboard writers attach.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_day_end(&mut self, day: Day, summary: &StepSummary) {
///         println!("{day}: {} at risk", summary.at_risk);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each day, before any processing.
    fn on_day_start(&mut self, _day: Day) {}

    /// Called once the day's step has completed.
    fn on_day_end(&mut self, _day: Day, _summary: &StepSummary) {}

    /// Called every `config.output_interval_days` days, after `on_day_end`,
    /// with read-only access to the full post-step state.
    fn on_snapshot(
        &mut self,
        _day:         Day,
        _individuals: &IndividualTable,
        _locations:   &[ActivityLocation],
    ) {}

    /// Called once after the final day of [`Microsim::run`][crate::Microsim::run].
    fn on_sim_end(&mut self, _final_day: Day) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// A [`SimObserver`] that keeps every day's [`StepSummary`].
#[derive(Clone, Debug, Default)]
pub struct SummaryLog {
    pub days: Vec<StepSummary>,
}

impl SimObserver for SummaryLog {
    fn on_day_end(&mut self, _day: Day, summary: &StepSummary) {
        self.days.push(summary.clone());
    }
}
