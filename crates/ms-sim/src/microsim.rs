//! The `Microsim` struct and its daily step.

use log::{debug, info};
use ms_activity::ActivityLocation;
use ms_behavior::{change_behavior_with_disease, BehaviorModel, BehaviorReport};
use ms_core::{ActivityKind, Day, HazardConfig, SimConfig, SimRng};
use ms_population::IndividualTable;

use crate::{SimError, SimObserver, SimResult, StepPhase, StepSummary};

/// One simulation instance.
///
/// Owns its Individual Table, one [`ActivityLocation`] per configured kind,
/// the hazard multipliers, the behaviour model and a private [`SimRng`].
/// Nothing is shared between instances, so replicates can run on separate
/// threads without coordination.
///
/// The disease model sits outside: between steps it writes statuses through
/// [`IndividualTable::set_status`], which arms `status_changed` for the
/// behaviour-change phase.
///
/// Create via [`MicrosimBuilder`][crate::MicrosimBuilder].
pub struct Microsim<B: BehaviorModel> {
    /// Global configuration (total days, seed, output interval).
    pub config: SimConfig,

    /// The next day to be stepped.
    pub day: Day,

    /// Per-person state.  External writers (disease model, scenario code)
    /// update statuses and durations here between steps.
    pub individuals: IndividualTable,

    /// Status and location multipliers.  Fixed for the run.
    pub hazard: HazardConfig,

    /// Called for every individual with `status_changed` set.
    pub behavior: B,

    /// Sorted by `ActivityKind::index`, at most one per kind.
    pub(crate) locations: Vec<ActivityLocation>,

    pub(crate) rng:   SimRng,
    pub(crate) phase: StepPhase,
}

impl<B: BehaviorModel> Microsim<B> {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn phase(&self) -> StepPhase {
        self.phase
    }

    pub fn locations(&self) -> &[ActivityLocation] {
        &self.locations
    }

    pub fn location(&self, kind: ActivityKind) -> Option<&ActivityLocation> {
        self.locations.iter().find(|l| l.kind() == kind)
    }

    /// This instance's generator, for the disease model or scenario code
    /// that drives it.
    pub fn rng_mut(&mut self) -> &mut SimRng {
        &mut self.rng
    }

    /// Seed this instance's generator was built from.  Pass it back through
    /// `SimConfig::seed` to replay the run.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // ── Day loop ──────────────────────────────────────────────────────────

    /// Run from the current day to `config.end_day()`.
    ///
    /// Calls observer hooks at every day boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while self.day < self.config.end_day() {
            self.observed_step(observer)?;
        }
        observer.on_sim_end(self.day);
        Ok(())
    }

    /// Run exactly `n` days from the current position (ignores `end_day`).
    pub fn run_days<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.observed_step(observer)?;
        }
        Ok(())
    }

    fn observed_step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let day = self.day;
        observer.on_day_start(day);
        let summary = self.step()?;
        observer.on_day_end(day, &summary);
        if self.config.output_interval_days > 0
            && day.0.is_multiple_of(self.config.output_interval_days)
        {
            observer.on_snapshot(day, &self.individuals, &self.locations);
        }
        Ok(())
    }

    /// Advance one day: danger, risk, then behaviour change.
    ///
    /// On error the day counter does not move and the previous danger and
    /// risk values are still in place.
    pub fn step(&mut self) -> SimResult<StepSummary> {
        let day = self.day;
        self.update_venue_danger_and_risks()?;
        let behavior = self.change_behavior_with_disease();

        let summary = self.summarise(day, behavior);
        info!(
            "{day}: total danger {:.4}, {} at risk (max {:.4}), {} behaviour changes",
            summary.total_danger(),
            summary.at_risk,
            summary.max_risk,
            summary.behavior_changes()
        );
        self.day = day.next();
        Ok(summary)
    }

    /// Phases ①–③: reset risk, rebuild every kind's danger, then accumulate
    /// every kind's risk.
    ///
    /// Leaves behaviour and `status_changed` flags untouched, so calling it
    /// repeatedly with unchanged inputs reproduces identical values.
    pub fn update_venue_danger_and_risks(&mut self) -> SimResult<()> {
        let result = self.danger_and_risk();
        self.phase = StepPhase::Idle;
        result
    }

    fn danger_and_risk(&mut self) -> SimResult<()> {
        // ── ① RiskReset ───────────────────────────────────────────────────
        self.phase = StepPhase::RiskReset;
        self.individuals.check_durations().map_err(SimError::from_population)?;
        let mut risk = vec![0.0; self.individuals.count];

        // ── ② DangerUpdate ────────────────────────────────────────────────
        //
        // All kinds are computed before any is committed, so a failure in a
        // later kind cannot leave earlier kinds half-updated.
        self.phase = StepPhase::DangerUpdate;
        let dangers = self
            .locations
            .iter()
            .map(|l| l.compute_venue_danger(&self.individuals, &self.hazard))
            .collect::<Result<Vec<_>, _>>()?;
        let previous: Vec<Vec<f64>> = self
            .locations
            .iter()
            .map(|l| l.venues().dangers().to_vec())
            .collect();
        for (location, danger) in self.locations.iter_mut().zip(dangers) {
            location.commit_venue_danger(danger)?;
        }
        debug!("{}: danger rebuilt for {} kinds", self.day, self.locations.len());

        // ── ③ RiskAccumulate ──────────────────────────────────────────────
        self.phase = StepPhase::RiskAccumulate;
        let accumulated = self
            .locations
            .iter()
            .try_for_each(|l| l.update_individual_risk(&self.individuals, &mut risk));
        if let Err(e) = accumulated {
            for (location, danger) in self.locations.iter_mut().zip(previous) {
                location.commit_venue_danger(danger)?;
            }
            return Err(e.into());
        }
        self.individuals.current_risk = risk;
        debug!("{}: risk accumulated for {} individuals", self.day, self.individuals.count);
        Ok(())
    }

    /// Phase ④: let the behaviour model react to this day's status changes.
    pub fn change_behavior_with_disease(&mut self) -> BehaviorReport {
        self.phase = StepPhase::BehaviorChange;
        let report = change_behavior_with_disease(&mut self.individuals, &self.behavior);
        self.phase = StepPhase::Idle;
        report
    }

    fn summarise(&self, day: Day, behavior: BehaviorReport) -> StepSummary {
        let mut danger_by_kind = [0.0; ActivityKind::COUNT];
        for location in &self.locations {
            danger_by_kind[location.kind().index()] = location.venues().total_danger();
        }
        let risk = &self.individuals.current_risk;
        StepSummary {
            day,
            danger_by_kind,
            at_risk:  risk.iter().filter(|r| **r > 0.0).count(),
            max_risk: risk.iter().copied().fold(0.0, f64::max),
            behavior,
        }
    }
}
