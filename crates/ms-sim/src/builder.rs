//! Fluent builder for constructing a [`Microsim`].

use log::{info, warn};
use ms_activity::ActivityLocation;
use ms_behavior::BehaviorModel;
use ms_core::{ActivityKind, Day, HazardConfig, SimConfig, SimRng};
use ms_population::IndividualTable;

use crate::{Microsim, SimError, SimResult, StepPhase};

/// Fluent builder for [`Microsim<B>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: total days, optional seed, output interval
/// - [`IndividualTable`]: from [`ms_population::IndividualTableBuilder`]
/// - `B: BehaviorModel`: e.g. [`ms_behavior::ReduceDiscretionary`]
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                         |
/// |-------------------|-------------------------------------------------|
/// | `.hazard(h)`      | Empty `HazardConfig` (no status is hazardous)   |
/// | `.location(l)`    | No activity locations                           |
/// | `.rng(r)`         | `SimRng::from_optional_seed(config.seed)`       |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = MicrosimBuilder::new(config, individuals, NoBehaviorChange)
///     .hazard(hazard)
///     .location(homes)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct MicrosimBuilder<B: BehaviorModel> {
    config:      SimConfig,
    individuals: IndividualTable,
    behavior:    B,
    hazard:      HazardConfig,
    locations:   Vec<ActivityLocation>,
    rng:         Option<SimRng>,
}

impl<B: BehaviorModel> MicrosimBuilder<B> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, individuals: IndividualTable, behavior: B) -> Self {
        Self {
            config,
            individuals,
            behavior,
            hazard:    HazardConfig::default(),
            locations: Vec::new(),
            rng:       None,
        }
    }

    pub fn hazard(mut self, hazard: HazardConfig) -> Self {
        self.hazard = hazard;
        self
    }

    /// Add the activity location for one kind.  At most one per kind.
    pub fn location(mut self, location: ActivityLocation) -> Self {
        self.locations.push(location);
        self
    }

    pub fn locations<I: IntoIterator<Item = ActivityLocation>>(mut self, locations: I) -> Self {
        self.locations.extend(locations);
        self
    }

    /// Use a specific generator instead of one derived from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate inputs, write each location's flows into the Individual
    /// Table, and return a ready-to-step [`Microsim`].
    pub fn build(self) -> SimResult<Microsim<B>> {
        self.hazard.validate()?;

        // ── One location per kind, in canonical kind order ────────────────
        //
        // A fixed order makes the risk sum independent of the order
        // locations were supplied in.
        let mut locations = self.locations;
        locations.sort_by_key(|l| l.kind().index());
        if let Some(pair) = locations.windows(2).find(|w| w[0].kind() == w[1].kind()) {
            return Err(SimError::DuplicateKind(pair[0].kind()));
        }

        let mut individuals = self.individuals;
        individuals.check_durations().map_err(SimError::from_population)?;
        for location in &locations {
            location.assign_flows(&mut individuals)?;
        }

        for kind in ActivityKind::ALL {
            if locations.iter().any(|l| l.kind() == kind) {
                continue;
            }
            let idle = individuals.activity(kind).duration.iter().filter(|d| **d > 0.0).count();
            if idle > 0 {
                warn!("{kind}: {idle} individuals have time for this activity but it has no location");
            }
        }

        let rng = self.rng.unwrap_or_else(|| SimRng::from_optional_seed(self.config.seed));
        info!(
            "microsim ready: {} individuals, {} activity kinds, seed {}",
            individuals.count,
            locations.len(),
            rng.seed()
        );

        Ok(Microsim {
            config:   self.config,
            day:      Day::ZERO,
            individuals,
            hazard:   self.hazard,
            behavior: self.behavior,
            locations,
            rng,
            phase:    StepPhase::Idle,
        })
    }
}
