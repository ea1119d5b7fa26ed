//! `ActivityLocation`: owns one kind's venues and flows and runs that
//! kind's half of each step.

use log::{debug, warn};
use ms_core::{ActivityKind, HazardConfig, PersonId, VenueId};
use ms_population::IndividualTable;

use crate::{ActivityError, ActivityResult, FlowMatrix, VenueTable};

/// The Activity Location Manager for one [`ActivityKind`].
///
/// # Step contract
///
/// 1. [`update_venue_danger`](Self::update_venue_danger) rebuilds this
///    kind's danger column from the Individual Table.
/// 2. Only after *every* kind has done step 1,
///    [`update_individual_risk`](Self::update_individual_risk) adds this
///    kind's contribution into a shared risk accumulator.
///
/// Both passes are pure functions of their inputs, so repeating them with
/// unchanged inputs reproduces identical values.
#[derive(Clone, Debug)]
pub struct ActivityLocation {
    kind:   ActivityKind,
    venues: VenueTable,
    flows:  FlowMatrix,
}

impl ActivityLocation {
    /// Pair a venue table with the flow matrix that targets it.
    pub fn new(kind: ActivityKind, venues: VenueTable, flows: FlowMatrix) -> ActivityResult<Self> {
        if flows.venue_count() != venues.len() {
            return Err(ActivityError::VenueCountMismatch {
                kind,
                expected: venues.len(),
                got:      flows.venue_count(),
            });
        }
        Ok(Self { kind, venues, flows })
    }

    #[inline]
    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    #[inline]
    pub fn venues(&self) -> &VenueTable {
        &self.venues
    }

    #[inline]
    pub fn flows(&self) -> &FlowMatrix {
        &self.flows
    }

    /// Copy each individual's nonzero venues and weights into the table.
    ///
    /// Called once while the simulation is assembled.  Individuals with time
    /// allotted to this kind but nowhere to spend it are counted and
    /// reported; their time is treated as idle.
    pub fn assign_flows(&self, table: &mut IndividualTable) -> ActivityResult<()> {
        if self.flows.population() != table.count {
            return Err(ActivityError::PopulationMismatch {
                kind:     self.kind,
                expected: table.count,
                got:      self.flows.population(),
            });
        }

        let mut idle = 0usize;
        for person in PersonId::all(table.count) {
            let (venues, weights) = self.flows.row(person);
            if venues.is_empty() && table.duration(person, self.kind) > 0.0 {
                idle += 1;
            }
            table.set_flows(person, self.kind, venues.to_vec(), weights.to_vec())?;
        }

        if idle > 0 {
            warn!("{}: {idle} individuals have time for this activity but no venue", self.kind);
        }
        debug!(
            "{}: assigned {} flows over {} venues",
            self.kind,
            self.flows.nnz(),
            self.venues.len()
        );
        Ok(())
    }

    /// Danger each venue would have given the current table, without
    /// touching the stored column.
    ///
    /// Individuals whose status multiplier is 0, or whose duration for this
    /// kind is 0, contribute nothing.  Fails if any contributing individual
    /// points at a venue outside the table.
    pub fn compute_venue_danger(&self, table: &IndividualTable, hazard: &HazardConfig) -> ActivityResult<Vec<f64>> {
        let status_table = hazard.status_table();
        let location = hazard.location_multiplier(self.kind);
        let columns = table.activity(self.kind);
        let mut danger = vec![0.0; self.venues.len()];

        for (i, status) in table.status.iter().enumerate() {
            let individual = status_table[status.index()];
            let duration = columns.duration[i];
            if individual == 0.0 || duration == 0.0 {
                continue;
            }
            let base = individual * duration;
            for (&venue, &weight) in columns.venues[i].iter().zip(&columns.flows[i]) {
                let slot = danger.get_mut(venue.index()).ok_or(ActivityError::UnknownVenue {
                    kind:   self.kind,
                    person: PersonId::from_index(i),
                    venue,
                })?;
                *slot += base * weight * location;
            }
        }

        Ok(danger)
    }

    /// Store a danger column produced by
    /// [`compute_venue_danger`](Self::compute_venue_danger).
    ///
    /// Every value must be finite and >= 0; nothing is stored otherwise.
    pub fn commit_venue_danger(&mut self, danger: Vec<f64>) -> ActivityResult<()> {
        if danger.len() != self.venues.len() {
            return Err(ActivityError::LengthMismatch {
                expected: self.venues.len(),
                got:      danger.len(),
                what:     "danger column",
            });
        }
        if let Some((i, &value)) = danger.iter().enumerate().find(|(_, d)| !d.is_finite() || **d < 0.0) {
            return Err(ActivityError::InvalidDanger {
                kind:  self.kind,
                venue: VenueId::from_index(i),
                value,
            });
        }
        self.venues.commit_danger(danger);
        Ok(())
    }

    /// Recompute and store this kind's danger in one call.
    ///
    /// Every venue not reached by a hazardous individual ends at exactly 0.
    pub fn update_venue_danger(&mut self, table: &IndividualTable, hazard: &HazardConfig) -> ActivityResult<()> {
        let danger = self.compute_venue_danger(table, hazard)?;
        self.venues.commit_danger(danger);
        Ok(())
    }

    /// Add this kind's risk contribution into `risk` (indexed by `PersonId`).
    ///
    /// `risk[i] += duration_i × Σ flow_i(v) × danger(v)`.  The accumulator is
    /// not cleared here because risk sums over every kind.
    pub fn update_individual_risk(&self, table: &IndividualTable, risk: &mut [f64]) -> ActivityResult<()> {
        if risk.len() != table.count {
            return Err(ActivityError::LengthMismatch {
                expected: table.count,
                got:      risk.len(),
                what:     "risk accumulator",
            });
        }
        let danger = self.venues.dangers();
        let columns = table.activity(self.kind);

        for (i, acc) in risk.iter_mut().enumerate() {
            let duration = columns.duration[i];
            if duration == 0.0 {
                continue;
            }
            let mut exposure = 0.0;
            for (&venue, &weight) in columns.venues[i].iter().zip(&columns.flows[i]) {
                let venue_danger = danger.get(venue.index()).ok_or(ActivityError::UnknownVenue {
                    kind:   self.kind,
                    person: PersonId::from_index(i),
                    venue,
                })?;
                exposure += weight * venue_danger;
            }
            *acc += duration * exposure;
        }

        Ok(())
    }
}
