//! The Individual Table: one row per person, stored column-wise.

use ms_core::{ActivityKind, DiseaseStatus, PersonId, VenueId};

use crate::check::{check_duration, check_flow_row};
use crate::{DurationsMut, PopulationError, PopulationResult};

// ── ActivityColumns ───────────────────────────────────────────────────────────

/// Per-person columns for one activity kind.
///
/// Every `Vec` has exactly `IndividualTable::count` elements.  `venues[i]`
/// and `flows[i]` are parallel: `flows[i][j]` is the fraction of person
/// `i`'s time at this activity spent at venue `venues[i][j]`.
#[derive(Clone, Debug, Default)]
pub struct ActivityColumns {
    /// Nonzero-flow venues, in flow-matrix order.
    pub venues: Vec<Vec<VenueId>>,

    /// Flow weights parallel to `venues`; each non-empty row sums to 1.0.
    pub flows: Vec<Vec<f64>>,

    /// Current fraction of the day spent at this activity.
    pub duration: Vec<f64>,

    /// Fraction of the day before any disease-driven behaviour change.
    pub duration_initial: Vec<f64>,
}

impl ActivityColumns {
    pub(crate) fn with_durations(count: usize, durations: Vec<f64>) -> Self {
        Self {
            venues:           vec![Vec::new(); count],
            flows:            vec![Vec::new(); count],
            duration_initial: durations.clone(),
            duration:         durations,
        }
    }
}

// ── IndividualTable ───────────────────────────────────────────────────────────

/// Structure-of-Arrays storage for every individual.
///
/// The `PersonId` value is the row index into every column:
///
/// ```ignore
/// let risk = table.current_risk[person.index()];
/// ```
///
/// `status` and `status_changed` are written by the external disease model
/// (prefer [`set_status`](Self::set_status), which keeps the flag honest).
/// `current_risk` is written only by the step orchestrator.
#[derive(Clone, Debug)]
pub struct IndividualTable {
    /// Number of individuals.  Equals the length of every column.
    pub count: usize,

    pub status: Vec<DiseaseStatus>,

    /// One-shot signal: status differs from the previous step's value.
    /// Consumed and cleared by the behaviour-change pass.
    pub status_changed: Vec<bool>,

    /// Risk absorbed this step, summed over all activity kinds.
    pub current_risk: Vec<f64>,

    activities: [ActivityColumns; ActivityKind::COUNT],
}

impl IndividualTable {
    pub(crate) fn new(
        status: Vec<DiseaseStatus>,
        activities: [ActivityColumns; ActivityKind::COUNT],
    ) -> Self {
        let count = status.len();
        Self {
            count,
            status,
            status_changed: vec![false; count],
            current_risk:   vec![0.0; count],
            activities,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `PersonId`s in ascending row order.
    pub fn person_ids(&self) -> impl Iterator<Item = PersonId> + '_ {
        PersonId::all(self.count)
    }

    // ── Activity columns ──────────────────────────────────────────────────

    #[inline]
    pub fn activity(&self, kind: ActivityKind) -> &ActivityColumns {
        &self.activities[kind.index()]
    }

    /// Mutable columns for one kind.  Writers are responsible for keeping
    /// durations in [0, 1]; the orchestrator re-checks before every step.
    #[inline]
    pub fn activity_mut(&mut self, kind: ActivityKind) -> &mut ActivityColumns {
        &mut self.activities[kind.index()]
    }

    #[inline]
    pub fn duration(&self, person: PersonId, kind: ActivityKind) -> f64 {
        self.activities[kind.index()].duration[person.index()]
    }

    #[inline]
    pub fn duration_initial(&self, person: PersonId, kind: ActivityKind) -> f64 {
        self.activities[kind.index()].duration_initial[person.index()]
    }

    /// Sum of current durations across every kind.
    pub fn duration_total(&self, person: PersonId) -> f64 {
        self.activities.iter().map(|c| c.duration[person.index()]).sum()
    }

    /// Overwrite one current duration.  `duration_initial` is untouched.
    pub fn set_duration(&mut self, person: PersonId, kind: ActivityKind, value: f64) -> PopulationResult<()> {
        self.check_person(person)?;
        check_duration(person, kind, value)?;
        self.activities[kind.index()].duration[person.index()] = value;
        Ok(())
    }

    /// Overwrite both the current and the initial duration, as a loader or
    /// scenario script does when it redefines someone's normal day.
    pub fn set_baseline_duration(&mut self, person: PersonId, kind: ActivityKind, value: f64) -> PopulationResult<()> {
        self.set_duration(person, kind, value)?;
        self.activities[kind.index()].duration_initial[person.index()] = value;
        Ok(())
    }

    /// One person's durations across every kind, for behaviour change.
    pub fn durations_mut(&mut self, person: PersonId) -> DurationsMut<'_> {
        DurationsMut::new(person, &mut self.activities)
    }

    /// Replace one person's venue list and parallel flow weights for `kind`.
    pub fn set_flows(
        &mut self,
        person: PersonId,
        kind:   ActivityKind,
        venues: Vec<VenueId>,
        flows:  Vec<f64>,
    ) -> PopulationResult<()> {
        self.check_person(person)?;
        if venues.len() != flows.len() {
            return Err(PopulationError::FlowLengthMismatch {
                person,
                kind,
                venues: venues.len(),
                flows:  flows.len(),
            });
        }
        check_flow_row(person, kind, &flows)?;
        let columns = &mut self.activities[kind.index()];
        columns.venues[person.index()] = venues;
        columns.flows[person.index()] = flows;
        Ok(())
    }

    // ── Disease status ────────────────────────────────────────────────────

    /// Record an externally decided status.
    ///
    /// Arms `status_changed` only if the value actually differs.  Returns
    /// whether it did.
    pub fn set_status(&mut self, person: PersonId, status: DiseaseStatus) -> PopulationResult<bool> {
        self.check_person(person)?;
        let i = person.index();
        if self.status[i] == status {
            return Ok(false);
        }
        self.status[i] = status;
        self.status_changed[i] = true;
        Ok(true)
    }

    /// Number of individuals in each status, indexed by `DiseaseStatus::index`.
    pub fn status_counts(&self) -> [usize; DiseaseStatus::COUNT] {
        let mut counts = [0; DiseaseStatus::COUNT];
        for status in &self.status {
            counts[status.index()] += 1;
        }
        counts
    }

    // ── Invariant checks ──────────────────────────────────────────────────

    /// First duration outside [0, 1], scanning kinds then rows.
    pub fn check_durations(&self) -> PopulationResult<()> {
        for kind in ActivityKind::ALL {
            for (i, &value) in self.activities[kind.index()].duration.iter().enumerate() {
                check_duration(PersonId::from_index(i), kind, value)?;
            }
        }
        Ok(())
    }

    fn check_person(&self, person: PersonId) -> PopulationResult<()> {
        if person.index() < self.count {
            Ok(())
        } else {
            Err(PopulationError::UnknownPerson(person))
        }
    }
}
