//! Flow Matrix: the fixed share of each individual's activity time spent at
//! each candidate venue.
//!
//! # Storage
//!
//! Conceptually a `population × venues` matrix, but almost every entry is
//! zero (a household has one home; a child has a handful of schools), so
//! rows are stored compressed:
//!
//! ```text
//! offsets: [0, 1, 3, 3, ...]          row i = offsets[i]..offsets[i + 1]
//! venues:  [V4, V0, V7, ...]          nonzero columns, ascending per row
//! weights: [1.0, 0.25, 0.75, ...]     parallel to venues
//! ```
//!
//! Zero weights are dropped on construction.  A row may be empty.  Every
//! non-empty row must sum to 1.0; malformed rows are rejected, never
//! rescaled.  Loaders that start from raw counts use [`normalise`] first.

use ms_core::{ActivityKind, PersonId, VenueId};
use ms_population::check_flow_row;

use crate::{ActivityError, ActivityResult};

/// Sparse, immutable flow weights for one activity kind.
#[derive(Clone, Debug)]
pub struct FlowMatrix {
    kind:        ActivityKind,
    venue_count: usize,
    offsets:     Vec<usize>,
    venues:      Vec<VenueId>,
    weights:     Vec<f64>,
}

impl FlowMatrix {
    /// Build from dense rows, one per individual, each `venue_count` long.
    pub fn from_dense(kind: ActivityKind, venue_count: usize, rows: &[Vec<f64>]) -> ActivityResult<Self> {
        let mut offsets = Vec::with_capacity(rows.len() + 1);
        let mut venues = Vec::new();
        let mut weights = Vec::new();
        offsets.push(0);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != venue_count {
                return Err(ActivityError::LengthMismatch {
                    expected: venue_count,
                    got:      row.len(),
                    what:     "dense flow row",
                });
            }
            let start = weights.len();
            for (v, &w) in row.iter().enumerate() {
                if w != 0.0 {
                    venues.push(VenueId::from_index(v));
                    weights.push(w);
                }
            }
            check_flow_row(PersonId::from_index(i), kind, &weights[start..])?;
            offsets.push(weights.len());
        }

        Ok(Self { kind, venue_count, offsets, venues, weights })
    }

    /// Build from `(individual, venue, weight)` triples in any order.
    ///
    /// Individuals absent from `entries` get an empty row.  A repeated
    /// `(individual, venue)` pair is an error.
    pub fn from_entries<I>(
        kind:        ActivityKind,
        population:  usize,
        venue_count: usize,
        entries:     I,
    ) -> ActivityResult<Self>
    where
        I: IntoIterator<Item = (PersonId, VenueId, f64)>,
    {
        let mut rows: Vec<Vec<(VenueId, f64)>> = vec![Vec::new(); population];
        for (person, venue, weight) in entries {
            if venue.index() >= venue_count {
                return Err(ActivityError::UnknownVenue { kind, person, venue });
            }
            let row = rows.get_mut(person.index()).ok_or(ActivityError::PopulationMismatch {
                kind,
                expected: population,
                got:      person.index() + 1,
            })?;
            row.push((venue, weight));
        }

        let mut offsets = Vec::with_capacity(population + 1);
        let mut venues = Vec::new();
        let mut weights = Vec::new();
        offsets.push(0);

        for (i, mut row) in rows.into_iter().enumerate() {
            let person = PersonId::from_index(i);
            row.sort_by_key(|&(v, _)| v);
            if let Some(pair) = row.windows(2).find(|pair| pair[0].0 == pair[1].0) {
                return Err(ActivityError::DuplicateFlow { kind, person, venue: pair[0].0 });
            }
            let start = weights.len();
            for (v, w) in row {
                if w != 0.0 {
                    venues.push(v);
                    weights.push(w);
                }
            }
            check_flow_row(person, kind, &weights[start..])?;
            offsets.push(weights.len());
        }

        Ok(Self { kind, venue_count, offsets, venues, weights })
    }

    #[inline]
    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    /// Number of individuals (rows).
    #[inline]
    pub fn population(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of venue columns.
    #[inline]
    pub fn venue_count(&self) -> usize {
        self.venue_count
    }

    /// Number of stored (nonzero) entries.
    #[inline]
    pub fn nnz(&self) -> usize {
        self.weights.len()
    }

    /// Nonzero venues and their weights for one individual.
    #[inline]
    pub fn row(&self, person: PersonId) -> (&[VenueId], &[f64]) {
        let range = self.offsets[person.index()]..self.offsets[person.index() + 1];
        (&self.venues[range.clone()], &self.weights[range])
    }

    /// Total weight flowing into `venue` across all individuals.
    pub fn inflow(&self, venue: VenueId) -> f64 {
        self.venues
            .iter()
            .zip(&self.weights)
            .filter(|&(&v, _)| v == venue)
            .map(|(_, &w)| w)
            .sum()
    }
}

/// Scale non-negative weights so they sum to 1.0.
///
/// A single weight becomes `[1.0]`.  Empty input, a negative or non-finite
/// weight, or an all-zero list is an error.
pub fn normalise(weights: &[f64]) -> ActivityResult<Vec<f64>> {
    if weights.is_empty() {
        return Err(ActivityError::Normalise("no weights given".into()));
    }
    if let Some(w) = weights.iter().find(|w| !w.is_finite() || **w < 0.0) {
        return Err(ActivityError::Normalise(format!("weight {w} is negative or not finite")));
    }
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return Err(ActivityError::Normalise("weights sum to zero".into()));
    }
    Ok(weights.iter().map(|w| w / total).collect())
}
