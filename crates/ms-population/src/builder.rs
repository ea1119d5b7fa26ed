//! Validating builder for [`IndividualTable`].
//!
//! # Usage
//!
//! ```rust
//! use ms_core::{ActivityKind, DiseaseStatus};
//! use ms_population::IndividualTableBuilder;
//!
//! let table = IndividualTableBuilder::new(2)
//!     .durations(ActivityKind::Home, vec![0.5, 1.0])
//!     .durations(ActivityKind::Work, vec![0.5, 0.0])
//!     .statuses(vec![DiseaseStatus::Symptomatic, DiseaseStatus::Susceptible])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(table.count, 2);
//! ```
//!
//! Venue lists and flow weights are not supplied here; each activity
//! location writes them in when the simulation is assembled.

use log::warn;
use ms_core::{ActivityKind, DiseaseStatus, PersonId};

use crate::check::{check_duration, FLOW_SUM_TOLERANCE};
use crate::{ActivityColumns, IndividualTable, PopulationError, PopulationResult};

/// Fluent builder for [`IndividualTable`].
///
/// Kinds without `durations(..)` start at 0.0 for everyone; statuses default
/// to `Susceptible`.
pub struct IndividualTableBuilder {
    count:     usize,
    statuses:  Option<Vec<DiseaseStatus>>,
    durations: [Option<Vec<f64>>; ActivityKind::COUNT],
}

impl IndividualTableBuilder {
    /// Create a builder for `count` individuals, typically the number of
    /// rows in the population table.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            statuses:  None,
            durations: Default::default(),
        }
    }

    /// Initial disease status for every individual.
    pub fn statuses(mut self, statuses: Vec<DiseaseStatus>) -> Self {
        self.statuses = Some(statuses);
        self
    }

    /// Pre-disease fraction of the day each individual spends at `kind`.
    ///
    /// Sets both `duration` and `duration_initial`.  Calling twice for the
    /// same kind replaces the earlier values.
    pub fn durations(mut self, kind: ActivityKind, durations: Vec<f64>) -> Self {
        self.durations[kind.index()] = Some(durations);
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    ///
    /// - any supplied column whose length is not `count`;
    /// - any duration outside [0, 1].
    ///
    /// Individuals whose durations do not sum to 1.0 are tolerated but
    /// reported once with `warn!`.
    pub fn build(self) -> PopulationResult<IndividualTable> {
        let count = self.count;

        let statuses = match self.statuses {
            Some(s) => {
                if s.len() != count {
                    return Err(PopulationError::LengthMismatch {
                        expected: count,
                        got:      s.len(),
                        what:     "disease statuses",
                    });
                }
                s
            }
            None => vec![DiseaseStatus::default(); count],
        };

        let mut columns: [ActivityColumns; ActivityKind::COUNT] = Default::default();
        for (kind, durations) in ActivityKind::ALL.into_iter().zip(self.durations) {
            let durations = match durations {
                Some(d) => {
                    if d.len() != count {
                        return Err(PopulationError::LengthMismatch {
                            expected: count,
                            got:      d.len(),
                            what:     "activity durations",
                        });
                    }
                    for (i, &value) in d.iter().enumerate() {
                        check_duration(PersonId::from_index(i), kind, value)?;
                    }
                    d
                }
                None => vec![0.0; count],
            };
            columns[kind.index()] = ActivityColumns::with_durations(count, durations);
        }

        let table = IndividualTable::new(statuses, columns);

        let unbalanced = table
            .person_ids()
            .filter(|&p| (table.duration_total(p) - 1.0).abs() > FLOW_SUM_TOLERANCE)
            .count();
        if unbalanced > 0 {
            warn!("{unbalanced} of {count} individuals have durations that do not sum to 1.0");
        }

        Ok(table)
    }
}
