//! Hazard multipliers keyed by disease status and by activity kind.
//!
//! # Defaults
//!
//! Both maps may be empty.  A missing key is not an error:
//!
//! | Lookup                    | Missing key returns                         |
//! |---------------------------|---------------------------------------------|
//! | `status_multiplier(s)`    | [`DEFAULT_STATUS_MULTIPLIER`] (0.0)         |
//! | `location_multiplier(k)`  | [`DEFAULT_LOCATION_MULTIPLIER`] (1.0)       |
//!
//! So an unconfigured status contributes no hazard at all, and an
//! unconfigured activity kind is neutral.

use rustc_hash::FxHashMap;

use crate::{ActivityKind, CoreError, CoreResult, DiseaseStatus};

/// Multiplier applied to individuals whose status has no entry.
pub const DEFAULT_STATUS_MULTIPLIER: f64 = 0.0;

/// Multiplier applied to activity kinds that have no entry.
pub const DEFAULT_LOCATION_MULTIPLIER: f64 = 1.0;

/// Process-wide hazard configuration, set before stepping begins.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HazardConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    individual: FxHashMap<DiseaseStatus, f64>,

    #[cfg_attr(feature = "serde", serde(default))]
    location: FxHashMap<ActivityKind, f64>,
}

impl HazardConfig {
    /// An empty configuration: every status contributes 0, every location is
    /// neutral.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`set_status_multiplier`](Self::set_status_multiplier).
    pub fn with_status_multiplier(mut self, status: DiseaseStatus, value: f64) -> CoreResult<Self> {
        self.set_status_multiplier(status, value)?;
        Ok(self)
    }

    /// Builder-style variant of [`set_location_multiplier`](Self::set_location_multiplier).
    pub fn with_location_multiplier(mut self, kind: ActivityKind, value: f64) -> CoreResult<Self> {
        self.set_location_multiplier(kind, value)?;
        Ok(self)
    }

    pub fn set_status_multiplier(&mut self, status: DiseaseStatus, value: f64) -> CoreResult<()> {
        check_multiplier(status.name(), value)?;
        self.individual.insert(status, value);
        Ok(())
    }

    pub fn set_location_multiplier(&mut self, kind: ActivityKind, value: f64) -> CoreResult<()> {
        check_multiplier(kind.name(), value)?;
        self.location.insert(kind, value);
        Ok(())
    }

    /// Hazard an individual with `status` carries into a venue.
    #[inline]
    pub fn status_multiplier(&self, status: DiseaseStatus) -> f64 {
        self.individual
            .get(&status)
            .copied()
            .unwrap_or(DEFAULT_STATUS_MULTIPLIER)
    }

    /// Scaling applied to all danger generated at venues of `kind`.
    #[inline]
    pub fn location_multiplier(&self, kind: ActivityKind) -> f64 {
        self.location
            .get(&kind)
            .copied()
            .unwrap_or(DEFAULT_LOCATION_MULTIPLIER)
    }

    /// Dense `[f64; DiseaseStatus::COUNT]` table with defaults filled in.
    ///
    /// The danger pass looks multipliers up once per individual; resolving the
    /// map into an array first keeps that loop free of hashing.
    pub fn status_table(&self) -> [f64; DiseaseStatus::COUNT] {
        DiseaseStatus::ALL.map(|s| self.status_multiplier(s))
    }

    /// `true` if neither map has any entry.
    pub fn is_empty(&self) -> bool {
        self.individual.is_empty() && self.location.is_empty()
    }

    /// Re-check every stored multiplier.
    ///
    /// The setters already validate; this exists for configurations that
    /// arrive through `serde` and bypass them.
    pub fn validate(&self) -> CoreResult<()> {
        for (status, &value) in &self.individual {
            check_multiplier(status.name(), value)?;
        }
        for (kind, &value) in &self.location {
            check_multiplier(kind.name(), value)?;
        }
        Ok(())
    }
}

fn check_multiplier(what: &str, value: f64) -> CoreResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CoreError::InvalidMultiplier { what: what.to_string(), value })
    }
}
