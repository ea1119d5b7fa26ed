//! Disease status: written by the external disease model, read here.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// Where an individual is in the disease course.
///
/// Transitions are decided outside this engine.  The engine reads the
/// current value to look up hazard multipliers and behaviour-change rules.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum DiseaseStatus {
    #[default]
    Susceptible,
    Presymptomatic,
    Asymptomatic,
    Symptomatic,
    Recovered,
    Dead,
}

impl DiseaseStatus {
    pub const COUNT: usize = 6;

    pub const ALL: [DiseaseStatus; Self::COUNT] = [
        DiseaseStatus::Susceptible,
        DiseaseStatus::Presymptomatic,
        DiseaseStatus::Asymptomatic,
        DiseaseStatus::Symptomatic,
        DiseaseStatus::Recovered,
        DiseaseStatus::Dead,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// `true` for the three states in which an individual can pass on
    /// infection.
    #[inline]
    pub fn is_infectious(self) -> bool {
        matches!(
            self,
            DiseaseStatus::Presymptomatic | DiseaseStatus::Asymptomatic | DiseaseStatus::Symptomatic
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            DiseaseStatus::Susceptible    => "susceptible",
            DiseaseStatus::Presymptomatic => "presymptomatic",
            DiseaseStatus::Asymptomatic   => "asymptomatic",
            DiseaseStatus::Symptomatic    => "symptomatic",
            DiseaseStatus::Recovered      => "recovered",
            DiseaseStatus::Dead           => "dead",
        }
    }
}

impl fmt::Display for DiseaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DiseaseStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        DiseaseStatus::ALL
            .into_iter()
            .find(|status| status.name() == key)
            .ok_or_else(|| CoreError::Parse(format!("unknown disease status {s:?}")))
    }
}
