//! Activity kinds: the categories of venue an individual splits time across.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// A category of venue and the behaviour of being there.
///
/// The set is closed: every per-kind array in the engine has exactly
/// [`ActivityKind::COUNT`] slots, indexed by [`ActivityKind::index`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ActivityKind {
    Home,
    Work,
    PrimarySchool,
    SecondarySchool,
    Retail,
}

impl ActivityKind {
    pub const COUNT: usize = 5;

    /// Every kind, in `index()` order.
    pub const ALL: [ActivityKind; Self::COUNT] = [
        ActivityKind::Home,
        ActivityKind::Work,
        ActivityKind::PrimarySchool,
        ActivityKind::SecondarySchool,
        ActivityKind::Retail,
    ];

    /// Dense index in `0..COUNT`.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::Home            => "home",
            ActivityKind::Work            => "work",
            ActivityKind::PrimarySchool   => "primary_school",
            ActivityKind::SecondarySchool => "secondary_school",
            ActivityKind::Retail          => "retail",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ActivityKind {
    type Err = CoreError;

    /// Accepts the snake_case name or the CamelCase table name used by
    /// loaders (`"PrimarySchool"`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "home"            => Ok(ActivityKind::Home),
            "work"            => Ok(ActivityKind::Work),
            "primaryschool"   => Ok(ActivityKind::PrimarySchool),
            "secondaryschool" => Ok(ActivityKind::SecondarySchool),
            "retail"          => Ok(ActivityKind::Retail),
            _ => Err(CoreError::Parse(format!("unknown activity kind {s:?}"))),
        }
    }
}
