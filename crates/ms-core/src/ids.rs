//! Row identifiers.
//!
//! Both ids are row indices: `PersonId` into the Individual Table and
//! `VenueId` into one activity kind's Venue Table.  The inner integer is
//! `pub`, but callers should prefer `.index()` when indexing a `Vec`.

use std::fmt;

/// Generate a `u32` row id.  `$label` is the word used by `Display`, so
/// error messages read "person 7" rather than "PersonId(7)".
macro_rules! row_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident => $label:literal;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Row id for a `Vec` position below `u32::MAX`.
            #[inline(always)]
            pub fn from_index(i: usize) -> Self {
                $name(i as u32)
            }

            /// Every id of a table with `count` rows, ascending.
            pub fn all(count: usize) -> impl Iterator<Item = $name> {
                (0..count).map($name::from_index)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

row_id! {
    /// Row of an individual in the Individual Table.
    pub struct PersonId => "person";
}

row_id! {
    /// Row of a venue in one activity kind's Venue Table.
    ///
    /// Venue ids are only meaningful together with the `ActivityKind` whose
    /// table they index; household 3 and school 3 are unrelated.
    pub struct VenueId => "venue";
}
