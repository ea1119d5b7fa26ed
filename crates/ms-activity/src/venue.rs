//! Venue Table: one row per physical location of a single activity kind.

use crate::{ActivityError, ActivityResult};
use ms_core::VenueId;

/// Ids, display names, and the current step's danger for every venue.
///
/// Row `i` is addressed by `VenueId(i)`.  The `id` column is the loader's
/// own identifier and is carried through untouched for output; it need not
/// match the row index.
#[derive(Clone, Debug)]
pub struct VenueTable {
    ids:    Vec<i64>,
    names:  Vec<String>,
    danger: Vec<f64>,
}

impl VenueTable {
    /// Build a table from display names.
    ///
    /// `ids` defaults to the row numbers `0..names.len()`.  Danger starts at
    /// 0.0 everywhere.
    pub fn new<S: Into<String>>(names: Vec<S>, ids: Option<Vec<i64>>) -> ActivityResult<Self> {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let ids = match ids {
            Some(ids) => {
                if ids.len() != names.len() {
                    return Err(ActivityError::LengthMismatch {
                        expected: names.len(),
                        got:      ids.len(),
                        what:     "venue ids",
                    });
                }
                ids
            }
            None => (0..names.len() as i64).collect(),
        };
        let danger = vec![0.0; names.len()];
        Ok(Self { ids, names, danger })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterator over all `VenueId`s in row order.
    pub fn venue_ids(&self) -> impl Iterator<Item = VenueId> + '_ {
        VenueId::all(self.len())
    }

    #[inline]
    pub fn id(&self, venue: VenueId) -> i64 {
        self.ids[venue.index()]
    }

    #[inline]
    pub fn name(&self, venue: VenueId) -> &str {
        &self.names[venue.index()]
    }

    #[inline]
    pub fn danger(&self, venue: VenueId) -> f64 {
        self.danger[venue.index()]
    }

    /// Danger for every row, indexed by `VenueId`.
    #[inline]
    pub fn dangers(&self) -> &[f64] {
        &self.danger
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn total_danger(&self) -> f64 {
        self.danger.iter().sum()
    }

    /// Row whose loader id is `id`, if any.
    pub fn find_by_id(&self, id: i64) -> Option<VenueId> {
        self.ids
            .iter()
            .position(|&x| x == id)
            .map(VenueId::from_index)
    }

    /// Replace the whole danger column with a freshly computed one.
    pub(crate) fn commit_danger(&mut self, danger: Vec<f64>) {
        debug_assert_eq!(danger.len(), self.danger.len());
        self.danger = danger;
    }
}
