//! A mutable view of one person's time allocation across all activity kinds.

use ms_core::{ActivityKind, PersonId};

use crate::ActivityColumns;

/// Borrowed view of one row of every [`ActivityColumns`].
///
/// Handed to behaviour models so they can move time between kinds without
/// seeing (or disturbing) anyone else's row.
pub struct DurationsMut<'a> {
    person:  PersonId,
    columns: &'a mut [ActivityColumns; ActivityKind::COUNT],
}

impl<'a> DurationsMut<'a> {
    pub(crate) fn new(person: PersonId, columns: &'a mut [ActivityColumns; ActivityKind::COUNT]) -> Self {
        Self { person, columns }
    }

    #[inline]
    pub fn person(&self) -> PersonId {
        self.person
    }

    #[inline]
    pub fn get(&self, kind: ActivityKind) -> f64 {
        self.columns[kind.index()].duration[self.person.index()]
    }

    #[inline]
    pub fn initial(&self, kind: ActivityKind) -> f64 {
        self.columns[kind.index()].duration_initial[self.person.index()]
    }

    /// Set the current duration for `kind`.  Range checking is left to the
    /// caller and to the orchestrator's pre-step check.
    #[inline]
    pub fn set(&mut self, kind: ActivityKind, value: f64) {
        self.columns[kind.index()].duration[self.person.index()] = value;
    }

    /// Put every kind back to its initial duration.
    ///
    /// Returns `true` if any value actually changed.
    pub fn restore_initial(&mut self) -> bool {
        let i = self.person.index();
        let mut changed = false;
        for columns in self.columns.iter_mut() {
            if columns.duration[i] != columns.duration_initial[i] {
                columns.duration[i] = columns.duration_initial[i];
                changed = true;
            }
        }
        changed
    }

    /// `true` if every kind is at its initial duration.
    pub fn is_initial(&self) -> bool {
        let i = self.person.index();
        self.columns.iter().all(|c| c.duration[i] == c.duration_initial[i])
    }

    pub fn total(&self) -> f64 {
        let i = self.person.index();
        self.columns.iter().map(|c| c.duration[i]).sum()
    }
}
