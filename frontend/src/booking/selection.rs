use std::collections::BTreeSet;

use crate::booking::slots::Hour;

/// Hours the user has picked for the active date, kept in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    hours: BTreeSet<Hour>,
}

impl SelectionSet {
    /// Flips membership of `hour`. Returns true if it is selected afterwards.
    pub fn toggle(&mut self, hour: Hour) -> bool {
        if self.hours.remove(&hour) {
            false
        } else {
            self.hours.insert(hour);
            true
        }
    }

    pub fn contains(&self, hour: Hour) -> bool {
        self.hours.contains(&hour)
    }

    pub fn clear(&mut self) {
        self.hours.clear();
    }

    pub fn len(&self) -> usize {
        self.hours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }

    pub fn first(&self) -> Option<Hour> {
        self.hours.first().copied()
    }

    pub fn last(&self) -> Option<Hour> {
        self.hours.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Hour> + '_ {
        self.hours.iter().copied()
    }

    /// Drops every selected hour that fails `keep`. Returns how many were dropped.
    pub fn retain(&mut self, mut keep: impl FnMut(Hour) -> bool) -> usize {
        let before = self.hours.len();
        self.hours.retain(|hour| keep(*hour));
        before - self.hours.len()
    }
}

impl FromIterator<Hour> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = Hour>>(iter: I) -> Self {
        Self {
            hours: iter.into_iter().collect(),
        }
    }
}
