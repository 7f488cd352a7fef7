use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::booking::dates::parse_date;
use crate::booking::error::BookingError;
use crate::booking::slots::Hour;

/// Where the widget learns which hours are already taken.
pub trait BookedHoursSource {
    /// Hours that cannot be selected on `date`. Unknown dates are fully available.
    fn fetch_booked_hours(&self, date: NaiveDate) -> BTreeSet<Hour>;
}

/// In-memory booked-slots table, keyed by date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookedTable {
    entries: HashMap<NaiveDate, BTreeSet<Hour>>,
}

impl BookedTable {
    /// Bundled reference data used until the booking service answers.
    pub fn seed() -> Self {
        let mut table = Self::default();
        for (date, hours) in [("2025-07-24", [9, 15]), ("2025-07-25", [10, 14])] {
            if let Ok(date) = parse_date(date) {
                table.insert(date, hours.into_iter().filter_map(|h| Hour::new(h).ok()));
            }
        }
        table
    }

    pub fn insert(&mut self, date: NaiveDate, hours: impl IntoIterator<Item = Hour>) {
        self.entries.entry(date).or_default().extend(hours);
    }

    /// Builds a table from the booking service's `{"YYYY-MM-DD": ["09", ...]}` body.
    pub fn from_wire(wire: HashMap<String, Vec<String>>) -> Result<Self, BookingError> {
        let mut table = Self::default();
        for (date, hours) in wire {
            let date = parse_date(&date)?;
            let hours = hours
                .iter()
                .map(|h| h.parse::<Hour>())
                .collect::<Result<Vec<_>, _>>()?;
            table.insert(date, hours);
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl BookedHoursSource for BookedTable {
    fn fetch_booked_hours(&self, date: NaiveDate) -> BTreeSet<Hour> {
        self.entries.get(&date).cloned().unwrap_or_default()
    }
}
