use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use chrono::{Days, NaiveDate};

use crate::error::AppError;
use crate::models::booking_models::DATE_FORMAT;

/// Read-only table of hours that are already taken, per date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingRepository {
    booked: BTreeMap<NaiveDate, BTreeSet<String>>,
}

pub fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| AppError::InvalidDate(raw.to_string()))
}

fn is_hour_key(hour: &str) -> bool {
    hour.len() == 2
        && hour.bytes().all(|b| b.is_ascii_digit())
        && hour.parse::<u8>().map(|h| h < 24).unwrap_or(false)
}

impl BookingRepository {
    pub fn seeded() -> Self {
        let raw = r#"{"2025-07-24": ["09", "15"], "2025-07-25": ["10", "14"]}"#;
        Self::from_json(raw).unwrap_or_default()
    }

    /// Parses `{"YYYY-MM-DD": ["HH", ...]}`, validating every date and hour.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let wire: BTreeMap<String, Vec<String>> = serde_json::from_str(raw)?;
        let mut booked: BTreeMap<NaiveDate, BTreeSet<String>> = BTreeMap::new();
        for (date, hours) in wire {
            let parsed = parse_date(&date)?;
            if let Some(hour) = hours.iter().find(|h| !is_hour_key(h)) {
                return Err(AppError::InvalidHour {
                    date,
                    hour: hour.clone(),
                });
            }
            booked.entry(parsed).or_default().extend(hours);
        }
        Ok(Self { booked })
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn booked_hours(&self, date: NaiveDate) -> Vec<String> {
        self.booked
            .get(&date)
            .map(|hours| hours.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Booked hours for each date in `from..from+days` that has any.
    pub fn booked_in_window(&self, from: NaiveDate, days: u32) -> BTreeMap<String, Vec<String>> {
        let end = from.checked_add_days(Days::new(u64::from(days)));
        self.booked
            .range(from..)
            .take_while(|(date, _)| end.map_or(true, |end| **date < end))
            .filter(|(_, hours)| !hours.is_empty())
            .map(|(date, hours)| {
                (
                    date.format(DATE_FORMAT).to_string(),
                    hours.iter().cloned().collect(),
                )
            })
            .collect()
    }

    pub fn date_count(&self) -> usize {
        self.booked.len()
    }
}
