use chrono::{Days, NaiveDate};

use crate::booking::error::BookingError;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOption {
    pub date: NaiveDate,
    pub label: String,
}

impl DateOption {
    /// The `<option>` value, e.g. "2025-07-24".
    pub fn value(&self) -> String {
        self.date.format(ISO_DATE_FORMAT).to_string()
    }
}

/// Short en-IN style label, e.g. "Fri, 25 Jul".
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%a, %-d %b").to_string()
}

/// `days` consecutive dates starting at `today`; the first one is labelled "Today".
pub fn upcoming_dates(today: NaiveDate, days: u32) -> Vec<DateOption> {
    (0..days)
        .filter_map(|offset| {
            let date = today.checked_add_days(Days::new(u64::from(offset)))?;
            let label = if offset == 0 {
                "Today".to_string()
            } else {
                format_date_label(date)
            };
            Some(DateOption { date, label })
        })
        .collect()
}

pub fn parse_date(value: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT)
        .map_err(|_| BookingError::InvalidDate(value.to_string()))
}

/// The user's local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn seven_consecutive_days_starting_today() {
        let options = upcoming_dates(date(2025, 7, 24), 7);

        assert_eq!(options.len(), 7);
        assert_eq!(options[0].label, "Today");
        assert_eq!(options[0].value(), "2025-07-24");
        assert_eq!(options[1].label, "Fri, 25 Jul");
        assert_eq!(options[6].value(), "2025-07-30");
        for pair in options.windows(2) {
            assert_eq!(pair[1].date, pair[0].date.succ_opt().unwrap());
        }
    }

    #[test]
    fn crosses_month_and_year_boundaries() {
        let options = upcoming_dates(date(2025, 12, 29), 7);
        assert_eq!(options[3].value(), "2026-01-01");
        assert_eq!(options[3].label, "Thu, 1 Jan");
    }

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(parse_date("2025-07-24"), Ok(date(2025, 7, 24)));
        assert_eq!(parse_date(" 2025-07-25 "), Ok(date(2025, 7, 25)));
        assert!(matches!(parse_date("24/07/2025"), Err(BookingError::InvalidDate(_))));
        assert!(parse_date("").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }
}
