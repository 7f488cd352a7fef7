use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::booking::error::BookingError;
use crate::booking::selection::SelectionSet;

/// An hour of the day (0..=23), keyed on the page by its zero-padded form ("06").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hour(u8);

impl Hour {
    pub fn new(hour: u8) -> Result<Self, BookingError> {
        if hour < 24 {
            Ok(Hour(hour))
        } else {
            Err(BookingError::InvalidHour(hour.to_string()))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn key(self) -> String {
        format!("{:02}", self.0)
    }
}

impl fmt::Display for Hour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Hour {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BookingError::InvalidHour(s.to_string()));
        }
        let hour: u8 = s
            .parse()
            .map_err(|_| BookingError::InvalidHour(s.to_string()))?;
        Hour::new(hour).map_err(|_| BookingError::InvalidHour(s.to_string()))
    }
}

impl TryFrom<String> for Hour {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Hour> for String {
    fn from(hour: Hour) -> Self {
        hour.key()
    }
}

/// Formats an hour on the 12-hour clock, e.g. 0 -> "12AM", 13 -> "1PM".
///
/// 24 is accepted as the closing boundary of the last slot and deliberately
/// reads as midnight ("12AM"), so the 23:00 slot is "11PM - 12AM". The earlier
/// page printed "12PM" there by applying the PM rule to every hour >= 12.
pub fn format_hour(hour: u8) -> String {
    let suffix = if hour % 24 >= 12 { "PM" } else { "AM" };
    let h12 = if hour % 12 == 0 { 12 } else { hour % 12 };
    format!("{}{}", h12, suffix)
}

pub fn slot_label(hour: Hour) -> String {
    format!("{} - {}", format_hour(hour.value()), format_hour(hour.value() + 1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    Available,
    Booked,
    Selected,
}

impl SlotStatus {
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            SlotStatus::Available => None,
            SlotStatus::Booked => Some("booked"),
            SlotStatus::Selected => Some("selected"),
        }
    }

    pub fn is_interactive(self) -> bool {
        self != SlotStatus::Booked
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    pub hour: Hour,
    pub label: String,
    pub status: SlotStatus,
}

/// Builds one slot per hour in `start_hour..end_hour`. Hours past 23 are dropped.
pub fn generate_time_slots(
    start_hour: u8,
    end_hour: u8,
    booked: &BTreeSet<Hour>,
    selection: &SelectionSet,
) -> Vec<TimeSlot> {
    (start_hour..end_hour)
        .filter_map(|h| Hour::new(h).ok())
        .map(|hour| {
            let status = if booked.contains(&hour) {
                SlotStatus::Booked
            } else if selection.contains(hour) {
                SlotStatus::Selected
            } else {
                SlotStatus::Available
            };
            TimeSlot {
                hour,
                label: slot_label(hour),
                status,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hour(h: u8) -> Hour {
        Hour::new(h).unwrap()
    }

    #[test]
    fn format_hour_covers_the_whole_day() {
        for h in 0..24u8 {
            let expected_value = if h == 0 || h == 12 { 12 } else { h % 12 };
            let expected_suffix = if h < 12 { "AM" } else { "PM" };
            assert_eq!(format_hour(h), format!("{}{}", expected_value, expected_suffix));
        }
    }

    #[test]
    fn format_hour_treats_24_as_midnight() {
        assert_eq!(format_hour(24), "12AM");
        assert_eq!(slot_label(hour(23)), "11PM - 12AM");
    }

    #[test]
    fn slot_label_spans_one_hour() {
        assert_eq!(slot_label(hour(6)), "6AM - 7AM");
        assert_eq!(slot_label(hour(11)), "11AM - 12PM");
        assert_eq!(slot_label(hour(12)), "12PM - 1PM");
    }

    #[test]
    fn hour_keys_are_zero_padded() {
        assert_eq!(hour(6).key(), "06");
        assert_eq!(hour(23).to_string(), "23");
        assert_eq!("08".parse::<Hour>(), Ok(hour(8)));
    }

    #[test]
    fn hour_rejects_malformed_keys() {
        assert!("8".parse::<Hour>().is_err());
        assert!("24".parse::<Hour>().is_err());
        assert!("ab".parse::<Hour>().is_err());
        assert!("-1".parse::<Hour>().is_err());
        assert!(Hour::new(24).is_err());
    }

    #[test]
    fn hour_serializes_as_key() {
        assert_eq!(serde_json::to_string(&hour(9)).unwrap(), "\"09\"");
        let parsed: Hour = serde_json::from_str("\"15\"").unwrap();
        assert_eq!(parsed, hour(15));
        assert!(serde_json::from_str::<Hour>("\"99\"").is_err());
    }

    #[test]
    fn generates_operating_hours_with_status() {
        let booked: BTreeSet<Hour> = [hour(9), hour(15)].into_iter().collect();
        let mut selection = SelectionSet::default();
        selection.toggle(hour(8));

        let slots = generate_time_slots(6, 24, &booked, &selection);

        assert_eq!(slots.len(), 18);
        assert_eq!(slots[0].hour, hour(6));
        assert_eq!(slots[0].label, "6AM - 7AM");
        assert_eq!(slots[17].hour, hour(23));
        let status_of = |h: u8| slots.iter().find(|s| s.hour == hour(h)).unwrap().status;
        assert_eq!(status_of(8), SlotStatus::Selected);
        assert_eq!(status_of(9), SlotStatus::Booked);
        assert_eq!(status_of(15), SlotStatus::Booked);
        assert_eq!(status_of(10), SlotStatus::Available);
    }

    #[test]
    fn booked_status_wins_over_selection() {
        let booked: BTreeSet<Hour> = [hour(9)].into_iter().collect();
        let mut selection = SelectionSet::default();
        selection.toggle(hour(9));

        let slots = generate_time_slots(9, 10, &booked, &selection);
        assert_eq!(slots[0].status, SlotStatus::Booked);
        assert!(!slots[0].status.is_interactive());
    }

    #[test]
    fn end_hour_past_midnight_is_clamped() {
        let slots = generate_time_slots(22, 30, &BTreeSet::new(), &SelectionSet::default());
        assert_eq!(slots.len(), 2);
    }
}
