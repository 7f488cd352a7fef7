use crate::booking::selection::SelectionSet;
use crate::booking::slots::{format_hour, Hour};

/// What the payment popup shows for the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSummary {
    pub start: Hour,
    /// End of the latest selected slot; 24 means midnight.
    pub end_hour: u8,
    pub slot_count: usize,
    pub total: u32,
    /// False when the selection has gaps. The range still spans earliest to latest.
    pub contiguous: bool,
}

impl PaymentSummary {
    pub fn compute(selection: &SelectionSet, hourly_rate: u32) -> Option<Self> {
        let start = selection.first()?;
        let last = selection.last()?;
        let slot_count = selection.len();
        let span = usize::from(last.value() - start.value()) + 1;

        Some(Self {
            start,
            end_hour: last.value() + 1,
            slot_count,
            total: total_price(slot_count, hourly_rate),
            contiguous: span == slot_count,
        })
    }

    pub fn time_range(&self) -> String {
        format!("{} to {}", format_hour(self.start.value()), format_hour(self.end_hour))
    }
}

pub fn total_price(slot_count: usize, hourly_rate: u32) -> u32 {
    (slot_count as u32).saturating_mul(hourly_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selection(hours: &[u8]) -> SelectionSet {
        hours.iter().map(|h| Hour::new(*h).unwrap()).collect()
    }

    #[test]
    fn empty_selection_has_no_summary() {
        assert_eq!(PaymentSummary::compute(&SelectionSet::default(), 1100), None);
    }

    #[test]
    fn single_slot_summary() {
        let summary = PaymentSummary::compute(&selection(&[8]), 1100).unwrap();
        assert_eq!(summary.time_range(), "8AM to 9AM");
        assert_eq!(summary.total, 1100);
        assert!(summary.contiguous);
    }

    #[test]
    fn gap_in_selection_still_spans_min_to_max() {
        let summary = PaymentSummary::compute(&selection(&[10, 11, 13]), 1100).unwrap();
        assert_eq!(summary.time_range(), "10AM to 2PM");
        assert_eq!(summary.slot_count, 3);
        assert_eq!(summary.total, 3300);
        assert!(!summary.contiguous);
    }

    #[test]
    fn last_slot_of_the_day_ends_at_midnight() {
        let summary = PaymentSummary::compute(&selection(&[22, 23]), 1100).unwrap();
        assert_eq!(summary.time_range(), "10PM to 12AM");
        assert_eq!(summary.total, 2200);
    }

    #[test]
    fn total_is_flat_per_hour() {
        assert_eq!(total_price(0, 1100), 0);
        assert_eq!(total_price(18, 1100), 19800);
        assert_eq!(total_price(2, 750), 1500);
    }
}
