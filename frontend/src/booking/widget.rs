use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::booking::pricing::{total_price, PaymentSummary};
use crate::booking::redirect::PaymentRedirect;
use crate::booking::selection::SelectionSet;
use crate::booking::slots::{generate_time_slots, Hour, TimeSlot};
use crate::booking::source::BookedHoursSource;
use crate::config::BookingConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// The hour is booked or outside operating hours; nothing changed.
    Ignored,
}

/// State behind the slot booking widget for one sport.
///
/// The UI forwards its events to the `on_*` handlers and re-renders from
/// `slots()` and `summary()`. The payment summary is visible exactly when the
/// selection is non-empty, unless the user dismissed it since the last toggle.
pub struct BookingWidget<S> {
    source: S,
    config: BookingConfig,
    sport: String,
    active_date: NaiveDate,
    booked: BTreeSet<Hour>,
    selection: SelectionSet,
    summary_visible: bool,
}

impl<S: BookedHoursSource> BookingWidget<S> {
    pub fn new(source: S, config: BookingConfig, sport: impl Into<String>, today: NaiveDate) -> Self {
        let booked = source.fetch_booked_hours(today);
        Self {
            source,
            config,
            sport: sport.into(),
            active_date: today,
            booked,
            selection: SelectionSet::default(),
            summary_visible: false,
        }
    }

    pub fn on_date_changed(&mut self, date: NaiveDate) {
        self.selection.clear();
        self.active_date = date;
        self.booked = self.source.fetch_booked_hours(date);
        self.summary_visible = false;
    }

    pub fn on_slot_toggled(&mut self, hour: Hour) -> ToggleOutcome {
        if !self.is_selectable(hour) {
            return ToggleOutcome::Ignored;
        }
        let outcome = if self.selection.toggle(hour) {
            ToggleOutcome::Selected
        } else {
            ToggleOutcome::Deselected
        };
        self.summary_visible = !self.selection.is_empty();
        outcome
    }

    /// Payment target for the current selection, or `None` if nothing is selected.
    pub fn on_confirm(&self) -> Option<PaymentRedirect> {
        if self.selection.is_empty() {
            return None;
        }
        Some(PaymentRedirect {
            sport: self.sport.clone(),
            amount: total_price(self.selection.len(), self.config.hourly_rate),
        })
    }

    /// Closes the popup but keeps the selection.
    pub fn dismiss_summary(&mut self) {
        self.summary_visible = false;
    }

    /// Replaces the data source and re-reads the active date. Selected hours
    /// that are now booked are dropped.
    pub fn set_source(&mut self, source: S) {
        self.source = source;
        self.booked = self.source.fetch_booked_hours(self.active_date);
        let booked = &self.booked;
        if self.selection.retain(|hour| !booked.contains(&hour)) > 0 {
            self.summary_visible = !self.selection.is_empty();
        }
    }

    /// Switches the sport being booked. Starts over on the active date.
    pub fn set_sport(&mut self, sport: impl Into<String>) {
        self.sport = sport.into();
        self.on_date_changed(self.active_date);
    }

    pub fn is_selectable(&self, hour: Hour) -> bool {
        self.config.is_operating_hour(hour.value()) && !self.booked.contains(&hour)
    }

    pub fn slots(&self) -> Vec<TimeSlot> {
        generate_time_slots(
            self.config.open_hour,
            self.config.close_hour,
            &self.booked,
            &self.selection,
        )
    }

    pub fn summary(&self) -> Option<PaymentSummary> {
        PaymentSummary::compute(&self.selection, self.config.hourly_rate)
    }

    pub fn is_summary_visible(&self) -> bool {
        self.summary_visible
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn active_date(&self) -> NaiveDate {
        self.active_date
    }

    pub fn sport(&self) -> &str {
        &self.sport
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }
}
