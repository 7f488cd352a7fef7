use std::collections::HashMap;

use chrono::NaiveDate;
use gloo_net::http::Request;

use crate::booking::dates::ISO_DATE_FORMAT;
use crate::booking::error::BookingError;
use crate::booking::source::BookedTable;
use crate::config;

/// Loads the booked hours for `days` dates starting at `from` from the booking service.
pub async fn fetch_booked_table(from: NaiveDate, days: u32) -> Result<BookedTable, BookingError> {
    let url = format!(
        "{}/api/bookings?from={}&days={}",
        config::get_backend_url(),
        from.format(ISO_DATE_FORMAT),
        days
    );

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| BookingError::Fetch(format!("Network error: {}", e)))?;

    if !response.ok() {
        return Err(BookingError::Fetch(format!("Server error: {}", response.status())));
    }

    let wire = response
        .json::<HashMap<String, Vec<String>>>()
        .await
        .map_err(|e| BookingError::Fetch(format!("Failed to parse response: {}", e)))?;

    BookedTable::from_wire(wire)
}
