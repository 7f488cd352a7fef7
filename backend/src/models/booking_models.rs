use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DEFAULT_WINDOW_DAYS: u32 = 7;
pub const MAX_WINDOW_DAYS: u32 = 31;

#[derive(Debug, Deserialize)]
pub struct WindowQuery {
    pub from: Option<String>,
    pub days: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct DateBookingsResponse {
    pub date: String,
    pub booked_hours: Vec<String>,
}
