
#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

/// Sports that have their own booking page.
pub const SPORTS: &[&str] = &["cricket", "football"];

/// Literal values the booking widget is driven by. The booked hours themselves
/// come from a `BookedHoursSource`, not from here.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingConfig {
    pub hourly_rate: u32,
    pub open_hour: u8,
    /// Exclusive, so 24 means the last slot is 11PM - 12AM.
    pub close_hour: u8,
    pub days_ahead: u32,
    pub payment_destination: String,
    pub default_sport: String,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            hourly_rate: 1100,
            open_hour: 6,
            close_hour: 24,
            days_ahead: 7,
            payment_destination: "/payment".to_string(),
            default_sport: SPORTS[0].to_string(),
        }
    }
}

impl BookingConfig {
    pub fn is_operating_hour(&self, hour: u8) -> bool {
        hour >= self.open_hour && hour < self.close_hour.min(24)
    }
}
