#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("invalid hour: {0:?}")]
    InvalidHour(String),
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
    #[error("failed to fetch booked slots: {0}")]
    Fetch(String),
}
