use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("invalid hour {hour:?} booked on {date}")]
    InvalidHour { date: String, hour: String },
    #[error("days must be between 1 and {max}, got {got}")]
    InvalidWindow { got: u32, max: u32 },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidDate(_) | AppError::InvalidHour { .. } | AppError::InvalidWindow { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::Io(_) | AppError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
