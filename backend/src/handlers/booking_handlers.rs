use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::AppError;
use crate::models::booking_models::{
    DateBookingsResponse, WindowQuery, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS,
};
use crate::repositories::booking_repository::parse_date;
use crate::AppState;

pub async fn get_booked_window(
    State(state): State<Arc<AppState>>,
    Query(query): Query<WindowQuery>,
) -> Result<Json<BTreeMap<String, Vec<String>>>, AppError> {
    let from = match query.from.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };
    let days = query.days.unwrap_or(DEFAULT_WINDOW_DAYS);
    if days == 0 || days > MAX_WINDOW_DAYS {
        return Err(AppError::InvalidWindow {
            got: days,
            max: MAX_WINDOW_DAYS,
        });
    }

    let window = state.bookings.booked_in_window(from, days);
    tracing::debug!("Serving {} booked dates from {} (+{} days)", window.len(), from, days);
    Ok(Json(window))
}

pub async fn get_booked_for_date(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<DateBookingsResponse>, AppError> {
    let parsed = parse_date(&date)?;
    Ok(Json(DateBookingsResponse {
        date: parsed.format(crate::models::booking_models::DATE_FORMAT).to_string(),
        booked_hours: state.bookings.booked_hours(parsed),
    }))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::repositories::booking_repository::BookingRepository;

    fn test_app() -> Router {
        crate::app(Arc::new(AppState {
            bookings: BookingRepository::seeded(),
        }))
    }

    async fn get(uri: &str) -> (StatusCode, Value) {
        let response = test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn health_check_is_ok() {
        let response = test_app()
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn window_lists_booked_dates() {
        let (status, body) = get("/api/bookings?from=2025-07-23&days=7").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "2025-07-24": ["09", "15"],
                "2025-07-25": ["10", "14"],
            })
        );
    }

    #[tokio::test]
    async fn window_defaults_to_seven_days() {
        let (status, body) = get("/api/bookings?from=2025-07-18").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "2025-07-24": ["09", "15"] }));
    }

    #[tokio::test]
    async fn window_rejects_bad_input() {
        let (status, body) = get("/api/bookings?from=tomorrow").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("tomorrow"));

        let (status, _) = get("/api/bookings?from=2025-07-24&days=0").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get("/api/bookings?from=2025-07-24&days=32").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn single_date_lookup() {
        let (status, body) = get("/api/bookings/2025-07-25").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "date": "2025-07-25", "booked_hours": ["10", "14"] }));

        let (status, body) = get("/api/bookings/2030-01-01").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "date": "2030-01-01", "booked_hours": [] }));

        let (status, _) = get("/api/bookings/2025-13-01").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
