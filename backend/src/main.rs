use dotenvy::dotenv;
use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::sync::Arc;

mod config;
mod error;
mod handlers {
    pub mod booking_handlers;
}
mod models {
    pub mod booking_models;
}
mod repositories {
    pub mod booking_repository;
}

use config::Config;
use handlers::booking_handlers;
use repositories::booking_repository::BookingRepository;


async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    bookings: BookingRepository,
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/bookings", get(booking_handlers::get_booked_window))
        .route("/api/bookings/{date}", get(booking_handlers::get_booked_for_date))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(Any)
                .allow_headers([axum::http::header::CONTENT_TYPE])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let bookings = match &config.bookings_file {
        Some(path) => {
            let repo = BookingRepository::load(path)?;
            tracing::info!("Loaded booked slots for {} dates from {}", repo.date_count(), path.display());
            repo
        }
        None => {
            tracing::info!("BOOKINGS_FILE not set, serving bundled booked slots");
            BookingRepository::seeded()
        }
    };

    let state = Arc::new(AppState { bookings });
    let app = app(state);

    use tokio::net::TcpListener;

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
