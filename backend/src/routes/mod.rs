//! Route definitions for the AgroMarket weather server

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/weather", weather_routes())
}

/// County weather routes (public, read-only)
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/counties", get(handlers::list_counties))
        .route("/counties/:name", get(handlers::get_county_forecast))
        .route(
            "/counties/:name/rainfall-summary",
            get(handlers::get_rainfall_summary),
        )
}
