//! HTTP handlers for the AgroMarket weather server

pub mod health;
pub mod weather;

pub use health::health_check;
pub use weather::{get_county_forecast, get_rainfall_summary, list_counties};
