//! Shared types and the forecast generator for the AgroMarket platform
//!
//! This crate is used by the backend server and by the browser through the
//! WASM bindings, so everything in it is synchronous and free of I/O.

pub mod catalog;
pub mod error;
pub mod generator;
pub mod models;
pub mod types;
pub mod validation;

pub use catalog::{counties, find_county, forecast_all, forecast_for, forecast_with, COUNTIES};
pub use error::*;
pub use generator::ForecastGenerator;
pub use models::*;
pub use types::*;
pub use validation::*;
