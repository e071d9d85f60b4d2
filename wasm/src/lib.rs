//! WebAssembly module for the AgroMarket platform
//!
//! Lets the browser dashboards generate county forecasts locally:
//! - Full forecast records as JSON
//! - County selector contents
//! - Rainfall totals for summary cards

use rust_decimal::prelude::ToPrimitive;
use shared::{counties, forecast_for, ForecastError, ForecastRecord};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

fn lookup(name: &str) -> Result<ForecastRecord, JsValue> {
    forecast_for(name).map_err(|e| {
        let message = e.to_string();
        // Misses come from free-text input; surface them in the console too
        if matches!(e, ForecastError::NotFound(_)) {
            web_sys::console::warn_1(&JsValue::from_str(&message));
        }
        JsValue::from_str(&message)
    })
}

/// Generate the forecast for a county and return it as JSON
#[wasm_bindgen]
pub fn forecast_json(name: &str) -> Result<String, JsValue> {
    let record = lookup(name)?;
    serde_json::to_string(&record)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize forecast: {}", e)))
}

/// County names in selector order
#[wasm_bindgen]
pub fn list_counties() -> js_sys::Array {
    county_names()
        .into_iter()
        .map(JsValue::from)
        .collect()
}

/// Seed used for a county name
#[wasm_bindgen]
pub fn county_seed(name: &str) -> u32 {
    shared::generator::hash(name)
}

/// Total rainfall over the last 30 days, in millimeters
#[wasm_bindgen]
pub fn rainfall_total(name: &str) -> Result<f64, JsValue> {
    let record = lookup(name)?;
    let total = record.rainfall_total_mm();
    total
        .to_f64()
        .ok_or_else(|| JsValue::from_str(&format!("Rainfall total {} is not representable", total)))
}

fn county_names() -> Vec<&'static str> {
    counties().iter().map(|c| c.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_county_names_in_selector_order() {
        let names = county_names();
        assert_eq!(names.len(), 15);
        assert_eq!(names.first(), Some(&"Bomi"));
        assert_eq!(names.last(), Some(&"Sinoe"));
    }

    #[test]
    fn test_county_seed_matches_hash() {
        assert_eq!(county_seed("Bong"), 2_076_390);
        assert_eq!(county_seed(""), 0);
    }

    #[test]
    fn test_forecast_json_is_deterministic() {
        let a = forecast_json("Nimba").unwrap();
        let b = forecast_json("nimba").unwrap();
        assert_eq!(a, b);
        assert!(a.contains("\"rainfall30d\""));
    }

    #[test]
    fn test_rainfall_total_sums_rainy_days() {
        let total = rainfall_total("Bong").unwrap();
        assert!((total - 36.2).abs() < 1e-9, "{total}");
    }
}
