//! Validation utilities for generated forecasts
//!
//! Used by the server to check precomputed records before serving them.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::generator::labels::{HOUR_LABELS, OUTLOOK_DAYS, RAINFALL_DAYS};
use crate::models::{ForecastRecord, RegionRange};
use crate::types::{Bounds, Condition};

const MAX_RAINY_DAYS: usize = 5;

fn decimal_within(value: Decimal, bounds: &Bounds) -> Result<bool, &'static str> {
    match (
        Decimal::from_f64_retain(bounds.min),
        Decimal::from_f64_retain(bounds.max),
    ) {
        (Some(min), Some(max)) => Ok(value >= min && value <= max),
        _ => Err("Region bounds have no decimal representation"),
    }
}

// ============================================================================
// Section Validations
// ============================================================================

/// Validate current conditions against the region bounds
pub fn validate_current(record: &ForecastRecord, range: &RegionRange) -> Result<(), &'static str> {
    let current = &record.current;
    if !decimal_within(current.temperature, &range.temperature)? {
        return Err("Current temperature outside region bounds");
    }
    if !range.humidity.contains(f64::from(current.humidity)) {
        return Err("Current humidity outside region bounds");
    }
    if current.condition == Condition::Cloudy {
        return Err("Current condition cannot be cloudy in the dry season");
    }
    if !(0..=100).contains(&current.rain_chance) {
        return Err("Rain chance must be a percentage");
    }
    Ok(())
}

/// Validate the 24-hour curve shape and labels
pub fn validate_hourly(record: &ForecastRecord) -> Result<(), &'static str> {
    if record.hourly.len() != HOUR_LABELS.len() {
        return Err("Hourly forecast must have 24 entries");
    }
    if record
        .hourly
        .iter()
        .zip(HOUR_LABELS)
        .any(|(point, label)| point.time != label)
    {
        return Err("Hourly labels out of order");
    }
    Ok(())
}

/// Validate the 7-day outlook against the region bounds
pub fn validate_daily(record: &ForecastRecord, range: &RegionRange) -> Result<(), &'static str> {
    if record.daily.len() != OUTLOOK_DAYS {
        return Err("Daily outlook must have 7 entries");
    }
    for day in &record.daily {
        if !decimal_within(day.high, &range.temperature)?
            || !decimal_within(day.low, &range.temperature)?
        {
            return Err("Daily temperature outside region bounds");
        }
        if day.low > day.high {
            return Err("Daily low above daily high");
        }
    }
    Ok(())
}

/// Validate the 30-day rainfall history
pub fn validate_rainfall(record: &ForecastRecord) -> Result<(), &'static str> {
    if record.rainfall_30d.len() != RAINFALL_DAYS {
        return Err("Rainfall history must have 30 entries");
    }
    if record.rainfall_30d.iter().any(|p| p.mm < Decimal::ZERO) {
        return Err("Rainfall cannot be negative");
    }
    // The sparse day set may deliver fewer days, never more
    if record.rainy_days() > MAX_RAINY_DAYS {
        return Err("Too many rainy days in history");
    }
    Ok(())
}

/// Validate alert count and uniqueness
pub fn validate_advisory(record: &ForecastRecord) -> Result<(), &'static str> {
    let alerts = &record.agricultural.alerts;
    if !(2..=3).contains(&alerts.len()) {
        return Err("Advisory must carry 2 or 3 alerts");
    }
    let messages: HashSet<&str> = alerts.iter().map(|a| a.message.as_str()).collect();
    if messages.len() != alerts.len() {
        return Err("Duplicate alert message");
    }
    Ok(())
}

/// Validate every section of a record
pub fn validate_forecast(record: &ForecastRecord, range: &RegionRange) -> Result<(), &'static str> {
    validate_current(record, range)?;
    validate_hourly(record)?;
    validate_daily(record, range)?;
    validate_rainfall(record)?;
    validate_advisory(record)
}
