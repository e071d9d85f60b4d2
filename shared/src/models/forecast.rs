//! Generated forecast records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AlertSeverity, Condition, Region};

/// Complete synthetic forecast for one county
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    pub county: String,
    pub region: Region,
    pub current: CurrentConditions,
    pub hourly: Vec<HourlyPoint>,
    pub daily: Vec<DailyPoint>,
    #[serde(rename = "rainfall30d")]
    pub rainfall_30d: Vec<RainfallPoint>,
    pub agricultural: AgriculturalAdvisory,
}

/// Conditions "right now"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub temperature: Decimal,
    pub feels_like: Decimal,
    pub humidity: i32,
    /// km/h
    pub wind_speed: i32,
    pub wind_direction: String,
    pub uv_index: i32,
    pub rain_chance: i32,
    pub condition: Condition,
    pub description: String,
}

/// One clock hour of the 24-hour curve
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPoint {
    pub time: String,
    pub temperature: Decimal,
    pub rain_chance: i32,
    pub condition: Condition,
}

/// One day of the 7-day outlook
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DailyPoint {
    pub day: String,
    pub date: String,
    pub high: Decimal,
    pub low: Decimal,
    pub rain_chance: i32,
    pub condition: Condition,
    pub description: String,
}

/// Rainfall total for one past day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RainfallPoint {
    pub date: String,
    pub mm: Decimal,
}

/// Farming guidance derived from the forecast
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgriculturalAdvisory {
    pub planting_window: String,
    pub harvest_condition: String,
    pub alerts: Vec<AgriculturalAlert>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgriculturalAlert {
    pub severity: AlertSeverity,
    pub message: String,
}

impl ForecastRecord {
    /// Number of days in the 30-day history with measurable rain
    pub fn rainy_days(&self) -> usize {
        self.rainfall_30d
            .iter()
            .filter(|p| p.mm > Decimal::ZERO)
            .count()
    }

    pub fn rainfall_total_mm(&self) -> Decimal {
        self.rainfall_30d.iter().map(|p| p.mm).sum()
    }

    /// Wettest day of the history; the earliest one wins a tie
    pub fn wettest_day(&self) -> Option<&RainfallPoint> {
        self.rainfall_30d
            .iter()
            .filter(|p| p.mm > Decimal::ZERO)
            .fold(None, |best: Option<&RainfallPoint>, p| match best {
                Some(b) if b.mm >= p.mm => Some(b),
                _ => Some(p),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record_with_rain(mm: &[&str]) -> ForecastRecord {
        ForecastRecord {
            county: "Bong".to_string(),
            region: Region::Central,
            current: CurrentConditions {
                temperature: dec("28.4"),
                feels_like: dec("28.4"),
                humidity: 70,
                wind_speed: 10,
                wind_direction: "SW".to_string(),
                uv_index: 9,
                rain_chance: 5,
                condition: Condition::Sunny,
                description: "Sunny".to_string(),
            },
            hourly: Vec::new(),
            daily: Vec::new(),
            rainfall_30d: mm
                .iter()
                .enumerate()
                .map(|(i, v)| RainfallPoint {
                    date: format!("Jan {}", i + 1),
                    mm: dec(v),
                })
                .collect(),
            agricultural: AgriculturalAdvisory {
                planting_window: String::new(),
                harvest_condition: String::new(),
                alerts: Vec::new(),
            },
        }
    }

    #[test]
    fn test_rainfall_summary_helpers() {
        let record = record_with_rain(&["0", "4.5", "0", "12.0", "12.0", "0"]);
        assert_eq!(record.rainy_days(), 3);
        assert_eq!(record.rainfall_total_mm(), dec("28.5"));
        assert_eq!(record.wettest_day().unwrap().date, "Jan 4");
    }

    #[test]
    fn test_wettest_day_none_without_rain() {
        let record = record_with_rain(&["0", "0"]);
        assert!(record.wettest_day().is_none());
        assert_eq!(record.rainfall_total_mm(), Decimal::ZERO);
    }

    #[test]
    fn test_wire_field_names() {
        let record = record_with_rain(&["1.5"]);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("rainfall30d").is_some());
        assert!(json["current"].get("feelsLike").is_some());
        assert!(json["current"].get("uvIndex").is_some());
        assert!(json["agricultural"].get("plantingWindow").is_some());
        assert_eq!(json["region"], "central");
    }
}
