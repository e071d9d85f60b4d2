//! Common types used across the platform

use serde::{Deserialize, Serialize};

use crate::error::ForecastError;

/// Climate regions of Liberia used to bound generated weather
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Coastal,
    Central,
    Interior,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Coastal, Region::Central, Region::Interior];

    pub fn code(&self) -> &'static str {
        match self {
            Region::Coastal => "coastal",
            Region::Central => "central",
            Region::Interior => "interior",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Region {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "coastal" => Ok(Region::Coastal),
            "central" => Ok(Region::Central),
            "interior" => Ok(Region::Interior),
            other => Err(ForecastError::UnknownRegion(other.to_string())),
        }
    }
}

/// Sky condition category shown next to every forecast point
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Condition::Sunny => write!(f, "sunny"),
            Condition::PartlyCloudy => write!(f, "partly-cloudy"),
            Condition::Cloudy => write!(f, "cloudy"),
        }
    }
}

/// Severity tag of an agricultural alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Warning,
    Info,
    Success,
}

/// Closed interval used by the region profile table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}
