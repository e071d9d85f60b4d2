//! Static text and category pools the generator samples from

use crate::types::{AlertSeverity, Condition};

/// Normalized diurnal temperature shape, one value per clock hour.
/// Trough at 5 AM, peak at 1 PM.
pub const DIURNAL_SHAPE: [f64; 24] = [
    0.15, 0.10, 0.07, 0.04, 0.02, 0.00, 0.05, 0.15, 0.30, 0.48, 0.65, 0.80, 0.92, 1.00, 0.97,
    0.90, 0.78, 0.62, 0.48, 0.38, 0.30, 0.25, 0.21, 0.18,
];

/// Alert template from the advisory pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertTemplate {
    pub severity: AlertSeverity,
    pub message: &'static str,
}

impl AlertTemplate {
    pub const fn new(severity: AlertSeverity, message: &'static str) -> Self {
        Self { severity, message }
    }
}

/// Description strings keyed by condition
#[derive(Debug, Clone, Copy)]
pub struct DescriptionPool {
    pub sunny: &'static [&'static str],
    pub partly_cloudy: &'static [&'static str],
    pub cloudy: &'static [&'static str],
}

impl DescriptionPool {
    pub fn for_condition(&self, condition: Condition) -> &'static [&'static str] {
        match condition {
            Condition::Sunny => self.sunny,
            Condition::PartlyCloudy => self.partly_cloudy,
            Condition::Cloudy => self.cloudy,
        }
    }
}

/// Every pool the assembler draws from
#[derive(Debug, Clone, Copy)]
pub struct ForecastPools {
    /// Eligible "current" conditions. Dry season only: no cloudy.
    pub current_conditions: &'static [Condition],
    pub hourly_conditions: &'static [Condition],
    pub wind_directions: &'static [&'static str],
    pub descriptions: DescriptionPool,
    pub planting_windows: &'static [&'static str],
    pub harvest_conditions: &'static [&'static str],
    pub alerts: &'static [AlertTemplate],
}

impl ForecastPools {
    pub const STANDARD: ForecastPools = ForecastPools {
        current_conditions: &[Condition::Sunny, Condition::PartlyCloudy],
        hourly_conditions: &[
            Condition::Sunny,
            Condition::Sunny,
            Condition::PartlyCloudy,
            Condition::PartlyCloudy,
            Condition::Cloudy,
        ],
        wind_directions: &["N", "NE", "E", "SE", "S", "SW", "W", "NW"],
        descriptions: DescriptionPool {
            sunny: &[
                "Clear skies with strong sunshine",
                "Dry harmattan haze, plenty of sun",
                "Sunny with a light breeze",
            ],
            partly_cloudy: &[
                "Partly cloudy with sunny intervals",
                "Scattered clouds, mostly dry",
                "Hazy sunshine with passing clouds",
            ],
            cloudy: &[
                "Overcast with a chance of showers",
                "Heavy cloud cover, isolated showers possible",
                "Grey skies with light drizzle in places",
            ],
        },
        planting_windows: &[
            "Good window for cassava cuttings in the next 5 days",
            "Prepare upland rice nurseries this week",
            "Transplant vegetables in lowland swamps early morning",
            "Hold off planting until soil moisture improves",
            "Clear and burn plots now for early maize",
        ],
        harvest_conditions: &[
            "Excellent drying conditions for cocoa and coffee beans",
            "Good conditions for lowland rice harvest",
            "Dry weather favors groundnut lifting",
            "Dry produce under cover in the afternoon",
            "Harvest early in the day to avoid peak heat",
        ],
        alerts: &[
            AlertTemplate::new(AlertSeverity::Warning, "High temperatures expected: irrigate seedlings in the evening"),
            AlertTemplate::new(AlertSeverity::Warning, "Dry spell continues: mulch beds to keep soil moisture"),
            AlertTemplate::new(AlertSeverity::Warning, "Harmattan dust may reduce visibility on farm roads"),
            AlertTemplate::new(AlertSeverity::Warning, "Bush fire risk is elevated: keep firebreaks clear"),
            AlertTemplate::new(AlertSeverity::Warning, "Strong afternoon sun: protect harvested pepper from scorching"),
            AlertTemplate::new(AlertSeverity::Info, "Good week to service irrigation pumps and canals"),
            AlertTemplate::new(AlertSeverity::Info, "Market prices for palm oil usually rise this month"),
            AlertTemplate::new(AlertSeverity::Info, "Check stored rice for weevils during warm nights"),
            AlertTemplate::new(AlertSeverity::Info, "Extension officers are visiting county farms this week"),
            AlertTemplate::new(AlertSeverity::Info, "Low humidity speeds up drying of cocoa beans"),
            AlertTemplate::new(AlertSeverity::Success, "Ideal conditions for drying harvested coffee"),
            AlertTemplate::new(AlertSeverity::Success, "Low pest pressure reported in nearby farms"),
            AlertTemplate::new(AlertSeverity::Success, "Soil temperatures favor cassava root growth"),
            AlertTemplate::new(AlertSeverity::Success, "Calm winds make spraying safe this morning"),
            AlertTemplate::new(AlertSeverity::Success, "Clear skies ahead for transporting produce to market"),
        ],
    };
}

impl Default for ForecastPools {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_diurnal_shape_trough_and_peak() {
        let (trough, _) = DIURNAL_SHAPE
            .iter()
            .enumerate()
            .fold((0, f64::MAX), |(bi, bv), (i, v)| if *v < bv { (i, *v) } else { (bi, bv) });
        let (peak, _) = DIURNAL_SHAPE
            .iter()
            .enumerate()
            .fold((0, f64::MIN), |(bi, bv), (i, v)| if *v > bv { (i, *v) } else { (bi, bv) });
        assert_eq!(trough, 5);
        assert_eq!(peak, 13);
        assert!(DIURNAL_SHAPE.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_current_conditions_exclude_cloudy() {
        assert_eq!(
            ForecastPools::STANDARD.current_conditions,
            &[Condition::Sunny, Condition::PartlyCloudy]
        );
    }

    #[test]
    fn test_alert_pool_has_fifteen_unique_messages() {
        let alerts = ForecastPools::STANDARD.alerts;
        assert_eq!(alerts.len(), 15);
        let messages: HashSet<&str> = alerts.iter().map(|a| a.message).collect();
        assert_eq!(messages.len(), 15);
    }

    #[test]
    fn test_every_condition_has_descriptions() {
        let pools = ForecastPools::default();
        for condition in [Condition::Sunny, Condition::PartlyCloudy, Condition::Cloudy] {
            assert!(!pools.descriptions.for_condition(condition).is_empty());
        }
    }
}
