//! Weather service serving generated county forecasts

use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use shared::{
    counties, find_county, validate_forecast, ForecastError, ForecastGenerator, ForecastRecord,
    LocationProfile, RainfallPoint, Region,
};

use crate::config::ForecastConfig;
use crate::error::{AppError, AppResult};

/// Weather service for county dashboards
#[derive(Clone)]
pub struct WeatherService {
    generator: ForecastGenerator,
    /// Read-only after construction; keyed by canonical county name
    cache: Option<Arc<HashMap<&'static str, ForecastRecord>>>,
}

/// County entry for the selector
#[derive(Debug, Clone, Serialize)]
pub struct CountySummary {
    pub name: &'static str,
    pub region: Region,
}

/// 30-day rainfall digest
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RainfallSummary {
    pub county: String,
    pub total_mm: Decimal,
    pub rainy_days: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wettest_day: Option<RainfallPoint>,
}

impl WeatherService {
    /// Create a service that generates every forecast on request
    pub fn on_demand() -> Self {
        Self {
            generator: ForecastGenerator::standard(),
            cache: None,
        }
    }

    /// Create a service with every county generated and validated up front
    pub fn precomputed() -> AppResult<Self> {
        let generator = ForecastGenerator::standard();
        let mut cache = HashMap::with_capacity(counties().len());

        for county in counties() {
            let record = generator.generate(county);
            let range = generator.regions().range_for(county.region);
            validate_forecast(&record, range).map_err(|reason| {
                AppError::Internal(format!(
                    "generated forecast for {} is invalid: {}",
                    county.name, reason
                ))
            })?;
            tracing::debug!(
                county = county.name,
                rainy_days = record.rainy_days(),
                "Forecast precomputed"
            );
            cache.insert(county.name, record);
        }

        tracing::info!("Precomputed forecasts for {} counties", cache.len());

        Ok(Self {
            generator,
            cache: Some(Arc::new(cache)),
        })
    }

    pub fn from_config(config: &ForecastConfig) -> AppResult<Self> {
        if config.precompute {
            Self::precomputed()
        } else {
            Ok(Self::on_demand())
        }
    }

    /// Number of cached records (0 when generating on demand)
    pub fn cached_count(&self) -> usize {
        self.cache.as_ref().map(|c| c.len()).unwrap_or(0)
    }

    /// List every county in selector order
    pub fn list_counties(&self) -> Vec<CountySummary> {
        counties()
            .iter()
            .map(|c| CountySummary {
                name: c.name,
                region: c.region,
            })
            .collect()
    }

    fn resolve(&self, name: &str) -> AppResult<&'static LocationProfile> {
        find_county(name).ok_or_else(|| ForecastError::NotFound(name.to_string()).into())
    }

    /// Get the full forecast for a county (case-insensitive)
    pub fn get_forecast(&self, name: &str) -> AppResult<ForecastRecord> {
        let county = self.resolve(name)?;

        if let Some(record) = self.cache.as_ref().and_then(|c| c.get(county.name)) {
            return Ok(record.clone());
        }

        tracing::debug!(county = county.name, "Generating forecast on demand");
        Ok(self.generator.generate(county))
    }

    /// Get the rainfall digest for a county
    pub fn get_rainfall_summary(&self, name: &str) -> AppResult<RainfallSummary> {
        let record = self.get_forecast(name)?;
        Ok(RainfallSummary {
            total_mm: record.rainfall_total_mm(),
            rainy_days: record.rainy_days(),
            wettest_day: record.wettest_day().cloned(),
            county: record.county,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precomputed_matches_on_demand() {
        let cached = WeatherService::precomputed().unwrap();
        let fresh = WeatherService::on_demand();
        assert_eq!(cached.cached_count(), 15);
        assert_eq!(fresh.cached_count(), 0);
        for county in counties() {
            assert_eq!(
                cached.get_forecast(county.name).unwrap(),
                fresh.get_forecast(county.name).unwrap()
            );
        }
    }

    #[test]
    fn test_cache_lookup_is_case_insensitive() {
        let service = WeatherService::precomputed().unwrap();
        let record = service.get_forecast("montserrado").unwrap();
        assert_eq!(record.county, "Montserrado");
    }

    #[test]
    fn test_unknown_county_is_not_found() {
        let service = WeatherService::on_demand();
        assert!(matches!(
            service.get_forecast("Atlantis"),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_rainfall_summary_agrees_with_record() {
        let service = WeatherService::on_demand();
        let record = service.get_forecast("Lofa").unwrap();
        let summary = service.get_rainfall_summary("LOFA").unwrap();
        assert_eq!(summary.county, "Lofa");
        assert_eq!(summary.rainy_days, record.rainy_days());
        assert_eq!(summary.total_mm, record.rainfall_total_mm());
        assert!(summary.rainy_days <= 5);
    }

    #[test]
    fn test_from_config_respects_precompute_flag() {
        let lazy = WeatherService::from_config(&ForecastConfig { precompute: false }).unwrap();
        assert_eq!(lazy.cached_count(), 0);
        let eager = WeatherService::from_config(&ForecastConfig { precompute: true }).unwrap();
        assert_eq!(eager.cached_count(), 15);
    }
}
