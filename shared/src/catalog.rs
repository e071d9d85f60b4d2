//! Fixed county catalog and forecast lookup

use crate::error::{ForecastError, ForecastResult};
use crate::generator::ForecastGenerator;
use crate::models::{ForecastRecord, LocationProfile};
use crate::types::Region;

/// Liberia's 15 counties in selector order
pub const COUNTIES: &[LocationProfile] = &[
    LocationProfile::new("Bomi", Region::Coastal),
    LocationProfile::new("Bong", Region::Central),
    LocationProfile::new("Gbarpolu", Region::Central),
    LocationProfile::new("Grand Bassa", Region::Coastal),
    LocationProfile::new("Grand Cape Mount", Region::Coastal),
    LocationProfile::new("Grand Gedeh", Region::Interior),
    LocationProfile::new("Grand Kru", Region::Coastal),
    LocationProfile::new("Lofa", Region::Interior),
    LocationProfile::new("Margibi", Region::Coastal),
    LocationProfile::new("Maryland", Region::Coastal),
    LocationProfile::new("Montserrado", Region::Coastal),
    LocationProfile::new("Nimba", Region::Central),
    LocationProfile::new("River Cess", Region::Coastal),
    LocationProfile::new("River Gee", Region::Interior),
    LocationProfile::new("Sinoe", Region::Coastal),
];

pub fn counties() -> &'static [LocationProfile] {
    COUNTIES
}

/// Case-insensitive exact match against the catalog
pub fn find_county(name: &str) -> Option<&'static LocationProfile> {
    COUNTIES.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Forecast for a county display name using the built-in tables
pub fn forecast_for(name: &str) -> ForecastResult<ForecastRecord> {
    forecast_with(&ForecastGenerator::standard(), name)
}

pub fn forecast_with(generator: &ForecastGenerator, name: &str) -> ForecastResult<ForecastRecord> {
    find_county(name)
        .map(|profile| generator.generate(profile))
        .ok_or_else(|| ForecastError::NotFound(name.to_string()))
}

/// Every county's forecast, in catalog order
pub fn forecast_all() -> Vec<ForecastRecord> {
    let generator = ForecastGenerator::standard();
    COUNTIES.iter().map(|c| generator.generate(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_fifteen_unique_counties() {
        assert_eq!(counties().len(), 15);
        let names: HashSet<String> = counties().iter().map(|c| c.name.to_lowercase()).collect();
        assert_eq!(names.len(), 15);
    }

    #[test]
    fn test_lookup_ignores_case() {
        let expected = forecast_for("Bong").unwrap();
        assert_eq!(forecast_for("bong").unwrap(), expected);
        assert_eq!(forecast_for("BONG").unwrap(), expected);
        assert_eq!(forecast_for("bOnG").unwrap().county, "Bong");
    }

    #[test]
    fn test_unknown_county_is_not_found() {
        assert_eq!(
            forecast_for("Atlantis"),
            Err(ForecastError::NotFound("Atlantis".to_string()))
        );
    }

    #[test]
    fn test_no_partial_or_padded_matches() {
        assert!(find_county("Grand").is_none());
        assert!(find_county(" Bong").is_none());
        assert!(find_county("Bong ").is_none());
        assert!(find_county("").is_none());
    }

    #[test]
    fn test_regions_of_scenario_counties() {
        assert_eq!(find_county("Lofa").unwrap().region, Region::Interior);
        assert_eq!(find_county("Montserrado").unwrap().region, Region::Coastal);
    }

    #[test]
    fn test_forecast_all_in_catalog_order() {
        let all = forecast_all();
        assert_eq!(all.len(), COUNTIES.len());
        for (record, county) in all.iter().zip(COUNTIES) {
            assert_eq!(record.county, county.name);
        }
    }
}
