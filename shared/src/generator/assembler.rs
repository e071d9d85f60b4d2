//! Forecast assembly
//!
//! One generation call is a single pass over a seeded [`RandomStream`]. The
//! number and order of draws below is what makes a county's forecast
//! reproducible; changing either shifts every value after it.
//!
//! | Step | Draws |
//! |---|---|
//! | current | 8: temperature, condition, humidity, wind speed, wind direction, UV, rain chance, description |
//! | hourly | 2 baselines (night, peak), then per hour: jitter, rain chance, condition |
//! | daily | per day: condition band, high, low, rain chance, description |
//! | rainfall | 1 rainy-day count, the sparse day set, then one depth per rainy day in slot order |
//! | agricultural | planting window, harvest condition, alert count, one per alert |

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::hash::hash;
use super::labels::{anchor_date, outlook_labels, rainfall_labels, HOUR_LABELS, RAINFALL_DAYS};
use super::pools::{ForecastPools, DIURNAL_SHAPE};
use super::sampling::{lerp, pick_int, pick_one, pick_unique_k, sparse_day_set, to_decimal};
use super::stream::RandomStream;
use crate::models::{
    AgriculturalAdvisory, AgriculturalAlert, CurrentConditions, DailyPoint, ForecastRecord,
    HourlyPoint, LocationProfile, RainfallPoint, RegionRange, RegionTable,
};
use crate::types::Condition;

pub const CURRENT_DRAWS: u32 = 8;
pub const HOURLY_DRAWS: u32 = 2 + 3 * HOUR_LABELS.len() as u32;
pub const DAILY_DRAWS_PER_DAY: u32 = 5;

const SUNNY_BAND: f64 = 0.45;
const PARTLY_CLOUDY_BAND: f64 = 0.80;
const JITTER_SPAN: f64 = 1.5;
const RAIN_DEPTH_MM: (f64, f64) = (2.0, 25.0);

/// Builds forecasts from injected region bounds and pools
#[derive(Debug, Clone, Copy)]
pub struct ForecastGenerator {
    regions: RegionTable,
    pools: ForecastPools,
    anchor: NaiveDate,
}

impl ForecastGenerator {
    pub fn new(regions: RegionTable, pools: ForecastPools) -> Self {
        Self {
            regions,
            pools,
            anchor: anchor_date(),
        }
    }

    /// Generator over the built-in tables
    pub fn standard() -> Self {
        Self::new(RegionTable::STANDARD, ForecastPools::STANDARD)
    }

    pub fn with_anchor(mut self, anchor: NaiveDate) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn regions(&self) -> &RegionTable {
        &self.regions
    }

    /// Generate the full record for one county.
    ///
    /// Seeds from the profile's canonical name, so callers must resolve
    /// free-text input through the catalog first.
    ///
    /// Panics if the region's bounds are not finite.
    pub fn generate(&self, profile: &LocationProfile) -> ForecastRecord {
        let range = self.regions.range_for(profile.region);
        assert!(
            range.is_finite(),
            "non-finite bounds for the {} region: {:?}",
            profile.region,
            range
        );
        let mut stream = RandomStream::new(hash(profile.name));

        let current = self.current(range, &mut stream);
        let hourly = self.hourly(range, &mut stream);
        let daily = self.daily(range, &mut stream);
        let rainfall_30d = self.rainfall(&mut stream);
        let agricultural = self.agricultural(&mut stream);

        ForecastRecord {
            county: profile.name.to_string(),
            region: profile.region,
            current,
            hourly,
            daily,
            rainfall_30d,
            agricultural,
        }
    }

    fn current(&self, range: &RegionRange, stream: &mut RandomStream) -> CurrentConditions {
        let temperature = lerp(range.temperature.min, range.temperature.max, stream.next_f64());
        let condition = *pick_one(self.pools.current_conditions, stream.next_f64());
        let humidity = (range.humidity.min
            + (range.humidity.max - range.humidity.min) * stream.next_f64())
        .round() as i32;
        let wind_speed = pick_int(5, 20, stream.next_f64());
        let wind_direction = pick_one(self.pools.wind_directions, stream.next_f64());
        let uv_index = match condition {
            Condition::Sunny => pick_int(8, 11, stream.next_f64()),
            _ => pick_int(6, 8, stream.next_f64()),
        };
        let rain_chance = match condition {
            Condition::Sunny => pick_int(0, 10, stream.next_f64()),
            _ => pick_int(10, 25, stream.next_f64()),
        };
        let description = pick_one(self.pools.descriptions.for_condition(condition), stream.next_f64());

        CurrentConditions {
            temperature,
            feels_like: temperature + Decimal::new(i64::from((humidity - 70).max(0)), 1),
            humidity,
            wind_speed,
            wind_direction: wind_direction.to_string(),
            uv_index,
            rain_chance,
            condition,
            description: description.to_string(),
        }
    }

    fn hourly(&self, range: &RegionRange, stream: &mut RandomStream) -> Vec<HourlyPoint> {
        let night = lerp(range.night_baseline.min, range.night_baseline.max, stream.next_f64());
        let peak = lerp(range.peak_baseline.min, range.peak_baseline.max, stream.next_f64());

        HOUR_LABELS
            .iter()
            .zip(DIURNAL_SHAPE)
            .map(|(label, shape)| {
                let jitter = stream.next_f64() * JITTER_SPAN - JITTER_SPAN / 2.0;
                let temperature = (night + (peak - night) * to_decimal(shape) + to_decimal(jitter))
                    .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
                let rain_chance = pick_int(0, 20, stream.next_f64());
                let condition = *pick_one(self.pools.hourly_conditions, stream.next_f64());
                HourlyPoint {
                    time: label.to_string(),
                    temperature,
                    rain_chance,
                    condition,
                }
            })
            .collect()
    }

    fn daily(&self, range: &RegionRange, stream: &mut RandomStream) -> Vec<DailyPoint> {
        let temp = range.temperature;
        let mid = temp.midpoint();

        outlook_labels(self.anchor)
            .into_iter()
            .map(|(day, date)| {
                let band = stream.next_f64();
                let condition = if band < SUNNY_BAND {
                    Condition::Sunny
                } else if band < PARTLY_CLOUDY_BAND {
                    Condition::PartlyCloudy
                } else {
                    Condition::Cloudy
                };
                let high = lerp(mid, temp.max, stream.next_f64());
                let low = lerp(temp.min, mid, stream.next_f64());
                let rain_chance = match condition {
                    Condition::Cloudy => pick_int(40, 70, stream.next_f64()),
                    _ => pick_int(5, 25, stream.next_f64()),
                };
                let description =
                    pick_one(self.pools.descriptions.for_condition(condition), stream.next_f64());
                DailyPoint {
                    day,
                    date,
                    high,
                    low,
                    rain_chance,
                    condition,
                    description: description.to_string(),
                }
            })
            .collect()
    }

    fn rainfall(&self, stream: &mut RandomStream) -> Vec<RainfallPoint> {
        let count = pick_int(3, 5, stream.next_f64()) as usize;
        let rainy = sparse_day_set(RAINFALL_DAYS, count, stream);

        rainfall_labels(self.anchor)
            .into_iter()
            .enumerate()
            .map(|(slot, date)| {
                let mm = if rainy.contains(&slot) {
                    lerp(RAIN_DEPTH_MM.0, RAIN_DEPTH_MM.1, stream.next_f64())
                } else {
                    Decimal::ZERO
                };
                RainfallPoint { date, mm }
            })
            .collect()
    }

    fn agricultural(&self, stream: &mut RandomStream) -> AgriculturalAdvisory {
        let planting_window = pick_one(self.pools.planting_windows, stream.next_f64());
        let harvest_condition = pick_one(self.pools.harvest_conditions, stream.next_f64());
        let k = pick_int(2, 3, stream.next_f64()) as usize;
        let alerts = pick_unique_k(self.pools.alerts, k, stream)
            .into_iter()
            .map(|a| AgriculturalAlert {
                severity: a.severity,
                message: a.message.to_string(),
            })
            .collect();

        AgriculturalAdvisory {
            planting_window: planting_window.to_string(),
            harvest_condition: harvest_condition.to_string(),
            alerts,
        }
    }
}

impl Default for ForecastGenerator {
    fn default() -> Self {
        Self::standard()
    }
}
