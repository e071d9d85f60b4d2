//! County and climate-region models

use serde::Serialize;

use crate::types::{Bounds, Region};

/// A county in the fixed catalog
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct LocationProfile {
    pub name: &'static str,
    pub region: Region,
}

impl LocationProfile {
    pub const fn new(name: &'static str, region: Region) -> Self {
        Self { name, region }
    }
}

/// Weather bounds for one climate region (°C and %)
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct RegionRange {
    pub temperature: Bounds,
    pub humidity: Bounds,
    /// Coolest point of the hourly curve
    pub night_baseline: Bounds,
    /// Warmest point of the hourly curve
    pub peak_baseline: Bounds,
}

impl RegionRange {
    pub fn is_finite(&self) -> bool {
        [
            self.temperature,
            self.humidity,
            self.night_baseline,
            self.peak_baseline,
        ]
        .iter()
        .all(Bounds::is_finite)
    }
}

/// Region profile table, one entry per [`Region`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionTable {
    pub coastal: RegionRange,
    pub central: RegionRange,
    pub interior: RegionRange,
}

impl RegionTable {
    /// Dry-season bounds used by the marketplace dashboards
    pub const STANDARD: RegionTable = RegionTable {
        coastal: RegionRange {
            temperature: Bounds::new(26.0, 32.0),
            humidity: Bounds::new(75.0, 90.0),
            night_baseline: Bounds::new(23.0, 25.0),
            peak_baseline: Bounds::new(30.0, 32.0),
        },
        central: RegionRange {
            temperature: Bounds::new(25.0, 33.0),
            humidity: Bounds::new(65.0, 85.0),
            night_baseline: Bounds::new(21.0, 23.0),
            peak_baseline: Bounds::new(31.0, 33.0),
        },
        interior: RegionRange {
            temperature: Bounds::new(24.0, 30.0),
            humidity: Bounds::new(60.0, 80.0),
            night_baseline: Bounds::new(19.0, 22.0),
            peak_baseline: Bounds::new(28.0, 30.0),
        },
    };

    pub fn range_for(&self, region: Region) -> &RegionRange {
        match region {
            Region::Coastal => &self.coastal,
            Region::Central => &self.central,
            Region::Interior => &self.interior,
        }
    }
}

impl Default for RegionTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
