//! Calculator configuration.

use serde::{Deserialize, Serialize};

use saju_base::SolarTermTable;
use saju_time::CivilDate;

use crate::error::ChartError;

/// Year whose year pillar is jiazi (cycle index 0).
pub const YEAR_EPOCH: i32 = 1924;

/// Cycle index of the day pillar on [`PillarConfig::day_epoch`] (wuwu).
pub const DAY_EPOCH_INDEX: u8 = 54;

/// Anchors of the pillar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PillarConfig {
    /// Calendar year whose year pillar is jiazi.
    pub year_epoch: i32,
    /// Reference date for day-pillar counting.
    pub day_epoch: CivilDate,
    /// Cycle index of the day pillar on `day_epoch`.
    pub day_epoch_index: u8,
    /// Day-of-month boundaries of the solar-term months.
    pub solar_terms: SolarTermTable,
}

impl Default for PillarConfig {
    fn default() -> Self {
        Self {
            year_epoch: YEAR_EPOCH,
            day_epoch: CivilDate::lenient(2000, 1, 1),
            day_epoch_index: DAY_EPOCH_INDEX,
            solar_terms: SolarTermTable::default(),
        }
    }
}

impl PillarConfig {
    /// Default anchors with custom solar-term breakpoints.
    pub fn with_solar_terms(solar_terms: SolarTermTable) -> Self {
        Self {
            solar_terms,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.day_epoch_index >= 60 {
            return Err(ChartError::InvalidConfig(
                "day_epoch_index must be in 0..60",
            ));
        }
        if !self.solar_terms.is_valid() {
            return Err(ChartError::InvalidConfig(
                "solar-term breakpoints must be days 1..=28",
            ));
        }
        Ok(())
    }
}
