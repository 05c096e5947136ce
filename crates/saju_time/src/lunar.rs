//! Lunar calendar dates and the seam to an external lunar-solar converter.
//!
//! The engine never converts lunar dates itself. Callers plug in whatever
//! table or service they use through [`LunarSolarNormalizer`]; a plain
//! closure works too.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::civil::CivilDate;
use crate::error::TimeError;

/// A date on the Korean lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    /// Intercalary (leap) month.
    #[serde(default)]
    pub leap: bool,
}

impl LunarDate {
    pub const fn new(year: i32, month: u8, day: u8, leap: bool) -> Self {
        Self {
            year,
            month,
            day,
            leap,
        }
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)?;
        if self.leap {
            write!(f, " (leap)")?;
        }
        Ok(())
    }
}

/// Converts lunar dates to solar (Gregorian) dates.
pub trait LunarSolarNormalizer {
    /// Solar date for `date`, or `None` if the converter cannot resolve it.
    fn to_solar(&self, date: LunarDate) -> Option<CivilDate>;

    /// Like [`to_solar`](Self::to_solar), but reports failure as an error.
    fn resolve(&self, date: LunarDate) -> Result<CivilDate, TimeError> {
        self.to_solar(date)
            .ok_or(TimeError::UnresolvedLunarDate(date))
    }
}

impl<F> LunarSolarNormalizer for F
where
    F: Fn(LunarDate) -> Option<CivilDate>,
{
    fn to_solar(&self, date: LunarDate) -> Option<CivilDate> {
        self(date)
    }
}

/// Normalizer that resolves nothing. Useful when only solar input is expected.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLunarSupport;

impl LunarSolarNormalizer for NoLunarSupport {
    fn to_solar(&self, _date: LunarDate) -> Option<CivilDate> {
        None
    }
}
