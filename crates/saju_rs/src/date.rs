use std::fmt::{Display, Formatter};
use std::str::FromStr;

use saju_time::{CivilDate, CivilDateTime};

use crate::error::SajuError;

/// A local civil date-time as entered by a caller.
///
/// Fields are kept as given; out-of-range values roll over when the date is
/// charted. Parse from `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` or `YYYY-MM-DD hh:mm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SajuDate {
    pub year: i64,
    pub month: i64,
    pub day: i64,
    pub hour: i64,
    pub minute: i64,
}

impl SajuDate {
    pub const fn new(year: i64, month: i64, day: i64, hour: i64, minute: i64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// Midnight of a calendar date.
    pub const fn date(year: i64, month: i64, day: i64) -> Self {
        Self::new(year, month, day, 0, 0)
    }

    pub fn to_civil(self) -> CivilDateTime {
        CivilDateTime::lenient(self.year, self.month, self.day, self.hour, self.minute)
    }

    pub fn civil_date(self) -> CivilDate {
        self.to_civil().date()
    }
}

impl From<CivilDateTime> for SajuDate {
    fn from(dt: CivilDateTime) -> Self {
        let d = dt.date();
        Self::new(
            i64::from(d.year()),
            i64::from(d.month()),
            i64::from(d.day()),
            i64::from(dt.hour()),
            i64::from(dt.minute()),
        )
    }
}

impl FromStr for SajuDate {
    type Err = SajuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<CivilDateTime>()?.into())
    }
}

impl Display for SajuDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}
