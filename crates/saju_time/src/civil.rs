//! Civil (wall-clock) dates with lenient normalization.
//!
//! `CivilDate` and `CivilDateTime` are always valid once constructed: every
//! constructor rolls out-of-range fields over into their neighbours (month 13
//! becomes January of the next year, day 0 the last day of the previous month,
//! hour 24 midnight of the next day, negative values borrow). Chart
//! construction therefore never fails on malformed calendar input.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::{calendar_to_jdn, days_in_month, jdn_to_calendar};

const MINUTES_PER_DAY: i64 = 1440;

/// Day offsets beyond this magnitude are clamped before normalization.
const MAX_DAY_SPAN: i64 = 1_000_000_000;

/// A valid proleptic Gregorian calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "RawDate", from = "RawDate")]
pub struct CivilDate {
    year: i32,
    month: u8,
    day: u8,
}

/// Serde shape of a date; deserialized values are normalized on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawDate {
    year: i64,
    month: i64,
    day: i64,
}

impl From<CivilDate> for RawDate {
    fn from(d: CivilDate) -> Self {
        Self {
            year: d.year as i64,
            month: d.month as i64,
            day: d.day as i64,
        }
    }
}

impl From<RawDate> for CivilDate {
    fn from(r: RawDate) -> Self {
        CivilDate::lenient(r.year, r.month, r.day)
    }
}

impl CivilDate {
    /// Build a date, rolling any out-of-range month or day over.
    pub fn lenient(year: i64, month: i64, day: i64) -> Self {
        let month0 = month.saturating_sub(1);
        let year = year
            .saturating_add(month0.div_euclid(12))
            .clamp(i32::MIN as i64, i32::MAX as i64);
        let month = (month0.rem_euclid(12) + 1) as u32;
        let day = day.clamp(-MAX_DAY_SPAN, MAX_DAY_SPAN);
        Self::from_jdn(calendar_to_jdn(year, month, day))
    }

    /// Build a date only if every field is already in range.
    pub fn checked(year: i32, month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year as i64, month) {
            return None;
        }
        Some(Self {
            year,
            month: month as u8,
            day: day as u8,
        })
    }

    /// Date for a Julian Day Number. Years beyond the `i32` range saturate.
    pub fn from_jdn(jdn: i64) -> Self {
        let (year, month, day) = jdn_to_calendar(jdn);
        Self {
            year: year.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            month: month as u8,
            day: day as u8,
        }
    }

    /// Julian Day Number of this date.
    pub fn jdn(self) -> i64 {
        calendar_to_jdn(self.year as i64, self.month as u32, self.day as i64)
    }

    /// Signed whole days from `self` to `other`.
    pub fn days_until(self, other: CivilDate) -> i64 {
        other.jdn() - self.jdn()
    }

    /// The date `days` days after (or before, if negative) this one.
    pub fn add_days(self, days: i64) -> Self {
        Self::from_jdn(self.jdn().saturating_add(days))
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month as u32
    }

    pub const fn day(self) -> u32 {
        self.day as u32
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -(self.year as i64), self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

/// A valid civil date plus hour and minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "RawDateTime", from = "RawDateTime")]
pub struct CivilDateTime {
    date: CivilDate,
    hour: u8,
    minute: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawDateTime {
    year: i64,
    month: i64,
    day: i64,
    #[serde(default)]
    hour: i64,
    #[serde(default)]
    minute: i64,
}

impl From<CivilDateTime> for RawDateTime {
    fn from(dt: CivilDateTime) -> Self {
        Self {
            year: dt.date.year as i64,
            month: dt.date.month as i64,
            day: dt.date.day as i64,
            hour: dt.hour as i64,
            minute: dt.minute as i64,
        }
    }
}

impl From<RawDateTime> for CivilDateTime {
    fn from(r: RawDateTime) -> Self {
        CivilDateTime::lenient(r.year, r.month, r.day, r.hour, r.minute)
    }
}

impl CivilDateTime {
    /// Build a date-time, rolling every out-of-range field over.
    pub fn lenient(year: i64, month: i64, day: i64, hour: i64, minute: i64) -> Self {
        let total_minutes = hour.saturating_mul(60).saturating_add(minute);
        let day_carry = total_minutes.div_euclid(MINUTES_PER_DAY);
        let minute_of_day = total_minutes.rem_euclid(MINUTES_PER_DAY);
        let date = CivilDate::lenient(year, month, day.saturating_add(day_carry));
        Self {
            date,
            hour: (minute_of_day / 60) as u8,
            minute: (minute_of_day % 60) as u8,
        }
    }

    /// Build a date-time from a fractional hour (e.g. 23.9 = 23:54).
    ///
    /// Non-finite hours are treated as midnight.
    pub fn with_fractional_hour(year: i64, month: i64, day: i64, hour: f64) -> Self {
        let minutes = if hour.is_finite() {
            (hour * 60.0).floor() as i64
        } else {
            0
        };
        Self::lenient(year, month, day, 0, minutes)
    }

    /// Pair an already valid date with a wall-clock time.
    pub fn at(date: CivilDate, hour: i64, minute: i64) -> Self {
        Self::lenient(
            date.year as i64,
            date.month as i64,
            date.day as i64,
            hour,
            minute,
        )
    }

    /// Whether the given raw fields would survive normalization unchanged.
    pub fn is_canonical(year: i64, month: i64, day: i64, hour: i64, minute: i64) -> bool {
        (0..24).contains(&hour)
            && (0..60).contains(&minute)
            && i32::try_from(year).is_ok_and(|y| {
                u32::try_from(month)
                    .ok()
                    .zip(u32::try_from(day).ok())
                    .is_some_and(|(m, d)| CivilDate::checked(y, m, d).is_some())
            })
    }

    pub const fn date(self) -> CivilDate {
        self.date
    }

    pub const fn hour(self) -> u32 {
        self.hour as u32
    }

    pub const fn minute(self) -> u32 {
        self.minute as u32
    }

    /// Minutes elapsed since local midnight (0..1440).
    pub const fn minute_of_day(self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}T{:02}:{:02}", self.date, self.hour, self.minute)
    }
}

fn parse_field(s: &str, input: &str) -> Result<i64, TimeError> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| TimeError::Parse(format!("invalid number '{s}' in '{input}'")))
}

fn parse_date_fields(s: &str, input: &str) -> Result<(i64, i64, i64), TimeError> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let parts: Vec<&str> = body.split('-').collect();
    if parts.len() != 3 {
        return Err(TimeError::Parse(format!(
            "expected YYYY-MM-DD, got '{input}'"
        )));
    }
    let year = parse_field(parts[0], input)?;
    let month = parse_field(parts[1], input)?;
    let day = parse_field(parts[2], input)?;
    Ok((if negative { -year } else { year }, month, day))
}

impl FromStr for CivilDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`. Numeric but out-of-range fields are rolled over.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (y, m, d) = parse_date_fields(s.trim(), s)?;
        Ok(CivilDate::lenient(y, m, d))
    }
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD`, `YYYY-MM-DDThh:mm` or `YYYY-MM-DD hh:mm[:ss]`.
    ///
    /// Seconds are accepted and ignored. A bare date means midnight.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('Z');
        let (date_part, time_part) = match trimmed.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (trimmed, None),
        };
        let (y, m, d) = parse_date_fields(date_part, s)?;
        let (hour, minute) = match time_part {
            Some(t) => {
                let mut fields = t.split(':');
                let hour = parse_field(fields.next().unwrap_or(""), s)?;
                let minute = match fields.next() {
                    Some(mf) => parse_field(mf, s)?,
                    None => 0,
                };
                (hour, minute)
            }
            None => (0, 0),
        };
        Ok(CivilDateTime::lenient(y, m, d, hour, minute))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_untouched() {
        let dt = CivilDateTime::lenient(1971, 11, 17, 4, 0);
        assert_eq!(dt.date(), CivilDate::checked(1971, 11, 17).unwrap());
        assert_eq!((dt.hour(), dt.minute()), (4, 0));
    }

    #[test]
    fn month_thirteen_rolls_into_next_year() {
        let d = CivilDate::lenient(2023, 13, 5);
        assert_eq!((d.year(), d.month(), d.day()), (2024, 1, 5));
    }

    #[test]
    fn month_zero_rolls_back() {
        let d = CivilDate::lenient(2024, 0, 10);
        assert_eq!((d.year(), d.month(), d.day()), (2023, 12, 10));
    }

    #[test]
    fn day_zero_is_last_of_previous_month() {
        let d = CivilDate::lenient(2024, 3, 0);
        assert_eq!((d.year(), d.month(), d.day()), (2024, 2, 29));
    }

    #[test]
    fn hour_24_is_next_midnight() {
        let dt = CivilDateTime::lenient(2024, 12, 31, 24, 0);
        assert_eq!(dt.date(), CivilDate::checked(2025, 1, 1).unwrap());
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn negative_hour_borrows_a_day() {
        let dt = CivilDateTime::lenient(2024, 1, 1, -1, 30);
        assert_eq!(dt.date(), CivilDate::checked(2023, 12, 31).unwrap());
        assert_eq!((dt.hour(), dt.minute()), (23, 30));
    }

    #[test]
    fn fractional_hour() {
        let dt = CivilDateTime::with_fractional_hour(2024, 5, 5, 23.9);
        assert_eq!((dt.hour(), dt.minute()), (23, 54));
        let nan = CivilDateTime::with_fractional_hour(2024, 5, 5, f64::NAN);
        assert_eq!(nan.minute_of_day(), 0);
    }

    #[test]
    fn canonical_detection() {
        assert!(CivilDateTime::is_canonical(2024, 2, 29, 23, 59));
        assert!(!CivilDateTime::is_canonical(2023, 2, 29, 0, 0));
        assert!(!CivilDateTime::is_canonical(2024, 13, 1, 0, 0));
        assert!(!CivilDateTime::is_canonical(2024, 1, 1, 24, 0));
        assert!(!CivilDateTime::is_canonical(2024, 1, 1, -1, 0));
    }

    #[test]
    fn checked_rejects_invalid() {
        assert!(CivilDate::checked(2023, 2, 29).is_none());
        assert!(CivilDate::checked(2023, 0, 1).is_none());
        assert!(CivilDate::checked(2023, 1, 0).is_none());
    }

    #[test]
    fn parse_date_time_forms() {
        let a: CivilDateTime = "1976-09-16T09:40".parse().unwrap();
        let b: CivilDateTime = "1976-09-16 09:40:30".parse().unwrap();
        assert_eq!(a, b);
        let c: CivilDateTime = "1976-09-16".parse().unwrap();
        assert_eq!(c.minute_of_day(), 0);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("not-a-date".parse::<CivilDateTime>().is_err());
        assert!("2024/01/01".parse::<CivilDate>().is_err());
        assert!("2024-01-01Txx:00".parse::<CivilDateTime>().is_err());
    }

    #[test]
    fn parse_negative_year() {
        let d: CivilDate = "-0044-03-15".parse().unwrap();
        assert_eq!(d.year(), -44);
        assert_eq!(d.to_string(), "-0044-03-15");
    }

    #[test]
    fn add_days_crosses_year() {
        let d = CivilDate::checked(2023, 12, 31).unwrap().add_days(1);
        assert_eq!(d, CivilDate::checked(2024, 1, 1).unwrap());
    }

    #[test]
    fn serde_normalizes_on_read() {
        let d: CivilDate = serde_json::from_str(r#"{"year":2023,"month":13,"day":1}"#).unwrap();
        assert_eq!(d, CivilDate::checked(2024, 1, 1).unwrap());
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"year":2024,"month":1,"day":1}"#);
    }
}
