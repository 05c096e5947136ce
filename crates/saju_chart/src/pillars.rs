//! Four-pillars calculator.
//!
//! - Year: calendar year offset from the jiazi epoch year, mod 60. The year
//!   changes on January 1st, not at lichun.
//! - Month: solar-term month from fixed breakpoints; its stem comes from the
//!   year stem's five-class table. Dates before lichun use the previous
//!   year's stem.
//! - Day: days since the day epoch, mod 60, counted on Julian Day Numbers.
//! - Hour: double-hour branch; its stem comes from the day stem's table.
//!
//! All inputs are calendar-normalized first, so every call yields a chart.

use saju_base::{SexagenaryTerm, Stem, hour_branch, hour_term, month_term};
use saju_time::{CivilDate, CivilDateTime};
use tracing::debug;

use crate::chart_types::{DatePillars, FourPillarsChart};
use crate::config::PillarConfig;

/// Year pillar of a calendar year.
pub fn year_pillar(year: i32, config: &PillarConfig) -> SexagenaryTerm {
    SexagenaryTerm::wrapping(year as i64 - config.year_epoch as i64)
}

/// Month pillar of a calendar date.
pub fn month_pillar(date: CivilDate, config: &PillarConfig) -> SexagenaryTerm {
    let solar = config.solar_terms.solar_month(date.month(), date.day());
    let stem_year = if solar.previous_year {
        date.year().saturating_sub(1)
    } else {
        date.year()
    };
    month_term(year_pillar(stem_year, config).stem(), solar.offset)
}

/// Day pillar of a calendar date.
pub fn day_pillar(date: CivilDate, config: &PillarConfig) -> SexagenaryTerm {
    let days = config.day_epoch.days_until(date);
    SexagenaryTerm::wrapping(config.day_epoch_index as i64 + days)
}

/// Hour pillar for a day stem and wall-clock hour.
pub fn hour_pillar(day_stem: Stem, hour: u32) -> SexagenaryTerm {
    hour_term(day_stem, hour_branch(hour))
}

/// Year, month and day pillars of a date.
pub fn date_pillars(date: CivilDate, config: &PillarConfig) -> DatePillars {
    DatePillars {
        year: year_pillar(date.year(), config),
        month: month_pillar(date, config),
        day: day_pillar(date, config),
    }
}

/// Full chart for a normalized date-time.
pub fn four_pillars(dt: CivilDateTime, config: &PillarConfig) -> FourPillarsChart {
    let date = dt.date();
    let p = date_pillars(date, config);
    let hour = hour_pillar(p.day.stem(), dt.hour());
    let chart = FourPillarsChart::new(p.year, p.month, p.day, hour);
    debug!(input = %dt, chart = %chart, "four pillars derived");
    chart
}

/// Full chart for raw calendar fields, rolling any out-of-range field over.
pub fn four_pillars_lenient(
    year: i64,
    month: i64,
    day: i64,
    hour: i64,
    minute: i64,
    config: &PillarConfig,
) -> FourPillarsChart {
    let dt = CivilDateTime::lenient(year, month, day, hour, minute);
    if !CivilDateTime::is_canonical(year, month, day, hour, minute) {
        debug!(
            year,
            month,
            day,
            hour,
            minute,
            normalized = %dt,
            "calendar input normalized"
        );
    }
    four_pillars(dt, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> PillarConfig {
        PillarConfig::default()
    }

    #[test]
    fn year_epoch_is_jiazi() {
        assert_eq!(year_pillar(1924, &cfg()).index(), 0);
        assert_eq!(year_pillar(1984, &cfg()).index(), 0);
        assert_eq!(year_pillar(1923, &cfg()).name(), "guihai");
    }

    #[test]
    fn day_epoch_is_wuwu() {
        let d = CivilDate::lenient(2000, 1, 1);
        assert_eq!(day_pillar(d, &cfg()).name(), "wuwu");
        assert_eq!(day_pillar(d.add_days(6), &cfg()).index(), 0);
    }

    #[test]
    fn month_before_lichun_uses_previous_year_stem() {
        // 1972-02-03: year renzi by calendar, month xinchou from the xinhai year table
        let d = CivilDate::lenient(1972, 2, 3);
        assert_eq!(year_pillar(1972, &cfg()).name(), "renzi");
        assert_eq!(month_pillar(d, &cfg()).name(), "xinchou");
        // lichun: renyin from the renzi table
        assert_eq!(month_pillar(d.add_days(1), &cfg()).name(), "renyin");
    }

    #[test]
    fn hour_pillar_zi_slots() {
        assert_eq!(hour_pillar(Stem::Jia, 0).name(), "jiazi");
        assert_eq!(hour_pillar(Stem::Jia, 23).name(), "jiazi");
        assert_eq!(hour_pillar(Stem::Jia, 1).name(), "yichou");
    }

    #[test]
    fn lenient_matches_canonical() {
        let a = four_pillars_lenient(2023, 13, 1, 0, 0, &cfg());
        let b = four_pillars(CivilDateTime::lenient(2024, 1, 1, 0, 0), &cfg());
        assert_eq!(a, b);
    }
}
