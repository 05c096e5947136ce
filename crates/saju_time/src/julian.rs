//! Julian Day Number ↔ proleptic Gregorian calendar conversions.
//!
//! Integer-only arithmetic. Day numbers are whole civil days, so two
//! timestamps on the same calendar date always share one day number.
//!
//! Algorithm: Hinnant's `days_from_civil` / `civil_from_days`, shifted to
//! the Julian Day Number epoch. Valid for every year representable in `i64`
//! arithmetic without overflow (well beyond ±1,000,000 years).

/// Julian Day Number of 1970-01-01.
pub const UNIX_EPOCH_JDN: i64 = 2_440_588;

/// Julian Day Number of 2000-01-01.
pub const J2000_JDN: i64 = 2_451_545;

/// Days in a 400-year Gregorian era.
const DAYS_PER_ERA: i64 = 146_097;

/// Whether `year` is a Gregorian leap year.
pub const fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1-12) of `year`. Returns 0 for months outside 1-12.
pub const fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Convert a calendar date to a Julian Day Number.
///
/// `month` must be in 1-12. `day` is not range-checked: day 0 is the last day
/// of the previous month, day 32 of January is February 1st, and so on.
pub fn calendar_to_jdn(year: i64, month: u32, day: i64) -> i64 {
    debug_assert!((1..=12).contains(&month));
    let m = month as i64;
    let y = if m <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400; // [0, 399]
    let mp = if m > 2 { m - 3 } else { m + 9 }; // March-based month [0, 11]
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - 719_468 + UNIX_EPOCH_JDN
}

/// Convert a Julian Day Number back to `(year, month, day)`.
pub fn jdn_to_calendar(jdn: i64) -> (i64, u32, u32) {
    let z = jdn - UNIX_EPOCH_JDN + 719_468;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

/// Signed number of whole days from `from` to `to` (both `(year, month, day)`).
pub fn days_between(from: (i64, u32, i64), to: (i64, u32, i64)) -> i64 {
    calendar_to_jdn(to.0, to.1, to.2) - calendar_to_jdn(from.0, from.1, from.2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_jdn() {
        assert_eq!(calendar_to_jdn(2000, 1, 1), J2000_JDN);
    }

    #[test]
    fn unix_epoch_jdn() {
        assert_eq!(calendar_to_jdn(1970, 1, 1), UNIX_EPOCH_JDN);
    }

    #[test]
    fn gregorian_reform_day() {
        // 1582-10-15 (first Gregorian day) = JDN 2299161
        assert_eq!(calendar_to_jdn(1582, 10, 15), 2_299_161);
    }

    #[test]
    fn round_trip_spot_dates() {
        for &(y, m, d) in &[
            (1924, 1, 1),
            (1971, 11, 17),
            (2000, 2, 29),
            (2024, 12, 31),
            (-44, 3, 15),
            (0, 1, 1),
        ] {
            let jdn = calendar_to_jdn(y, m, d as i64);
            assert_eq!(jdn_to_calendar(jdn), (y, m, d), "round trip {y}-{m}-{d}");
        }
    }

    #[test]
    fn day_zero_is_previous_month_end() {
        assert_eq!(
            calendar_to_jdn(2024, 3, 0),
            calendar_to_jdn(2024, 2, 29),
        );
    }

    #[test]
    fn day_overflow_rolls_forward() {
        assert_eq!(calendar_to_jdn(2023, 1, 32), calendar_to_jdn(2023, 2, 1));
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn days_between_sign() {
        assert_eq!(days_between((2000, 1, 1), (2000, 1, 2)), 1);
        assert_eq!(days_between((2000, 1, 2), (2000, 1, 1)), -1);
        assert_eq!(days_between((1999, 1, 1), (2000, 1, 1)), 365);
    }
}
