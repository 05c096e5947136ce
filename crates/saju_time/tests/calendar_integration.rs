//! Integration tests for lenient calendar normalization.

use saju_time::{CivilDate, CivilDateTime, J2000_JDN, LunarDate, LunarSolarNormalizer};

#[test]
fn j2000_date_matches_constant() {
    assert_eq!(CivilDate::lenient(2000, 1, 1).jdn(), J2000_JDN);
}

#[test]
fn consecutive_days_differ_by_one() {
    let mut d = CivilDate::lenient(1899, 12, 25);
    for _ in 0..800 {
        let next = d.add_days(1);
        assert_eq!(d.days_until(next), 1);
        assert!(next > d);
        d = next;
    }
}

#[test]
fn every_field_overflow_normalizes() {
    // 2023-14-32 = 2024-02-32 = 2024-03-03; 25:61 carries one day and leaves 02:01
    let dt = CivilDateTime::lenient(2023, 14, 32, 25, 61);
    assert_eq!(dt.to_string(), "2024-03-04T02:01");
}

#[test]
fn extreme_inputs_do_not_panic() {
    let _ = CivilDateTime::lenient(i64::MAX, i64::MAX, i64::MAX, i64::MAX, i64::MAX);
    let _ = CivilDateTime::lenient(i64::MIN, i64::MIN, i64::MIN, i64::MIN, i64::MIN);
    let _ = CivilDateTime::with_fractional_hour(2024, 1, 1, f64::INFINITY);
}

#[test]
fn display_parse_round_trip() {
    let dt = CivilDateTime::lenient(1976, 9, 16, 9, 40);
    let back: CivilDateTime = dt.to_string().parse().unwrap();
    assert_eq!(back, dt);
}

#[test]
fn lunar_seam_accepts_closures() {
    let offset_table = |d: LunarDate| Some(CivilDate::lenient(d.year as i64, d.month as i64 + 1, d.day as i64));
    let solar = offset_table.resolve(LunarDate::new(2024, 1, 10, false)).unwrap();
    assert_eq!(solar, CivilDate::lenient(2024, 2, 10));
}
