//! Time-bonus fortune bounds and period derivation.

use saju_chart::{PillarConfig, date_pillars, four_pillars_lenient};
use saju_score::{ALL_FORTUNE_CATEGORIES, FortuneCategory, FortuneConfig, Period, fortune, fortune_all};
use saju_time::CivilDate;

#[test]
fn period_scores_stay_within_20_and_90() {
    let cfg = FortuneConfig::default();
    let pillars = PillarConfig::default();
    for (y, m, d, h) in [(1971, 11, 17, 4), (1976, 9, 16, 9), (1988, 2, 4, 23), (2001, 7, 30, 12)] {
        let natal = four_pillars_lenient(y, m, d, h, 0, &pillars);
        let mut day = CivilDate::lenient(2024, 1, 1);
        for _ in 0..90 {
            for r in fortune_all(&natal, day, &cfg, &pillars).unwrap() {
                for p in [&r.yearly, &r.monthly, &r.daily] {
                    assert!((20..=90).contains(&p.score), "{:?} {} -> {}", r.category, day, p.score);
                }
            }
            day = day.add_days(5);
        }
    }
}

#[test]
fn periods_use_target_date_pillars() {
    let pillars = PillarConfig::default();
    let natal = four_pillars_lenient(1976, 9, 16, 9, 40, &pillars);
    let target = CivilDate::lenient(2025, 3, 10);
    let r = fortune(&natal, target, FortuneCategory::Love, &FortuneConfig::default(), &pillars).unwrap();
    let p = date_pillars(target, &pillars);
    assert_eq!(r.yearly.period, Period::Year);
    assert_eq!(r.yearly.term, p.year);
    assert_eq!(r.monthly.term, p.month);
    assert_eq!(r.daily.term, p.day);
}

#[test]
fn custom_bounds_are_honored() {
    let pillars = PillarConfig::default();
    let natal = four_pillars_lenient(1971, 11, 17, 4, 0, &pillars);
    let cfg = FortuneConfig {
        min_score: 50,
        max_score: 60,
        carry_over: 0.0,
    };
    let target = CivilDate::lenient(2024, 6, 1);
    for r in fortune_all(&natal, target, &cfg, &pillars).unwrap() {
        assert_eq!(r.monthly.carried, 0);
        assert_eq!(r.daily.carried, 0);
        assert!((50..=60).contains(&r.daily.score));
    }
}

#[test]
fn every_category_is_reported_once() {
    let pillars = PillarConfig::default();
    let natal = four_pillars_lenient(1971, 11, 17, 4, 0, &pillars);
    let all = fortune_all(&natal, CivilDate::lenient(2024, 2, 10), &FortuneConfig::default(), &pillars).unwrap();
    let cats: Vec<FortuneCategory> = all.iter().map(|r| r.category).collect();
    assert_eq!(cats, ALL_FORTUNE_CATEGORIES.to_vec());
}
