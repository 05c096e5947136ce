//! Integration tests for the convenience layer.

use std::sync::Once;

use saju_rs::*;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        init(SajuConfig::default()).expect("config init");
    });
}

fn date(s: &str) -> SajuDate {
    s.parse().unwrap()
}

#[test]
fn is_initialized_after_init() {
    ensure_init();
    assert!(is_initialized());
    assert_eq!(config(), SajuConfig::default());
}

#[test]
fn second_init_is_rejected() {
    ensure_init();
    assert_eq!(init(SajuConfig::default()), Err(SajuError::AlreadyInitialized));
}

#[test]
fn chart_from_text() {
    ensure_init();
    let c = chart(date("1971-11-17 04:00"));
    assert_eq!(c.to_string(), "辛亥 己亥 丙午 庚寅");
    assert_eq!(c.day_master(), Stem::Bing);
}

#[test]
fn balance_sums_to_100() {
    ensure_init();
    let b = phase_balance(date("1976-09-16 09:40"));
    assert_eq!(b.weights().iter().map(|&w| u32::from(w)).sum::<u32>(), 100);
}

#[test]
fn compatibility_is_complete_with_genders() {
    ensure_init();
    let full = compatibility(
        date("1971-11-17 04:00"),
        Some(Gender::Male),
        date("1976-09-16 09:40"),
        Some(Gender::Female),
    );
    assert_eq!(full.dimensions().count(), 20);
    assert_eq!(day_master_relation(date("1971-11-17 04:00"), date("1976-09-16 09:40")), PhaseRelation::Conquers);
}

#[test]
fn cross_interactions_find_clashes() {
    ensure_init();
    let found = interactions(date("1971-11-17 04:00"), date("1976-09-16 09:40"));
    let clash = found
        .iter()
        .find(|d| d.kind() == InteractionKind::Clash)
        .unwrap();
    assert_eq!(clash.count(), 2);
}

#[test]
fn fortune_scores_in_range() {
    ensure_init();
    let r = fortune(date("1971-11-17 04:00"), date("2024-06-15"), FortuneCategory::Overall).unwrap();
    for p in [&r.yearly, &r.monthly, &r.daily] {
        assert!((20..=90).contains(&p.score));
    }
    assert_eq!(fortune_all(date("1971-11-17 04:00"), date("2024-06-15")).unwrap().len(), 6);
}

#[test]
fn natal_without_time_fails() {
    ensure_init();
    let mut record = NatalRecord::solar(CivilDateTime::lenient(1971, 11, 17, 4, 0), None);
    record.birth_time = None;
    assert!(matches!(natal(&record, &NoLunarSupport), Err(SajuError::Chart(_))));
}

#[test]
fn ranking_orders_candidates() {
    ensure_init();
    let candidates = vec![
        ("b", date("1976-09-16 09:40"), Some(Gender::Female)),
        ("c", date("1985-03-02 14:10"), Some(Gender::Female)),
        ("d", date("1990-12-25 23:30"), Some(Gender::Female)),
    ];
    let ranked = rank(date("1971-11-17 04:00"), Some(Gender::Male), &candidates);
    assert_eq!(ranked.len(), 3);
    assert!(ranked.windows(2).all(|w| w[0].overall() >= w[1].overall()));
}
