use saju_base::{Detection, PhaseRelation, detect_all, detect_all_within};
use saju_chart::{
    DayMasterProfile, FourPillarsChart, Gender, NatalChart, NatalRecord, PhaseBalance,
    RoleProfile, four_pillars, resolve_chart,
};
use saju_score::{
    FortuneCategory, FortuneReport, FullCompatibility, Partner, RankedCandidate,
    full_compatibility, rank_candidates,
};
use saju_time::LunarSolarNormalizer;

use crate::date::SajuDate;
use crate::error::SajuError;
use crate::global::config;

/// Four-pillars chart for a date-time.
pub fn chart(date: SajuDate) -> FourPillarsChart {
    four_pillars(date.to_civil(), &config().pillars)
}

pub fn phase_balance(date: SajuDate) -> PhaseBalance {
    PhaseBalance::from_chart(&chart(date))
}

pub fn role_profile(date: SajuDate) -> RoleProfile {
    RoleProfile::from_chart(&chart(date))
}

/// Day master strength and favorable phases.
pub fn day_master(date: SajuDate) -> DayMasterProfile {
    let c = chart(date);
    DayMasterProfile::from_balance(&c, &PhaseBalance::from_chart(&c))
}

/// Branch interactions inside one chart.
pub fn interactions_within(date: SajuDate) -> Vec<Detection> {
    detect_all_within(&chart(date).view())
}

/// Branch interactions between two charts.
pub fn interactions(a: SajuDate, b: SajuDate) -> Vec<Detection> {
    detect_all(&chart(a).view(), &chart(b).view())
}

/// Chart a natal record, normalizing lunar dates through `normalizer`.
pub fn natal<N: LunarSolarNormalizer + ?Sized>(
    record: &NatalRecord,
    normalizer: &N,
) -> Result<NatalChart, SajuError> {
    Ok(resolve_chart(record, normalizer, &config().pillars)?)
}

/// All four compatibility reports for two birth moments.
pub fn compatibility(
    a: SajuDate,
    a_gender: Option<Gender>,
    b: SajuDate,
    b_gender: Option<Gender>,
) -> FullCompatibility {
    full_compatibility(
        &Partner::new(chart(a), a_gender),
        &Partner::new(chart(b), b_gender),
    )
}

/// Rank candidates against one subject, best first.
pub fn rank<K: Clone + Send + Sync>(
    subject: SajuDate,
    subject_gender: Option<Gender>,
    candidates: &[(K, SajuDate, Option<Gender>)],
) -> Vec<RankedCandidate<K>> {
    let partners: Vec<(K, Partner)> = candidates
        .iter()
        .map(|(k, d, g)| (k.clone(), Partner::new(chart(*d), *g)))
        .collect();
    rank_candidates(&Partner::new(chart(subject), subject_gender), &partners)
}

/// Year, month and day fortune of `target` for someone born at `birth`.
pub fn fortune(
    birth: SajuDate,
    target: SajuDate,
    category: FortuneCategory,
) -> Result<FortuneReport, SajuError> {
    let cfg = config();
    Ok(saju_score::fortune(
        &chart(birth),
        target.civil_date(),
        category,
        &cfg.fortune,
        &cfg.pillars,
    )?)
}

/// Fortune for every category.
pub fn fortune_all(birth: SajuDate, target: SajuDate) -> Result<Vec<FortuneReport>, SajuError> {
    let cfg = config();
    Ok(saju_score::fortune_all(
        &chart(birth),
        target.civil_date(),
        &cfg.fortune,
        &cfg.pillars,
    )?)
}

/// How the two day masters' phases relate, a toward b.
pub fn day_master_relation(a: SajuDate, b: SajuDate) -> PhaseRelation {
    saju_base::phase_relation(
        chart(a).day_master().phase(),
        chart(b).day_master().phase(),
    )
}
