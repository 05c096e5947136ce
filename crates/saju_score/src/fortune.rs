//! Time-bonus fortune relative to a natal chart.
//!
//! The target date's year, month and day pillars are each scored against
//! the natal day master and day branch. A share of each coarser bonus
//! carries into the next finer period.

use tracing::debug;

use saju_base::{
    Phase, SexagenaryTerm, branch_clash, generates, nobleman_branches, six_combine, stem_clash,
    stem_combine, twelve_stage,
};
use saju_chart::{DayMasterProfile, FourPillarsChart, PhaseBalance, PillarConfig, date_pillars};
use saju_time::CivilDate;

use crate::error::ScoreError;
use crate::fortune_types::{
    ALL_FORTUNE_CATEGORIES, FortuneCategory, FortuneConfig, FortuneReport, Period, PeriodFortune,
};

const BASE_OFFSET: i32 = 45;
/// Numerator and denominator of the preferred-weight contribution to the base.
const BASE_WEIGHT_RATIO: (i32, i32) = (3, 5);

const STEM_PREFERRED: i32 = 15;
const BRANCH_PREFERRED: i32 = 10;
const GENERATES_DAY_MASTER: i32 = 12;
const STEM_COMBINE: i32 = 15;
const STEM_CLASH: i32 = -15;
const BRANCH_COMBINE: i32 = 20;
const BRANCH_CLASH: i32 = -20;
const VOID_DAY: i32 = -30;
const NOBLEMAN_DAY: i32 = 25;

/// Phases the category prefers for this chart, without duplicates.
pub fn preferred_phases(chart: &FourPillarsChart, balance: &PhaseBalance, category: FortuneCategory) -> Vec<Phase> {
    let own = chart.day_master().phase();
    let mut phases: Vec<Phase> = match category {
        FortuneCategory::Overall => DayMasterProfile::from_balance(chart, balance).favorable,
        _ => category
            .preferred_groups()
            .iter()
            .map(|g| g.phase_for(own))
            .collect(),
    };
    phases.sort();
    phases.dedup();
    phases
}

/// Natal baseline: 45 plus three fifths of the preferred phases' balance share.
pub fn fortune_base(balance: &PhaseBalance, preferred: &[Phase]) -> i32 {
    let weight: i32 = preferred.iter().map(|&p| i32::from(balance.weight(p))).sum();
    (BASE_OFFSET + weight * BASE_WEIGHT_RATIO.0 / BASE_WEIGHT_RATIO.1).clamp(0, 100)
}

/// Bonus of one period pillar against the natal chart, with its factors.
pub fn period_bonus(term: SexagenaryTerm, natal: &FourPillarsChart, preferred: &[Phase]) -> (i32, Vec<String>) {
    let dm = natal.day_master();
    let day_branch = natal.day().branch();
    let (stem, branch) = (term.stem(), term.branch());
    let mut total = 0;
    let mut factors = Vec::new();
    let mut add = |cond: bool, delta: i32, reason: &str| {
        if cond && delta != 0 {
            total += delta;
            factors.push(format!("{reason} ({delta:+})"));
        }
    };

    add(preferred.contains(&stem.phase()), STEM_PREFERRED, "stem in a preferred phase");
    add(
        preferred.contains(&branch.phase()),
        BRANCH_PREFERRED,
        "branch in a preferred phase",
    );
    add(
        generates(stem.phase(), dm.phase()),
        GENERATES_DAY_MASTER,
        "stem generates the day master",
    );
    add(stem_combine(stem, dm).is_some(), STEM_COMBINE, "stem combines with the day master");
    add(stem_clash(stem, dm), STEM_CLASH, "stem clashes with the day master");
    add(
        six_combine(branch, day_branch).is_some(),
        BRANCH_COMBINE,
        "branch combines with the day branch",
    );
    add(branch_clash(branch, day_branch), BRANCH_CLASH, "branch clashes with the day branch");
    let stage = twelve_stage(dm, branch);
    add(true, stage.score(), &format!("day master in {} stage", stage.name()));
    add(
        natal.day().void_branches().contains(&branch),
        VOID_DAY,
        "branch is void for the natal day",
    );
    add(
        nobleman_branches(dm).contains(&branch),
        NOBLEMAN_DAY,
        "nobleman branch",
    );
    (total, factors)
}

fn carried(coarser_total: i32, fraction: f64) -> i32 {
    (f64::from(coarser_total) * fraction).round() as i32
}

fn period(
    period: Period,
    term: SexagenaryTerm,
    carry: i32,
    base: i32,
    natal: &FourPillarsChart,
    preferred: &[Phase],
    config: &FortuneConfig,
) -> PeriodFortune {
    let (bonus, factors) = period_bonus(term, natal, preferred);
    let score = (base + bonus + carry).clamp(i32::from(config.min_score), i32::from(config.max_score));
    PeriodFortune {
        period,
        term,
        bonus,
        carried: carry,
        score: score as u8,
        factors,
    }
}

/// Fortune for one category on `target`.
pub fn fortune(
    natal: &FourPillarsChart,
    target: CivilDate,
    category: FortuneCategory,
    config: &FortuneConfig,
    pillars: &PillarConfig,
) -> Result<FortuneReport, ScoreError> {
    config.validate()?;
    let balance = PhaseBalance::from_chart(natal);
    let preferred = preferred_phases(natal, &balance, category);
    let base = fortune_base(&balance, &preferred);
    let p = date_pillars(target, pillars);

    let yearly = period(Period::Year, p.year, 0, base, natal, &preferred, config);
    let monthly = period(
        Period::Month,
        p.month,
        carried(yearly.total_bonus(), config.carry_over),
        base,
        natal,
        &preferred,
        config,
    );
    let daily = period(
        Period::Day,
        p.day,
        carried(monthly.total_bonus(), config.carry_over),
        base,
        natal,
        &preferred,
        config,
    );
    debug!(
        natal = %natal,
        %target,
        category = category.name(),
        yearly = yearly.score,
        monthly = monthly.score,
        daily = daily.score,
        "fortune computed"
    );
    Ok(FortuneReport {
        category,
        base,
        yearly,
        monthly,
        daily,
    })
}

/// Fortune for every category on `target`.
pub fn fortune_all(
    natal: &FourPillarsChart,
    target: CivilDate,
    config: &FortuneConfig,
    pillars: &PillarConfig,
) -> Result<Vec<FortuneReport>, ScoreError> {
    ALL_FORTUNE_CATEGORIES
        .iter()
        .map(|&c| fortune(natal, target, c, config, pillars))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_chart::four_pillars;
    use saju_time::CivilDateTime;

    fn natal() -> FourPillarsChart {
        four_pillars(CivilDateTime::lenient(1971, 11, 17, 4, 0), &PillarConfig::default())
    }

    #[test]
    fn preferred_phases_for_wealth() {
        let c = natal();
        let b = PhaseBalance::from_chart(&c);
        // bing fire: wealth is metal, output is earth
        assert_eq!(
            preferred_phases(&c, &b, FortuneCategory::Wealth),
            vec![Phase::Earth, Phase::Metal]
        );
    }

    #[test]
    fn base_from_balance() {
        let c = natal();
        let b = PhaseBalance::from_chart(&c);
        // earth 14 + metal 19 = 33; 45 + 33*3/5 = 64
        assert_eq!(fortune_base(&b, &[Phase::Earth, Phase::Metal]), 64);
    }

    #[test]
    fn nobleman_day_is_flagged() {
        // 2000-01-06 is guihai; hai is a nobleman branch for bing.
        let target = CivilDate::checked(2000, 1, 6).unwrap();
        let r = fortune(
            &natal(),
            target,
            FortuneCategory::Overall,
            &FortuneConfig::default(),
            &PillarConfig::default(),
        )
        .unwrap();
        assert_eq!(r.daily.term.name(), "guihai");
        assert!(r.daily.factors.iter().any(|f| f.starts_with("nobleman branch")));
    }

    #[test]
    fn carry_over_chains_periods() {
        let target = CivilDate::checked(2024, 6, 15).unwrap();
        let cfg = FortuneConfig::default();
        let r = fortune(&natal(), target, FortuneCategory::Career, &cfg, &PillarConfig::default()).unwrap();
        assert_eq!(r.yearly.carried, 0);
        assert_eq!(r.monthly.carried, carried(r.yearly.total_bonus(), 0.3));
        assert_eq!(r.daily.carried, carried(r.monthly.total_bonus(), 0.3));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = FortuneConfig {
            carry_over: 2.0,
            ..FortuneConfig::default()
        };
        let target = CivilDate::checked(2024, 1, 1).unwrap();
        assert!(fortune(&natal(), target, FortuneCategory::Overall, &cfg, &PillarConfig::default()).is_err());
    }
}
