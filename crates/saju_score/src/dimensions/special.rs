//! Special dimensions: spouse star, nobleman support, void risk, collision risk.

use saju_base::{InteractionKind, RoleGroup, TenRole};
use saju_chart::Gender;

use crate::context::{PairContext, Side};
use crate::score::{Dimension, DimensionScore, ScoreSheet};

mod spouse_k {
    pub const BASE: i32 = 65;
    pub const PRIMARY_STAR: i32 = 20;
    pub const SECONDARY_STAR: i32 = 10;
    pub const NO_OWN_STAR: i32 = -5;
}

/// Roles that mark the spouse for a gender, primary first, and the group
/// that holds them.
const fn spouse_roles(gender: Gender) -> (TenRole, TenRole, RoleGroup) {
    match gender {
        Gender::Male => (TenRole::DirectWealth, TenRole::IndirectWealth, RoleGroup::Wealth),
        Gender::Female => (TenRole::DirectOfficer, TenRole::SevenKillings, RoleGroup::Officer),
    }
}

fn score_side(s: &mut ScoreSheet, side: &Side, gender: Gender, partner_role: TenRole) {
    use spouse_k::*;
    let (primary, secondary, group) = spouse_roles(gender);
    s.when(
        partner_role == primary,
        PRIMARY_STAR,
        "partner's day master is the primary spouse star",
    )
    .when(
        partner_role == secondary,
        SECONDARY_STAR,
        "partner's day master is the secondary spouse star",
    )
    .when(
        side.profile.group_total(group) == 0,
        NO_OWN_STAR,
        "no spouse star in the own chart",
    );
}

/// Spouse-star reading. Omitted unless both genders are known.
pub fn spouse_star(ctx: &PairContext) -> Option<DimensionScore> {
    let (ga, gb) = (ctx.a.gender?, ctx.b.gender?);
    let mut s = ScoreSheet::new(Dimension::SpouseStar, spouse_k::BASE);
    score_side(&mut s, &ctx.a, ga, ctx.day_role_ab);
    score_side(&mut s, &ctx.b, gb, ctx.day_role_ba);
    Some(s.finish())
}

mod nobleman_k {
    pub const BASE: i32 = 60;
    pub const NOBLEMAN: i32 = 10;
    pub const NOBLEMAN_CAP: i32 = 30;
    pub const VIRTUE: i32 = 5;
    pub const VIRTUE_CAP: i32 = 20;
}

pub fn nobleman_support(ctx: &PairContext) -> DimensionScore {
    use nobleman_k::*;
    let (noble, virtue) = ctx
        .detection(InteractionKind::Nobleman)
        .map_or((0, 0), |d| (d.count() - d.virtue_matches(), d.virtue_matches()));
    let mut s = ScoreSheet::new(Dimension::NoblemanSupport, BASE);
    s.per(noble, NOBLEMAN, NOBLEMAN_CAP, "nobleman branches in the partner's chart")
        .per(virtue, VIRTUE, VIRTUE_CAP, "month virtue stems in the partner's chart");
    s.finish()
}

mod void_k {
    pub const BASE: i32 = 75;
    pub const FLOOR: i32 = 20;
    pub const VOID: i32 = -10;
    pub const VOID_CAP: i32 = 30;
    pub const DAY_BRANCH_VOID: i32 = -15;
}

pub fn void_risk(ctx: &PairContext) -> DimensionScore {
    use void_k::*;
    let mut s = ScoreSheet::new(Dimension::VoidRisk, BASE).floored(FLOOR);
    s.per(ctx.count(InteractionKind::Void), VOID, VOID_CAP, "void branches")
        .when(
            ctx.day_branch_void_count() > 0,
            DAY_BRANCH_VOID,
            "a day branch falls in the partner's void",
        );
    s.finish()
}

mod collision_k {
    pub const BASE: i32 = 80;
    pub const FLOOR: i32 = 20;
    pub const CLASH: i32 = -10;
    pub const CLASH_CAP: i32 = 40;
    pub const PUNISHMENT: i32 = -8;
    pub const PUNISHMENT_CAP: i32 = 24;
    pub const HARM: i32 = -5;
    pub const HARM_CAP: i32 = 15;
    pub const DESTRUCTION: i32 = -5;
    pub const DESTRUCTION_CAP: i32 = 15;
}

pub fn collision_risk(ctx: &PairContext) -> DimensionScore {
    use collision_k::*;
    let mut s = ScoreSheet::new(Dimension::CollisionRisk, BASE).floored(FLOOR);
    s.per(ctx.count(InteractionKind::Clash), CLASH, CLASH_CAP, "branch clashes")
        .per(
            ctx.count(InteractionKind::Punishment),
            PUNISHMENT,
            PUNISHMENT_CAP,
            "branch punishments",
        )
        .per(ctx.count(InteractionKind::Harm), HARM, HARM_CAP, "branch harms")
        .per(
            ctx.count(InteractionKind::Destruction),
            DESTRUCTION,
            DESTRUCTION_CAP,
            "branch destructions",
        );
    s.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Partner;
    use saju_chart::{PillarConfig, four_pillars};
    use saju_time::CivilDateTime;

    fn partner(y: i64, m: i64, d: i64, h: i64, gender: Option<Gender>) -> Partner {
        let c = four_pillars(CivilDateTime::lenient(y, m, d, h, 0), &PillarConfig::default());
        Partner::new(c, gender)
    }

    #[test]
    fn spouse_star_needs_both_genders() {
        let a = partner(1971, 11, 17, 4, Some(Gender::Male));
        let b = partner(1976, 9, 16, 9, None);
        assert!(spouse_star(&PairContext::new(&a, &b)).is_none());
    }

    #[test]
    fn spouse_star_rewards_direct_wealth_and_officer() {
        // bing day master sees xin as direct wealth; xin sees bing as direct officer.
        let a = partner(1971, 11, 17, 4, Some(Gender::Male));
        let b = partner(1976, 9, 16, 9, Some(Gender::Female));
        let score = spouse_star(&PairContext::new(&a, &b)).unwrap();
        assert!(score.score >= 85, "{score:?}");
        assert!(score.positives.iter().any(|p| p.contains("primary")));
    }

    #[test]
    fn sample_pair_collision_counts_two_clashes() {
        let a = partner(1971, 11, 17, 4, None);
        let b = partner(1976, 9, 16, 9, None);
        let score = collision_risk(&PairContext::new(&a, &b));
        assert!(score.negatives.iter().any(|n| n.contains("branch clashes (x2)")));
        assert!(score.score <= 60);
    }

    #[test]
    fn risk_dimensions_respect_floor() {
        let a = partner(1971, 11, 17, 4, None);
        let b = partner(1976, 9, 16, 9, None);
        let ctx = PairContext::new(&a, &b);
        assert!(void_risk(&ctx).score >= 20);
        assert!(collision_risk(&ctx).score >= 20);
    }
}
