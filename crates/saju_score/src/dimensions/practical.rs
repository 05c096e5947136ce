//! Practical dimensions: finance, household, career, family, children.

use saju_base::{InteractionKind, Phase, RoleGroup, TenRole};
use saju_chart::PillarRole;

use crate::context::PairContext;
use crate::score::{Dimension, DimensionScore, ScoreSheet};

mod finance_k {
    pub const BASE: i32 = 65;
    pub const WEALTH_ROLE: i32 = 15;
    pub const PARTNER_WEALTH: i32 = 5;
    pub const PARTNER_WEALTH_CAP: i32 = 10;
    pub const PARALLEL_RIVAL: i32 = -15;
    pub const NO_METAL: i32 = -5;
}

pub fn finance(ctx: &PairContext) -> DimensionScore {
    use finance_k::*;
    let mut s = ScoreSheet::new(Dimension::Finance, BASE);
    s.when(
        ctx.day_group_count(RoleGroup::Wealth) > 0,
        WEALTH_ROLE,
        "a day master is wealth to the other",
    )
    .per(
        ctx.partner_supplies(RoleGroup::Wealth),
        PARTNER_WEALTH,
        PARTNER_WEALTH_CAP,
        "partner carries the wealth phase",
    )
    .when(
        ctx.either_day_role(TenRole::ParallelRival),
        PARALLEL_RIVAL,
        "parallel rivals compete over money",
    )
    .when(ctx.neither_has(Phase::Metal), NO_METAL, "no metal in either chart");
    s.finish()
}

mod household_k {
    pub const BASE: i32 = 70;
    pub const SHARED_EARTH: i32 = 10;
    pub const MONTH_COMBINE: i32 = 10;
    pub const MONTH_CLASH: i32 = -15;
    pub const DESTRUCTION: i32 = -10;
}

pub fn household(ctx: &PairContext) -> DimensionScore {
    use household_k::*;
    let mut s = ScoreSheet::new(Dimension::Household, BASE);
    s.when(ctx.both_have(Phase::Earth), SHARED_EARTH, "both charts carry earth")
        .when(
            ctx.branch_combine_at(PillarRole::Month),
            MONTH_COMBINE,
            "month branches combine",
        )
        .when(
            ctx.branch_clash_at(PillarRole::Month),
            MONTH_CLASH,
            "month branches clash",
        )
        .when(
            ctx.count(InteractionKind::Destruction) > 0,
            DESTRUCTION,
            "branch destruction",
        );
    s.finish()
}

mod career_k {
    pub const BASE: i32 = 65;
    pub const OFFICER_ROLE: i32 = 10;
    pub const RESOURCE_ROLE: i32 = 5;
    pub const YEAR_CLASH: i32 = -10;
    pub const NOBLEMAN: i32 = 10;
    pub const VIRTUE: i32 = 5;
}

pub fn career(ctx: &PairContext) -> DimensionScore {
    use career_k::*;
    let virtue = ctx
        .detection(InteractionKind::Nobleman)
        .map_or(0, |d| d.virtue_matches());
    let mut s = ScoreSheet::new(Dimension::Career, BASE);
    s.when(
        ctx.day_group_count(RoleGroup::Officer) > 0,
        OFFICER_ROLE,
        "a day master is officer to the other",
    )
    .when(
        ctx.day_group_count(RoleGroup::Resource) > 0,
        RESOURCE_ROLE,
        "a day master is resource to the other",
    )
    .when(
        ctx.branch_clash_at(PillarRole::Year),
        YEAR_CLASH,
        "year branches clash",
    )
    .when(
        ctx.count(InteractionKind::Nobleman) > virtue,
        NOBLEMAN,
        "nobleman branch in the partner's chart",
    )
    .when(virtue > 0, VIRTUE, "month virtue stem in the partner's chart");
    s.finish()
}

mod family_k {
    pub const BASE: i32 = 70;
    pub const YEAR_COMBINE: i32 = 10;
    pub const YEAR_CLASH: i32 = -15;
    pub const MONTH_HARM: i32 = -10;
    pub const YEAR_STEM_COMBINE: i32 = 5;
}

pub fn family(ctx: &PairContext) -> DimensionScore {
    use family_k::*;
    let mut s = ScoreSheet::new(Dimension::Family, BASE);
    s.when(
        ctx.branch_combine_at(PillarRole::Year),
        YEAR_COMBINE,
        "year branches combine",
    )
    .when(
        ctx.branch_clash_at(PillarRole::Year),
        YEAR_CLASH,
        "year branches clash",
    )
    .when(
        ctx.branch_harm_at(PillarRole::Month),
        MONTH_HARM,
        "month branches harm each other",
    )
    .when(
        ctx.stem_combine_at(PillarRole::Year),
        YEAR_STEM_COMBINE,
        "year stems combine",
    );
    s.finish()
}

mod children_k {
    pub const BASE: i32 = 65;
    pub const OUTPUT_ROLE: i32 = 10;
    pub const HOUR_COMBINE: i32 = 10;
    pub const HOUR_CLASH: i32 = -15;
    pub const PARTNER_OUTPUT: i32 = 5;
    pub const PARTNER_OUTPUT_CAP: i32 = 10;
}

pub fn children(ctx: &PairContext) -> DimensionScore {
    use children_k::*;
    let mut s = ScoreSheet::new(Dimension::Children, BASE);
    s.when(
        ctx.day_group_count(RoleGroup::Output) > 0,
        OUTPUT_ROLE,
        "a day master is output to the other",
    )
    .when(
        ctx.branch_combine_at(PillarRole::Hour),
        HOUR_COMBINE,
        "hour branches combine",
    )
    .when(
        ctx.branch_clash_at(PillarRole::Hour),
        HOUR_CLASH,
        "hour branches clash",
    )
    .per(
        ctx.partner_supplies(RoleGroup::Output),
        PARTNER_OUTPUT,
        PARTNER_OUTPUT_CAP,
        "partner carries the output phase",
    );
    s.finish()
}
