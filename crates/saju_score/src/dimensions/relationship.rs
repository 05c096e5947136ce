//! Relationship dimensions: attraction, communication, trust, conflict
//! resolution, intimacy, emotional support, longevity.

use saju_base::{InteractionKind, Phase, RoleGroup, TenRole};
use saju_chart::PillarRole;

use crate::context::PairContext;
use crate::score::{Dimension, DimensionScore, ScoreSheet};

mod attraction_k {
    pub const BASE: i32 = 65;
    pub const DAY_STEM_COMBINE: i32 = 20;
    pub const DAY_BRANCH_COMBINE: i32 = 10;
    pub const WEALTH_OFFICER_ROLE: i32 = 10;
    pub const DAY_STEM_CLASH: i32 = -15;
    pub const DAY_BRANCH_CLASH: i32 = -10;
    pub const NO_FIRE: i32 = -5;
}

pub fn attraction(ctx: &PairContext) -> DimensionScore {
    use attraction_k::*;
    let wealth_officer =
        ctx.day_group_count(RoleGroup::Wealth) + ctx.day_group_count(RoleGroup::Officer);
    let mut s = ScoreSheet::new(Dimension::Attraction, BASE);
    s.when(ctx.day_stem_combine().is_some(), DAY_STEM_COMBINE, "day masters combine")
        .when(
            ctx.branch_combine_at(PillarRole::Day),
            DAY_BRANCH_COMBINE,
            "day branches combine",
        )
        .per(wealth_officer, WEALTH_OFFICER_ROLE, 20, "wealth/officer pull between day masters")
        .when(ctx.day_stem_clash(), DAY_STEM_CLASH, "day masters clash")
        .when(
            ctx.branch_clash_at(PillarRole::Day),
            DAY_BRANCH_CLASH,
            "day branches clash",
        )
        .when(ctx.neither_has(Phase::Fire), NO_FIRE, "no fire in either chart");
    s.finish()
}

mod communication_k {
    pub const BASE: i32 = 65;
    pub const OUTPUT_ROLE: i32 = 10;
    pub const SIX_COMBINE: i32 = 5;
    pub const SIX_COMBINE_CAP: i32 = 10;
    pub const HARM: i32 = -5;
    pub const HARM_CAP: i32 = 15;
    pub const SHARED_WATER: i32 = 5;
    pub const MANY_CLASHES: i32 = -10;
}

pub fn communication(ctx: &PairContext) -> DimensionScore {
    use communication_k::*;
    let mut s = ScoreSheet::new(Dimension::Communication, BASE);
    s.when(
        ctx.day_group_count(RoleGroup::Output) > 0,
        OUTPUT_ROLE,
        "one day master expresses into the other",
    )
    .per(
        ctx.count(InteractionKind::SixCombine),
        SIX_COMBINE,
        SIX_COMBINE_CAP,
        "branch six-combines",
    )
    .per(ctx.count(InteractionKind::Harm), HARM, HARM_CAP, "branch harms")
    .when(ctx.both_have(Phase::Water), SHARED_WATER, "both charts carry water")
    .when(
        ctx.count(InteractionKind::Clash) >= 2,
        MANY_CLASHES,
        "repeated branch clashes",
    );
    s.finish()
}

mod trust_k {
    pub const BASE: i32 = 70;
    pub const RESOURCE_ROLE: i32 = 10;
    pub const DESTRUCTION: i32 = -8;
    pub const DESTRUCTION_CAP: i32 = 24;
    pub const PUNISHMENT: i32 = -10;
    pub const SHARED_EARTH: i32 = 5;
    pub const PARALLEL_RIVAL: i32 = -10;
}

pub fn trust(ctx: &PairContext) -> DimensionScore {
    use trust_k::*;
    let mut s = ScoreSheet::new(Dimension::Trust, BASE);
    s.when(
        ctx.day_group_count(RoleGroup::Resource) > 0,
        RESOURCE_ROLE,
        "one day master nourishes the other",
    )
    .per(
        ctx.count(InteractionKind::Destruction),
        DESTRUCTION,
        DESTRUCTION_CAP,
        "branch destructions",
    )
    .when(
        ctx.count(InteractionKind::Punishment) > 0,
        PUNISHMENT,
        "branch punishment",
    )
    .when(ctx.both_have(Phase::Earth), SHARED_EARTH, "both charts carry earth")
    .when(
        ctx.either_day_role(TenRole::ParallelRival),
        PARALLEL_RIVAL,
        "day masters compete as parallel rivals",
    );
    s.finish()
}

mod conflict_k {
    pub const BASE: i32 = 60;
    pub const FLOOR: i32 = 20;
    pub const CLASH: i32 = -10;
    pub const CLASH_CAP: i32 = 30;
    pub const PUNISHMENT: i32 = -10;
    pub const PUNISHMENT_CAP: i32 = 20;
    pub const FULL_TRIAD: i32 = 15;
    pub const PARTIAL_TRIAD: i32 = 5;
    pub const PARTIAL_TRIAD_CAP: i32 = 10;
    pub const DAY_STEM_COMBINE: i32 = 10;
    pub const DIRECT_OFFICER: i32 = 5;
}

pub fn conflict_resolution(ctx: &PairContext) -> DimensionScore {
    use conflict_k::*;
    let (full, partial) = ctx
        .detection(InteractionKind::TriadHarmony)
        .map_or((0, 0), |d| (d.full_triads(), d.partial_triads()));
    let mut s = ScoreSheet::new(Dimension::ConflictResolution, BASE).floored(FLOOR);
    s.per(ctx.count(InteractionKind::Clash), CLASH, CLASH_CAP, "branch clashes")
        .per(
            ctx.count(InteractionKind::Punishment),
            PUNISHMENT,
            PUNISHMENT_CAP,
            "branch punishments",
        )
        .when(full > 0, FULL_TRIAD, "full triad harmony across the charts")
        .per(partial, PARTIAL_TRIAD, PARTIAL_TRIAD_CAP, "partial triad harmony")
        .when(ctx.day_stem_combine().is_some(), DAY_STEM_COMBINE, "day masters combine")
        .when(
            ctx.either_day_role(TenRole::DirectOfficer),
            DIRECT_OFFICER,
            "a direct-officer day master sets boundaries",
        );
    s.finish()
}

mod intimacy_k {
    pub const BASE: i32 = 65;
    pub const DAY_BRANCH_COMBINE: i32 = 20;
    pub const DAY_BRANCH_CLASH: i32 = -20;
    pub const DAY_BRANCH_HARM: i32 = -10;
    pub const MUTUAL_WEALTH_OFFICER: i32 = 10;
    pub const ABUNDANT_WATER: i32 = 5;
}

pub fn intimacy(ctx: &PairContext) -> DimensionScore {
    use intimacy_k::*;
    let mutual = ctx.day_group_count(RoleGroup::Wealth) == 1
        && ctx.day_group_count(RoleGroup::Officer) == 1;
    let mut s = ScoreSheet::new(Dimension::Intimacy, BASE);
    s.when(
        ctx.branch_combine_at(PillarRole::Day),
        DAY_BRANCH_COMBINE,
        "day branches combine",
    )
    .when(
        ctx.branch_clash_at(PillarRole::Day),
        DAY_BRANCH_CLASH,
        "day branches clash",
    )
    .when(
        ctx.branch_harm_at(PillarRole::Day),
        DAY_BRANCH_HARM,
        "day branches harm each other",
    )
    .when(mutual, MUTUAL_WEALTH_OFFICER, "day masters are wealth and officer to each other")
    .when(ctx.either_abundant(Phase::Water), ABUNDANT_WATER, "abundant water");
    s.finish()
}

mod support_k {
    pub const BASE: i32 = 65;
    pub const RESOURCE_OR_COMPANION: i32 = 10;
    pub const NOBLEMAN: i32 = 10;
    pub const VOID: i32 = -5;
    pub const VOID_CAP: i32 = 15;
    pub const HURTING_OFFICER: i32 = -10;
}

pub fn emotional_support(ctx: &PairContext) -> DimensionScore {
    use support_k::*;
    let supportive = ctx.day_group_count(RoleGroup::Resource) > 0
        || ctx.day_group_count(RoleGroup::Companion) > 0;
    let mut s = ScoreSheet::new(Dimension::EmotionalSupport, BASE);
    s.when(supportive, RESOURCE_OR_COMPANION, "day masters support each other")
        .when(
            ctx.count(InteractionKind::Nobleman) > 0,
            NOBLEMAN,
            "nobleman found in the partner's chart",
        )
        .per(ctx.count(InteractionKind::Void), VOID, VOID_CAP, "void branches")
        .when(
            ctx.either_day_role(TenRole::HurtingOfficer),
            HURTING_OFFICER,
            "hurting-officer day relation",
        );
    s.finish()
}

mod longevity_k {
    pub const BASE: i32 = 70;
    pub const FLOOR: i32 = 20;
    pub const FULL_TRIAD: i32 = 15;
    pub const MANY_COMBINES: i32 = 10;
    pub const CLASH: i32 = -10;
    pub const HEAVY_CLASH: i32 = -10;
    pub const PUNISH_DESTROY: i32 = -15;
    pub const DAY_STEM_COMBINE: i32 = 10;
    pub const SEVEN_KILLINGS: i32 = -10;
}

pub fn longevity(ctx: &PairContext) -> DimensionScore {
    use longevity_k::*;
    let clashes = ctx.count(InteractionKind::Clash);
    let full = ctx
        .detection(InteractionKind::TriadHarmony)
        .map_or(0, |d| d.full_triads());
    let wear = ctx.count(InteractionKind::Punishment) + ctx.count(InteractionKind::Destruction);
    let mut s = ScoreSheet::new(Dimension::Longevity, BASE).floored(FLOOR);
    s.when(full > 0, FULL_TRIAD, "full triad harmony")
        .when(
            ctx.count(InteractionKind::SixCombine) >= 2,
            MANY_COMBINES,
            "several branch six-combines",
        )
        .when(clashes >= 1, CLASH, "branch clash")
        .when(clashes >= 3, HEAVY_CLASH, "three or more branch clashes")
        .when(wear >= 2, PUNISH_DESTROY, "punishments and destructions accumulate")
        .when(ctx.day_stem_combine().is_some(), DAY_STEM_COMBINE, "day masters combine")
        .when(
            ctx.either_day_role(TenRole::SevenKillings),
            SEVEN_KILLINGS,
            "seven-killings day relation",
        );
    s.finish()
}
