//! Depth dimensions: values, temperament, growth, fate bond.

use saju_base::{InteractionKind, PhaseRelation, RoleGroup, phase_relation};
use saju_chart::PillarRole;

use crate::context::PairContext;
use crate::score::{Dimension, DimensionScore, ScoreSheet};

mod values_k {
    pub const BASE: i32 = 70;
    pub const COMPANION_ROLE: i32 = 10;
    pub const DAY_STEM_CLASH: i32 = -20;
    pub const YEAR_STEM_CLASH: i32 = -10;
    pub const GENERATING: i32 = 10;
}

pub fn values(ctx: &PairContext) -> DimensionScore {
    use values_k::*;
    let relation = phase_relation(
        ctx.a.chart.day_master().phase(),
        ctx.b.chart.day_master().phase(),
    );
    let generating = matches!(
        relation,
        PhaseRelation::Generates | PhaseRelation::GeneratedBy
    );
    let mut s = ScoreSheet::new(Dimension::Values, BASE);
    s.when(
        ctx.day_group_count(RoleGroup::Companion) > 0,
        COMPANION_ROLE,
        "day masters share a phase",
    )
    .when(ctx.day_stem_clash(), DAY_STEM_CLASH, "day masters clash")
    .when(
        ctx.stem_clash_at(PillarRole::Year),
        YEAR_STEM_CLASH,
        "year stems clash",
    )
    .when(generating, GENERATING, "day-master phases generate one another");
    s.finish()
}

mod temperament_k {
    pub const BASE: i32 = 65;
    pub const OPPOSITE_POLARITY: i32 = 10;
    pub const SAME_POLARITY: i32 = -5;
    pub const DOMINANT_GENERATING: i32 = 10;
    pub const DOMINANT_CONQUERING: i32 = -10;
}

pub fn temperament(ctx: &PairContext) -> DimensionScore {
    use temperament_k::*;
    let same_polarity =
        ctx.a.chart.day_master().polarity() == ctx.b.chart.day_master().polarity();
    let relation = phase_relation(ctx.a.balance.dominant(), ctx.b.balance.dominant());
    let mut s = ScoreSheet::new(Dimension::Temperament, BASE);
    s.when(!same_polarity, OPPOSITE_POLARITY, "day masters have opposite polarity")
        .when(same_polarity, SAME_POLARITY, "day masters share polarity")
        .when(
            matches!(relation, PhaseRelation::Generates | PhaseRelation::GeneratedBy),
            DOMINANT_GENERATING,
            "dominant phases feed each other",
        )
        .when(
            matches!(relation, PhaseRelation::Conquers | PhaseRelation::ConqueredBy),
            DOMINANT_CONQUERING,
            "dominant phases overpower each other",
        );
    s.finish()
}

mod growth_k {
    pub const BASE: i32 = 65;
    pub const RESOURCE_ROLE: i32 = 10;
    pub const OUTPUT_ROLE: i32 = 10;
    pub const FILLS_WEAKNESS: i32 = 10;
    pub const FILLS_WEAKNESS_CAP: i32 = 20;
}

pub fn growth(ctx: &PairContext) -> DimensionScore {
    use growth_k::*;
    let mut s = ScoreSheet::new(Dimension::Growth, BASE);
    s.when(
        ctx.day_group_count(RoleGroup::Resource) > 0,
        RESOURCE_ROLE,
        "a day master nourishes the other",
    )
    .when(
        ctx.day_group_count(RoleGroup::Output) > 0,
        OUTPUT_ROLE,
        "a day master draws out the other",
    )
    .per(
        ctx.fills_weakness(),
        FILLS_WEAKNESS,
        FILLS_WEAKNESS_CAP,
        "partner's dominant phase fills the weakest phase",
    );
    s.finish()
}

mod fate_bond_k {
    pub const BASE: i32 = 60;
    pub const DAY_STEM_COMBINE: i32 = 20;
    pub const FULL_TRIAD: i32 = 15;
    pub const PARTIAL_TRIAD: i32 = 5;
    pub const SIX_COMBINE: i32 = 10;
    pub const MANY_VOIDS: i32 = -10;
}

pub fn fate_bond(ctx: &PairContext) -> DimensionScore {
    use fate_bond_k::*;
    let (full, partial) = ctx
        .detection(InteractionKind::TriadHarmony)
        .map_or((0, 0), |d| (d.full_triads(), d.partial_triads()));
    let mut s = ScoreSheet::new(Dimension::FateBond, BASE);
    s.when(ctx.day_stem_combine().is_some(), DAY_STEM_COMBINE, "day masters combine")
        .when(full > 0, FULL_TRIAD, "full triad harmony")
        .when(full == 0 && partial > 0, PARTIAL_TRIAD, "partial triad harmony")
        .when(
            ctx.count(InteractionKind::SixCombine) > 0,
            SIX_COMBINE,
            "branch six-combine",
        )
        .when(
            ctx.count(InteractionKind::Void) >= 2,
            MANY_VOIDS,
            "several void branches",
        );
    s.finish()
}
