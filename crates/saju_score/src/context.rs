//! Precomputed relational facts shared by all dimension functions.

use serde::Serialize;

use saju_base::interaction::harms;
use saju_base::{
    Branch, Detection, InteractionKind, Phase, RoleGroup, TenRole, branch_clash, detect_all,
    six_combine, stem_clash, stem_combine, ten_role,
};
use saju_chart::{
    CountBand, FourPillarsChart, Gender, NatalChart, PhaseBalance, PhaseCounts, PillarRole,
    RoleProfile,
};

/// One person entering a compatibility comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Partner {
    pub chart: FourPillarsChart,
    pub gender: Option<Gender>,
}

impl Partner {
    pub const fn new(chart: FourPillarsChart, gender: Option<Gender>) -> Self {
        Self { chart, gender }
    }
}

impl From<&NatalChart> for Partner {
    fn from(n: &NatalChart) -> Self {
        Self::new(n.chart, n.gender)
    }
}

/// Per-person facts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    pub chart: FourPillarsChart,
    pub gender: Option<Gender>,
    pub counts: PhaseCounts,
    pub balance: PhaseBalance,
    pub profile: RoleProfile,
}

impl Side {
    fn new(p: &Partner) -> Self {
        Self {
            chart: p.chart,
            gender: p.gender,
            counts: PhaseCounts::from_chart(&p.chart),
            balance: PhaseBalance::from_chart(&p.chart),
            profile: RoleProfile::from_chart(&p.chart),
        }
    }

    pub fn band(&self, phase: Phase) -> CountBand {
        self.counts.band(phase)
    }

    pub fn has(&self, phase: Phase) -> bool {
        self.counts.count(phase) > 0
    }

    /// Phase of a role group relative to this side's day master.
    pub fn group_phase(&self, group: RoleGroup) -> Phase {
        group.phase_for(self.chart.day_master().phase())
    }
}

/// Everything the dimension functions read about a pair of charts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairContext {
    pub a: Side,
    pub b: Side,
    /// Role of b's day master relative to a's day master.
    pub day_role_ab: TenRole,
    /// Role of a's day master relative to b's day master.
    pub day_role_ba: TenRole,
    /// `stem_roles[i][j]`: role of b's stem j relative to a's stem i.
    pub stem_roles: [[TenRole; 4]; 4],
    /// Cross-chart detections in detector order.
    pub detections: Vec<Detection>,
}

impl PairContext {
    pub fn new(a: &Partner, b: &Partner) -> Self {
        let sa = Side::new(a);
        let sb = Side::new(b);
        let a_stems = a.chart.stems();
        let b_stems = b.chart.stems();
        let stem_roles = a_stems.map(|x| b_stems.map(|y| ten_role(x, y)));
        Self {
            day_role_ab: ten_role(a.chart.day_master(), b.chart.day_master()),
            day_role_ba: ten_role(b.chart.day_master(), a.chart.day_master()),
            stem_roles,
            detections: detect_all(&a.chart.view(), &b.chart.view()),
            a: sa,
            b: sb,
        }
    }

    pub fn detection(&self, kind: InteractionKind) -> Option<&Detection> {
        self.detections.iter().find(|d| d.kind() == kind)
    }

    /// Number of cross-chart matches of one kind.
    pub fn count(&self, kind: InteractionKind) -> usize {
        self.detection(kind).map_or(0, |d| d.count())
    }

    /// Both day-master roles, a→b first.
    pub fn day_roles(&self) -> [TenRole; 2] {
        [self.day_role_ab, self.day_role_ba]
    }

    /// How many of the two day-master roles fall in `group` (0-2).
    pub fn day_group_count(&self, group: RoleGroup) -> usize {
        self.day_roles().iter().filter(|r| r.group() == group).count()
    }

    pub fn either_day_role(&self, role: TenRole) -> bool {
        self.day_roles().contains(&role)
    }

    /// Number of the 16 cross stem pairs whose role lies in `group`,
    /// counted from both sides.
    pub fn stem_group_count(&self, group: RoleGroup) -> usize {
        let forward = self
            .stem_roles
            .iter()
            .flatten()
            .filter(|r| r.group() == group)
            .count();
        let a_stems = self.a.chart.stems();
        let b_stems = self.b.chart.stems();
        let backward = b_stems
            .iter()
            .flat_map(|&y| a_stems.iter().map(move |&x| ten_role(y, x)))
            .filter(|r| r.group() == group)
            .count();
        forward + backward
    }

    pub fn day_stem_combine(&self) -> Option<Phase> {
        stem_combine(self.a.chart.day_master(), self.b.chart.day_master())
    }

    pub fn day_stem_clash(&self) -> bool {
        stem_clash(self.a.chart.day_master(), self.b.chart.day_master())
    }

    fn branches_at(&self, role: PillarRole) -> (Branch, Branch) {
        (
            self.a.chart.term(role).branch(),
            self.b.chart.term(role).branch(),
        )
    }

    /// The two charts' branches at `role` form a six-combine.
    pub fn branch_combine_at(&self, role: PillarRole) -> bool {
        let (x, y) = self.branches_at(role);
        six_combine(x, y).is_some()
    }

    /// The two charts' branches at `role` clash.
    pub fn branch_clash_at(&self, role: PillarRole) -> bool {
        let (x, y) = self.branches_at(role);
        branch_clash(x, y)
    }

    /// The two charts' branches at `role` harm each other.
    pub fn branch_harm_at(&self, role: PillarRole) -> bool {
        let (x, y) = self.branches_at(role);
        harms(x, y)
    }

    pub fn stem_combine_at(&self, role: PillarRole) -> bool {
        stem_combine(self.a.chart.term(role).stem(), self.b.chart.term(role).stem()).is_some()
    }

    pub fn stem_clash_at(&self, role: PillarRole) -> bool {
        stem_clash(self.a.chart.term(role).stem(), self.b.chart.term(role).stem())
    }

    /// Sides (0-2) whose day branch is void for the partner's day decade.
    pub fn day_branch_void_count(&self) -> usize {
        let a_void = self.a.chart.day().void_branches();
        let b_void = self.b.chart.day().void_branches();
        usize::from(b_void.contains(&self.a.chart.day().branch()))
            + usize::from(a_void.contains(&self.b.chart.day().branch()))
    }

    /// Sides (0-2) for which the partner has the side's `group` phase present.
    pub fn partner_supplies(&self, group: RoleGroup) -> usize {
        usize::from(self.b.has(self.a.group_phase(group)))
            + usize::from(self.a.has(self.b.group_phase(group)))
    }

    /// Sides (0-2) whose weakest phase is the partner's dominant phase.
    pub fn fills_weakness(&self) -> usize {
        usize::from(self.a.balance.weakest() == self.b.balance.dominant())
            + usize::from(self.b.balance.weakest() == self.a.balance.dominant())
    }

    pub fn both_have(&self, phase: Phase) -> bool {
        self.a.has(phase) && self.b.has(phase)
    }

    pub fn neither_has(&self, phase: Phase) -> bool {
        !self.a.has(phase) && !self.b.has(phase)
    }

    pub fn either_abundant(&self, phase: Phase) -> bool {
        self.a.band(phase) == CountBand::Abundant || self.b.band(phase) == CountBand::Abundant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_chart::{PillarConfig, four_pillars};
    use saju_time::CivilDateTime;

    fn partner(y: i64, m: i64, d: i64, h: i64, min: i64) -> Partner {
        let c = four_pillars(CivilDateTime::lenient(y, m, d, h, min), &PillarConfig::default());
        Partner::new(c, None)
    }

    #[test]
    fn self_context_is_all_rival_on_day() {
        let p = partner(1971, 11, 17, 4, 0);
        let ctx = PairContext::new(&p, &p);
        assert_eq!(ctx.day_roles(), [TenRole::Rival, TenRole::Rival]);
        assert_eq!(ctx.day_group_count(RoleGroup::Companion), 2);
        for i in 0..4 {
            assert_eq!(ctx.stem_roles[i][i], TenRole::Rival);
        }
    }

    #[test]
    fn sample_pair_day_roles() {
        // bing vs xin: xin is direct wealth to bing, bing is direct officer to xin
        let a = partner(1971, 11, 17, 4, 0);
        let b = partner(1976, 9, 16, 9, 40);
        let ctx = PairContext::new(&a, &b);
        assert_eq!(ctx.day_role_ab, TenRole::DirectWealth);
        assert_eq!(ctx.day_role_ba, TenRole::DirectOfficer);
        assert_eq!(ctx.day_stem_combine(), Some(Phase::Water));
        assert_eq!(ctx.count(InteractionKind::Clash), 2);
    }

    #[test]
    fn stem_group_count_is_symmetric() {
        let a = partner(1971, 11, 17, 4, 0);
        let b = partner(1976, 9, 16, 9, 40);
        let ab = PairContext::new(&a, &b);
        let ba = PairContext::new(&b, &a);
        for g in saju_base::ALL_ROLE_GROUPS {
            assert_eq!(ab.stem_group_count(g), ba.stem_group_count(g));
        }
        assert_eq!(ab.day_branch_void_count(), ba.day_branch_void_count());
        assert_eq!(ab.fills_weakness(), ba.fills_weakness());
    }
}
