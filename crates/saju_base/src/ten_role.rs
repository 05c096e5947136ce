//! Ten-role (sipsin) classification of a stem relative to the day master.
//!
//! The phase relation between the day master and the target picks one of
//! five role groups; matching or differing polarity then picks the member.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::phase::Phase;
use crate::stem::Stem;

/// The 10 relational roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenRole {
    /// Same phase, same polarity (bigyeon).
    Rival,
    /// Same phase, other polarity (geopjae).
    ParallelRival,
    /// Day master generates target, same polarity (siksin).
    EatingGod,
    /// Day master generates target, other polarity (sanggwan).
    HurtingOfficer,
    /// Day master conquers target, same polarity (pyeonjae).
    IndirectWealth,
    /// Day master conquers target, other polarity (jeongjae).
    DirectWealth,
    /// Target conquers day master, same polarity (pyeongwan).
    SevenKillings,
    /// Target conquers day master, other polarity (jeonggwan).
    DirectOfficer,
    /// Target generates day master, same polarity (pyeonin).
    IndirectResource,
    /// Target generates day master, other polarity (jeongin).
    DirectResource,
}

/// All 10 roles in traditional order.
pub const ALL_TEN_ROLES: [TenRole; 10] = [
    TenRole::Rival,
    TenRole::ParallelRival,
    TenRole::EatingGod,
    TenRole::HurtingOfficer,
    TenRole::IndirectWealth,
    TenRole::DirectWealth,
    TenRole::SevenKillings,
    TenRole::DirectOfficer,
    TenRole::IndirectResource,
    TenRole::DirectResource,
];

/// The five role groups (pairs of roles sharing a phase relation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleGroup {
    Companion,
    Output,
    Wealth,
    Officer,
    Resource,
}

/// All 5 role groups.
pub const ALL_ROLE_GROUPS: [RoleGroup; 5] = [
    RoleGroup::Companion,
    RoleGroup::Output,
    RoleGroup::Wealth,
    RoleGroup::Officer,
    RoleGroup::Resource,
];

impl RoleGroup {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Companion => "companion",
            Self::Output => "output",
            Self::Wealth => "wealth",
            Self::Officer => "officer",
            Self::Resource => "resource",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// The (same-polarity, other-polarity) members of the group.
    pub const fn members(self) -> (TenRole, TenRole) {
        match self {
            Self::Companion => (TenRole::Rival, TenRole::ParallelRival),
            Self::Output => (TenRole::EatingGod, TenRole::HurtingOfficer),
            Self::Wealth => (TenRole::IndirectWealth, TenRole::DirectWealth),
            Self::Officer => (TenRole::SevenKillings, TenRole::DirectOfficer),
            Self::Resource => (TenRole::IndirectResource, TenRole::DirectResource),
        }
    }

    /// Phase of this group for a day master of phase `day`.
    pub const fn phase_for(self, day: Phase) -> Phase {
        match self {
            Self::Companion => day,
            Self::Output => day.generated(),
            Self::Wealth => day.conquered(),
            Self::Officer => day.conqueror(),
            Self::Resource => day.generator(),
        }
    }
}

impl TenRole {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rival => "rival",
            Self::ParallelRival => "parallel_rival",
            Self::EatingGod => "eating_god",
            Self::HurtingOfficer => "hurting_officer",
            Self::IndirectWealth => "indirect_wealth",
            Self::DirectWealth => "direct_wealth",
            Self::SevenKillings => "seven_killings",
            Self::DirectOfficer => "direct_officer",
            Self::IndirectResource => "indirect_resource",
            Self::DirectResource => "direct_resource",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Rival => "比肩",
            Self::ParallelRival => "劫財",
            Self::EatingGod => "食神",
            Self::HurtingOfficer => "傷官",
            Self::IndirectWealth => "偏財",
            Self::DirectWealth => "正財",
            Self::SevenKillings => "偏官",
            Self::DirectOfficer => "正官",
            Self::IndirectResource => "偏印",
            Self::DirectResource => "正印",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Rival => "비견",
            Self::ParallelRival => "겁재",
            Self::EatingGod => "식신",
            Self::HurtingOfficer => "상관",
            Self::IndirectWealth => "편재",
            Self::DirectWealth => "정재",
            Self::SevenKillings => "편관",
            Self::DirectOfficer => "정관",
            Self::IndirectResource => "편인",
            Self::DirectResource => "정인",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    pub const fn group(self) -> RoleGroup {
        match self {
            Self::Rival | Self::ParallelRival => RoleGroup::Companion,
            Self::EatingGod | Self::HurtingOfficer => RoleGroup::Output,
            Self::IndirectWealth | Self::DirectWealth => RoleGroup::Wealth,
            Self::SevenKillings | Self::DirectOfficer => RoleGroup::Officer,
            Self::IndirectResource | Self::DirectResource => RoleGroup::Resource,
        }
    }
}

impl Display for TenRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

/// Role group of a target phase relative to the day-master phase.
pub const fn role_group(day: Phase, target: Phase) -> RoleGroup {
    use Phase::*;
    use RoleGroup::*;

    match (day, target) {
        (Wood, Wood) | (Fire, Fire) | (Earth, Earth) | (Metal, Metal) | (Water, Water) => {
            Companion
        }

        (Wood, Fire) => Output,
        (Wood, Earth) => Wealth,
        (Wood, Metal) => Officer,
        (Wood, Water) => Resource,

        (Fire, Earth) => Output,
        (Fire, Metal) => Wealth,
        (Fire, Water) => Officer,
        (Fire, Wood) => Resource,

        (Earth, Metal) => Output,
        (Earth, Water) => Wealth,
        (Earth, Wood) => Officer,
        (Earth, Fire) => Resource,

        (Metal, Water) => Output,
        (Metal, Wood) => Wealth,
        (Metal, Fire) => Officer,
        (Metal, Earth) => Resource,

        (Water, Wood) => Output,
        (Water, Fire) => Wealth,
        (Water, Earth) => Officer,
        (Water, Metal) => Resource,
    }
}

/// Role of `target` relative to the day master `day`.
pub const fn ten_role(day: Stem, target: Stem) -> TenRole {
    let (same, other) = role_group(day.phase(), target.phase()).members();
    if day.polarity() as u8 == target.polarity() as u8 {
        same
    } else {
        other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::{ALL_PHASES, PhaseRelation, phase_relation};
    use crate::stem::ALL_STEMS;

    #[test]
    fn self_is_rival() {
        for s in ALL_STEMS {
            assert_eq!(ten_role(s, s), TenRole::Rival);
        }
    }

    #[test]
    fn jia_day_master_row() {
        let roles: Vec<_> = ALL_STEMS.iter().map(|&t| ten_role(Stem::Jia, t)).collect();
        assert_eq!(
            roles,
            vec![
                TenRole::Rival,
                TenRole::ParallelRival,
                TenRole::EatingGod,
                TenRole::HurtingOfficer,
                TenRole::IndirectWealth,
                TenRole::DirectWealth,
                TenRole::SevenKillings,
                TenRole::DirectOfficer,
                TenRole::IndirectResource,
                TenRole::DirectResource,
            ]
        );
    }

    #[test]
    fn table_agrees_with_phase_relation() {
        for d in ALL_PHASES {
            for t in ALL_PHASES {
                let expected = match phase_relation(d, t) {
                    PhaseRelation::Same => RoleGroup::Companion,
                    PhaseRelation::Generates => RoleGroup::Output,
                    PhaseRelation::Conquers => RoleGroup::Wealth,
                    PhaseRelation::ConqueredBy => RoleGroup::Officer,
                    PhaseRelation::GeneratedBy => RoleGroup::Resource,
                };
                assert_eq!(role_group(d, t), expected);
                assert_eq!(expected.phase_for(d), t);
            }
        }
    }

    #[test]
    fn each_day_master_sees_every_role_once() {
        for d in ALL_STEMS {
            let mut seen: Vec<_> = ALL_STEMS.iter().map(|&t| ten_role(d, t)).collect();
            seen.sort();
            assert_eq!(seen, ALL_TEN_ROLES.to_vec());
        }
    }

    #[test]
    fn geng_to_yi_is_direct_wealth() {
        assert_eq!(ten_role(Stem::Geng, Stem::Yi), TenRole::DirectWealth);
        assert_eq!(ten_role(Stem::Yi, Stem::Geng), TenRole::DirectOfficer);
    }
}
