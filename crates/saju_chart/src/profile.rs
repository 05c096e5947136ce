//! Ten-role profile and day-master strength.

use serde::{Deserialize, Serialize};

use saju_base::{ALL_PHASES, ALL_TEN_ROLES, Phase, RoleGroup, Stem, TenRole, ten_role};

use crate::balance::PhaseBalance;
use crate::chart_types::{FourPillarsChart, PillarRole};

/// Support share at or above which the day master is strong.
pub const STRONG_SUPPORT: u8 = 55;
/// Support share at or below which the day master is weak.
pub const WEAK_SUPPORT: u8 = 40;

/// Role counts of a chart relative to its day master.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleProfile {
    day_master: Stem,
    /// Year, month and hour stems.
    visible: [u8; 10],
    /// Hidden stems of all four branches.
    hidden: [u8; 10],
}

impl RoleProfile {
    pub fn from_chart(chart: &FourPillarsChart) -> Self {
        let dm = chart.day_master();
        let mut visible = [0u8; 10];
        for role in [PillarRole::Year, PillarRole::Month, PillarRole::Hour] {
            visible[ten_role(dm, chart.term(role).stem()).index() as usize] += 1;
        }
        let mut hidden = [0u8; 10];
        for (_, _, stem) in chart.hidden_stems() {
            hidden[ten_role(dm, stem).index() as usize] += 1;
        }
        Self {
            day_master: dm,
            visible,
            hidden,
        }
    }

    pub const fn day_master(&self) -> Stem {
        self.day_master
    }

    pub const fn visible(&self, role: TenRole) -> u8 {
        self.visible[role.index() as usize]
    }

    pub const fn hidden(&self, role: TenRole) -> u8 {
        self.hidden[role.index() as usize]
    }

    pub const fn count(&self, role: TenRole) -> u8 {
        self.visible(role) + self.hidden(role)
    }

    pub fn group_total(&self, group: RoleGroup) -> u8 {
        let (a, b) = group.members();
        self.count(a) + self.count(b)
    }

    /// Roles present (visible or hidden), in traditional order.
    pub fn present(&self) -> Vec<TenRole> {
        ALL_TEN_ROLES
            .into_iter()
            .filter(|&r| self.count(r) > 0)
            .collect()
    }
}

/// Strength of the day master within its own chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayMasterStrength {
    Strong,
    Balanced,
    Weak,
}

impl DayMasterStrength {
    pub const fn from_support(support: u8) -> Self {
        if support >= STRONG_SUPPORT {
            Self::Strong
        } else if support <= WEAK_SUPPORT {
            Self::Weak
        } else {
            Self::Balanced
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Balanced => "balanced",
            Self::Weak => "weak",
        }
    }
}

/// Day master strength and the phases that bring the chart toward balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMasterProfile {
    pub day_master: Stem,
    /// Balance share of the day master's own phase plus its resource phase.
    pub support: u8,
    pub strength: DayMasterStrength,
    pub favorable: Vec<Phase>,
}

impl DayMasterProfile {
    pub fn from_balance(chart: &FourPillarsChart, balance: &PhaseBalance) -> Self {
        let day_master = chart.day_master();
        let own = day_master.phase();
        let support = balance.weight(own) + balance.weight(RoleGroup::Resource.phase_for(own));
        let strength = DayMasterStrength::from_support(support);
        Self {
            day_master,
            support,
            strength,
            favorable: favorable_phases(own, strength, balance),
        }
    }
}

/// Favorable phases for a day master of phase `own`.
///
/// A strong day master wants draining phases (output, wealth, officer); a
/// weak one wants support (resource, companion); a balanced one wants
/// whatever is scarcest in the chart.
pub fn favorable_phases(own: Phase, strength: DayMasterStrength, balance: &PhaseBalance) -> Vec<Phase> {
    let groups: &[RoleGroup] = match strength {
        DayMasterStrength::Strong => &[RoleGroup::Output, RoleGroup::Wealth, RoleGroup::Officer],
        DayMasterStrength::Weak => &[RoleGroup::Resource, RoleGroup::Companion],
        DayMasterStrength::Balanced => {
            let least = balance.weight(balance.weakest());
            return ALL_PHASES
                .into_iter()
                .filter(|&p| balance.weight(p) == least)
                .collect();
        }
    };
    let mut phases: Vec<Phase> = groups.iter().map(|g| g.phase_for(own)).collect();
    phases.sort();
    phases
}
