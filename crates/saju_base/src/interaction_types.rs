//! Types for branch interaction detection.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::cycle::SexagenaryTerm;
use crate::phase::Phase;
use crate::stem::Stem;

/// The eight interaction detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Clash,
    SixCombine,
    TriadHarmony,
    Punishment,
    Destruction,
    Harm,
    Void,
    Nobleman,
}

/// All 8 interaction kinds in detection order.
pub const ALL_INTERACTION_KINDS: [InteractionKind; 8] = [
    InteractionKind::Clash,
    InteractionKind::SixCombine,
    InteractionKind::TriadHarmony,
    InteractionKind::Punishment,
    InteractionKind::Destruction,
    InteractionKind::Harm,
    InteractionKind::Void,
    InteractionKind::Nobleman,
];

impl InteractionKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Clash => "clash",
            Self::SixCombine => "six_combine",
            Self::TriadHarmony => "triad_harmony",
            Self::Punishment => "punishment",
            Self::Destruction => "destruction",
            Self::Harm => "harm",
            Self::Void => "void",
            Self::Nobleman => "nobleman",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Clash => "沖",
            Self::SixCombine => "六合",
            Self::TriadHarmony => "三合",
            Self::Punishment => "刑",
            Self::Destruction => "破",
            Self::Harm => "害",
            Self::Void => "空亡",
            Self::Nobleman => "貴人",
        }
    }

    /// Combines and noblemen are favorable; everything else is adverse.
    pub const fn is_favorable(self) -> bool {
        matches!(self, Self::SixCombine | Self::TriadHarmony | Self::Nobleman)
    }
}

/// An unordered pair of branches, stored lowest index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BranchPair {
    first: Branch,
    second: Branch,
}

impl BranchPair {
    pub fn new(a: Branch, b: Branch) -> Self {
        if a <= b {
            Self { first: a, second: b }
        } else {
            Self { first: b, second: a }
        }
    }

    pub const fn first(self) -> Branch {
        self.first
    }

    pub const fn second(self) -> Branch {
        self.second
    }

    pub fn contains(self, b: Branch) -> bool {
        self.first == b || self.second == b
    }
}

/// One literal interaction found between branches (or a stem for nobleman).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BranchInteraction {
    Clash {
        pair: BranchPair,
    },
    SixCombine {
        pair: BranchPair,
        phase: Phase,
    },
    /// `full` when all three members are present; two members is a partial
    /// (half) harmony.
    TriadHarmony {
        phase: Phase,
        members: Vec<Branch>,
        full: bool,
    },
    Punishment {
        pair: BranchPair,
    },
    Destruction {
        pair: BranchPair,
    },
    Harm {
        pair: BranchPair,
    },
    /// `branch` is void for the decade of `key`.
    Void {
        key: SexagenaryTerm,
        branch: Branch,
    },
    /// Day-stem nobleman (`virtue == false`): `stem` is the keying day stem,
    /// `branch` the nobleman branch found. Month virtue (`virtue == true`):
    /// `branch` is the keying month branch, `stem` the virtue stem found.
    Nobleman {
        stem: Stem,
        branch: Branch,
        virtue: bool,
    },
}

impl BranchInteraction {
    pub const fn kind(&self) -> InteractionKind {
        match self {
            Self::Clash { .. } => InteractionKind::Clash,
            Self::SixCombine { .. } => InteractionKind::SixCombine,
            Self::TriadHarmony { .. } => InteractionKind::TriadHarmony,
            Self::Punishment { .. } => InteractionKind::Punishment,
            Self::Destruction { .. } => InteractionKind::Destruction,
            Self::Harm { .. } => InteractionKind::Harm,
            Self::Void { .. } => InteractionKind::Void,
            Self::Nobleman { .. } => InteractionKind::Nobleman,
        }
    }
}

/// Result of one detector: how many matches and what they were.
///
/// Matches are sorted canonically, so detecting A against B gives the same
/// value as B against A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    kind: InteractionKind,
    count: usize,
    matches: Vec<BranchInteraction>,
}

impl Detection {
    pub fn new(kind: InteractionKind, mut matches: Vec<BranchInteraction>) -> Self {
        debug_assert!(matches.iter().all(|m| m.kind() == kind));
        matches.sort();
        Self {
            kind,
            count: matches.len(),
            matches,
        }
    }

    pub const fn kind(&self) -> InteractionKind {
        self.kind
    }

    pub const fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn matches(&self) -> &[BranchInteraction] {
        &self.matches
    }

    /// Number of full (three-member) triads; zero for other kinds.
    pub fn full_triads(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| matches!(m, BranchInteraction::TriadHarmony { full: true, .. }))
            .count()
    }

    /// Number of partial (two-member) triads; zero for other kinds.
    pub fn partial_triads(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| matches!(m, BranchInteraction::TriadHarmony { full: false, .. }))
            .count()
    }

    /// Number of month-virtue nobleman matches; zero for other kinds.
    pub fn virtue_matches(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| matches!(m, BranchInteraction::Nobleman { virtue: true, .. }))
            .count()
    }
}
