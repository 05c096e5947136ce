//! Branch interaction detectors.
//!
//! Pair tables for clash, six-combine, punishment, destruction and harm;
//! the four triads; decade void; day-stem nobleman and month virtue.
//!
//! Detectors work on a [`PillarView`], the four (year, month, day, hour)
//! terms of a chart. Cross detectors compare every branch of one view with
//! every branch of the other; `*_within` detectors compare the branches of
//! one view among themselves.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;
use crate::cycle::SexagenaryTerm;
use crate::interaction_types::{
    ALL_INTERACTION_KINDS, BranchInteraction, BranchPair, Detection, InteractionKind,
};
use crate::phase::Phase;
use crate::stem::Stem;

use Branch::*;

/// The six clashing (opposite) pairs.
pub const CLASH_PAIRS: [(Branch, Branch); 6] = [
    (Zi, Wu),
    (Chou, Wei),
    (Yin, Shen),
    (Mao, You),
    (Chen, Xu),
    (Si, Hai),
];

/// The six combining pairs and the phase each pair produces.
pub const SIX_COMBINE_PAIRS: [(Branch, Branch, Phase); 6] = [
    (Zi, Chou, Phase::Earth),
    (Yin, Hai, Phase::Wood),
    (Mao, Xu, Phase::Fire),
    (Chen, You, Phase::Metal),
    (Si, Shen, Phase::Water),
    (Wu, Wei, Phase::Fire),
];

/// The four triads (birth, peak, tomb) and their phase.
pub const TRIADS: [([Branch; 3], Phase); 4] = [
    ([Shen, Zi, Chen], Phase::Water),
    ([Hai, Mao, Wei], Phase::Wood),
    ([Yin, Wu, Xu], Phase::Fire),
    ([Si, You, Chou], Phase::Metal),
];

/// Punishing pairs: any two members of Yin-Si-Shen or Chou-Xu-Wei, plus Zi-Mao.
pub const PUNISHMENT_PAIRS: [(Branch, Branch); 7] = [
    (Yin, Si),
    (Si, Shen),
    (Yin, Shen),
    (Chou, Xu),
    (Xu, Wei),
    (Chou, Wei),
    (Zi, Mao),
];

pub const DESTRUCTION_PAIRS: [(Branch, Branch); 6] = [
    (Zi, You),
    (Wu, Mao),
    (Shen, Si),
    (Yin, Hai),
    (Chen, Chou),
    (Xu, Wei),
];

pub const HARM_PAIRS: [(Branch, Branch); 6] = [
    (Zi, Wei),
    (Chou, Wu),
    (Yin, Si),
    (Mao, Chen),
    (Shen, Hai),
    (You, Xu),
];

fn in_pairs(table: &[(Branch, Branch)], a: Branch, b: Branch) -> bool {
    table
        .iter()
        .any(|&(x, y)| (x == a && y == b) || (x == b && y == a))
}

pub fn branch_clash(a: Branch, b: Branch) -> bool {
    in_pairs(&CLASH_PAIRS, a, b)
}

/// Phase of the six-combine formed by `a` and `b`, if any.
pub fn six_combine(a: Branch, b: Branch) -> Option<Phase> {
    SIX_COMBINE_PAIRS
        .iter()
        .find(|&&(x, y, _)| (x == a && y == b) || (x == b && y == a))
        .map(|&(_, _, p)| p)
}

pub fn punishes(a: Branch, b: Branch) -> bool {
    in_pairs(&PUNISHMENT_PAIRS, a, b)
}

pub fn destroys(a: Branch, b: Branch) -> bool {
    in_pairs(&DESTRUCTION_PAIRS, a, b)
}

pub fn harms(a: Branch, b: Branch) -> bool {
    in_pairs(&HARM_PAIRS, a, b)
}

/// The two nobleman (cheoneul gwiin) branches of a day stem.
pub const fn nobleman_branches(day_stem: Stem) -> [Branch; 2] {
    match day_stem {
        Stem::Jia | Stem::Wu | Stem::Geng => [Chou, Wei],
        Stem::Yi | Stem::Ji => [Zi, Shen],
        Stem::Bing | Stem::Ding => [Hai, You],
        Stem::Ren | Stem::Gui => [Mao, Si],
        Stem::Xin => [Yin, Wu],
    }
}

/// The month-virtue (woldeok) stem keyed by the month branch's triad.
pub const fn virtue_stem(month_branch: Branch) -> Stem {
    match month_branch {
        Yin | Wu | Xu => Stem::Bing,
        Shen | Zi | Chen => Stem::Ren,
        Hai | Mao | Wei => Stem::Jia,
        Si | You | Chou => Stem::Geng,
    }
}

/// The four terms of a chart in year, month, day, hour order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PillarView {
    terms: [SexagenaryTerm; 4],
}

impl PillarView {
    pub const fn new(
        year: SexagenaryTerm,
        month: SexagenaryTerm,
        day: SexagenaryTerm,
        hour: SexagenaryTerm,
    ) -> Self {
        Self {
            terms: [year, month, day, hour],
        }
    }

    pub const fn terms(&self) -> [SexagenaryTerm; 4] {
        self.terms
    }

    pub fn stems(&self) -> [Stem; 4] {
        self.terms.map(|t| t.stem())
    }

    pub fn branches(&self) -> [Branch; 4] {
        self.terms.map(|t| t.branch())
    }

    pub const fn year(&self) -> SexagenaryTerm {
        self.terms[0]
    }

    pub const fn month(&self) -> SexagenaryTerm {
        self.terms[1]
    }

    pub const fn day(&self) -> SexagenaryTerm {
        self.terms[2]
    }

    pub const fn hour(&self) -> SexagenaryTerm {
        self.terms[3]
    }

    /// Branches of every pillar except the one at `skip`.
    fn branches_except(&self, skip: usize) -> Vec<Branch> {
        self.terms
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, t)| t.branch())
            .collect()
    }

    fn stems_except(&self, skip: usize) -> Vec<Stem> {
        self.terms
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != skip)
            .map(|(_, t)| t.stem())
            .collect()
    }
}

const DAY: usize = 2;
const MONTH: usize = 1;

fn pair_interaction(kind: InteractionKind, a: Branch, b: Branch) -> Option<BranchInteraction> {
    let pair = BranchPair::new(a, b);
    match kind {
        InteractionKind::Clash => branch_clash(a, b).then_some(BranchInteraction::Clash { pair }),
        InteractionKind::SixCombine => {
            six_combine(a, b).map(|phase| BranchInteraction::SixCombine { pair, phase })
        }
        InteractionKind::Punishment => {
            punishes(a, b).then_some(BranchInteraction::Punishment { pair })
        }
        InteractionKind::Destruction => {
            destroys(a, b).then_some(BranchInteraction::Destruction { pair })
        }
        InteractionKind::Harm => harms(a, b).then_some(BranchInteraction::Harm { pair }),
        _ => None,
    }
}

/// Triad matches where both sides contribute a member.
fn cross_triads(a: &[Branch], b: &[Branch]) -> Vec<BranchInteraction> {
    let mut out = Vec::new();
    for (members, phase) in TRIADS {
        let from_a: Vec<Branch> = members.into_iter().filter(|m| a.contains(m)).collect();
        let from_b: Vec<Branch> = members.into_iter().filter(|m| b.contains(m)).collect();
        if from_a.is_empty() || from_b.is_empty() {
            continue;
        }
        let present: Vec<Branch> = members
            .into_iter()
            .filter(|m| from_a.contains(m) || from_b.contains(m))
            .collect();
        let distinct_pair = from_a.iter().any(|x| from_b.iter().any(|y| x != y));
        if present.len() == 3 || (present.len() == 2 && distinct_pair) {
            out.push(BranchInteraction::TriadHarmony {
                phase,
                full: present.len() == 3,
                members: present,
            });
        }
    }
    out
}

fn triads_within(branches: &[Branch]) -> Vec<BranchInteraction> {
    TRIADS
        .into_iter()
        .filter_map(|(members, phase)| {
            let present: Vec<Branch> =
                members.into_iter().filter(|m| branches.contains(m)).collect();
            (present.len() >= 2).then(|| BranchInteraction::TriadHarmony {
                phase,
                full: present.len() == 3,
                members: present,
            })
        })
        .collect()
}

/// Branches in `branches` that are void for the decade of `key`.
///
/// Charts key on the day pillar; passing the year pillar gives the
/// year-keyed variant.
pub fn void_hits(key: SexagenaryTerm, branches: &[Branch]) -> Vec<BranchInteraction> {
    let void = key.void_branches();
    branches
        .iter()
        .filter(|&&b| void.contains(&b))
        .map(|&branch| BranchInteraction::Void { key, branch })
        .collect()
}

/// Day-stem noblemen among `branches` and month-virtue stems among `stems`.
pub fn nobleman_hits(
    day_stem: Stem,
    month_branch: Branch,
    stems: &[Stem],
    branches: &[Branch],
) -> Vec<BranchInteraction> {
    let noble = nobleman_branches(day_stem);
    let mut out: Vec<BranchInteraction> = branches
        .iter()
        .filter(|&&b| noble.contains(&b))
        .map(|&branch| BranchInteraction::Nobleman {
            stem: day_stem,
            branch,
            virtue: false,
        })
        .collect();
    let virtue = virtue_stem(month_branch);
    out.extend(
        stems
            .iter()
            .filter(|&&s| s == virtue)
            .map(|&stem| BranchInteraction::Nobleman {
                stem,
                branch: month_branch,
                virtue: true,
            }),
    );
    out
}

/// Run one detector across two charts.
pub fn detect(kind: InteractionKind, a: &PillarView, b: &PillarView) -> Detection {
    let ab = a.branches();
    let bb = b.branches();
    let matches = match kind {
        InteractionKind::TriadHarmony => cross_triads(&ab, &bb),
        InteractionKind::Void => {
            let mut m = void_hits(a.day(), &bb);
            m.extend(void_hits(b.day(), &ab));
            m
        }
        InteractionKind::Nobleman => {
            let mut m = nobleman_hits(a.day().stem(), a.month().branch(), &b.stems(), &bb);
            m.extend(nobleman_hits(
                b.day().stem(),
                b.month().branch(),
                &a.stems(),
                &ab,
            ));
            m
        }
        _ => ab
            .iter()
            .flat_map(|&x| bb.iter().filter_map(move |&y| pair_interaction(kind, x, y)))
            .collect(),
    };
    Detection::new(kind, matches)
}

/// Run one detector among the pillars of a single chart.
pub fn detect_within(kind: InteractionKind, chart: &PillarView) -> Detection {
    let branches = chart.branches();
    let matches = match kind {
        InteractionKind::TriadHarmony => triads_within(&branches),
        InteractionKind::Void => void_hits(chart.day(), &chart.branches_except(DAY)),
        InteractionKind::Nobleman => {
            let day_stem = chart.day().stem();
            let month_branch = chart.month().branch();
            let mut m = nobleman_hits(day_stem, month_branch, &[], &chart.branches_except(DAY));
            m.extend(nobleman_hits(
                day_stem,
                month_branch,
                &chart.stems_except(MONTH),
                &[],
            ));
            m
        }
        _ => {
            let mut m = Vec::new();
            for i in 0..branches.len() {
                for j in i + 1..branches.len() {
                    m.extend(pair_interaction(kind, branches[i], branches[j]));
                }
            }
            m
        }
    };
    Detection::new(kind, matches)
}

/// All eight detectors across two charts, in [`ALL_INTERACTION_KINDS`] order.
pub fn detect_all(a: &PillarView, b: &PillarView) -> Vec<Detection> {
    ALL_INTERACTION_KINDS
        .iter()
        .map(|&k| detect(k, a, b))
        .collect()
}

/// All eight detectors within one chart.
pub fn detect_all_within(chart: &PillarView) -> Vec<Detection> {
    ALL_INTERACTION_KINDS
        .iter()
        .map(|&k| detect_within(k, chart))
        .collect()
}
