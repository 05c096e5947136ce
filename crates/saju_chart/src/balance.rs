//! Five-phase balance of a chart.
//!
//! Every visible stem, visible branch and hidden stem contributes a fixed
//! weight to its phase; the day pillar counts one and a half times. Raw
//! weights are scaled to integer percentages by the largest-remainder method
//! so the five values always sum to exactly 100.

use serde::{Deserialize, Serialize};

use saju_base::{ALL_PHASES, Phase};

use crate::chart_types::{ALL_PILLAR_ROLES, FourPillarsChart, PillarRole};

/// Weight of a visible stem.
pub const STEM_WEIGHT: u32 = 10;
/// Weight of a visible branch.
pub const BRANCH_WEIGHT: u32 = 8;
/// Weights of hidden stems by position (main stem first).
pub const HIDDEN_STEM_WEIGHTS: [u32; 3] = [3, 2, 1];

/// Pillar multiplier in halves: day pillar ×1.5, others ×1.
const fn pillar_factor(role: PillarRole) -> u32 {
    match role {
        PillarRole::Day => 3,
        _ => 2,
    }
}

/// Phase weights summing to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "PhaseWeights", try_from = "PhaseWeights")]
pub struct PhaseBalance {
    weights: [u8; 5],
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct PhaseWeights {
    wood: u8,
    fire: u8,
    earth: u8,
    metal: u8,
    water: u8,
}

impl From<PhaseBalance> for PhaseWeights {
    fn from(b: PhaseBalance) -> Self {
        let [wood, fire, earth, metal, water] = b.weights;
        Self {
            wood,
            fire,
            earth,
            metal,
            water,
        }
    }
}

impl TryFrom<PhaseWeights> for PhaseBalance {
    type Error = String;

    fn try_from(w: PhaseWeights) -> Result<Self, Self::Error> {
        let weights = [w.wood, w.fire, w.earth, w.metal, w.water];
        let sum: u32 = weights.iter().map(|&x| x as u32).sum();
        if sum != 100 {
            return Err(format!("phase weights must sum to 100, got {sum}"));
        }
        Ok(Self { weights })
    }
}

impl PhaseBalance {
    pub fn from_chart(chart: &FourPillarsChart) -> Self {
        Self::from_raw(raw_weights(chart))
    }

    /// Scale raw weights to percentages (largest remainder, ties to the
    /// earlier phase). All-zero input yields an even 20 each.
    pub fn from_raw(raw: [u32; 5]) -> Self {
        let total: u64 = raw.iter().map(|&x| x as u64).sum();
        if total == 0 {
            return Self { weights: [20; 5] };
        }
        let mut weights = [0u8; 5];
        let mut remainders = [(0u64, 0usize); 5];
        let mut assigned = 0u64;
        for (i, &r) in raw.iter().enumerate() {
            let scaled = r as u64 * 100;
            weights[i] = (scaled / total) as u8;
            assigned += scaled / total;
            remainders[i] = (scaled % total, i);
        }
        // larger remainder first, then lower index
        remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
        for &(_, i) in remainders.iter().take((100 - assigned) as usize) {
            weights[i] += 1;
        }
        Self { weights }
    }

    pub const fn weight(&self, phase: Phase) -> u8 {
        self.weights[phase.index() as usize]
    }

    pub const fn weights(&self) -> [u8; 5] {
        self.weights
    }

    /// Heaviest phase (earliest in generation order on ties).
    pub fn dominant(&self) -> Phase {
        let mut best = Phase::Wood;
        for p in ALL_PHASES {
            if self.weight(p) > self.weight(best) {
                best = p;
            }
        }
        best
    }

    /// Lightest phase (earliest in generation order on ties).
    pub fn weakest(&self) -> Phase {
        let mut worst = Phase::Wood;
        for p in ALL_PHASES {
            if self.weight(p) < self.weight(worst) {
                worst = p;
            }
        }
        worst
    }

    /// Phases with zero weight.
    pub fn missing(&self) -> Vec<Phase> {
        ALL_PHASES
            .into_iter()
            .filter(|&p| self.weight(p) == 0)
            .collect()
    }
}

/// Unscaled phase weights (in half-units) of a chart.
pub fn raw_weights(chart: &FourPillarsChart) -> [u32; 5] {
    let mut raw = [0u32; 5];
    for role in ALL_PILLAR_ROLES {
        let term = chart.term(role);
        let factor = pillar_factor(role);
        raw[term.stem().phase().index() as usize] += STEM_WEIGHT * factor;
        let branch = term.branch();
        raw[branch.phase().index() as usize] += BRANCH_WEIGHT * factor;
        for (i, stem) in branch.hidden_stems().iter().enumerate() {
            raw[stem.phase().index() as usize] += HIDDEN_STEM_WEIGHTS[i] * factor;
        }
    }
    raw
}

/// How often a phase appears among the eight visible characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CountBand {
    /// Not present.
    Absent,
    /// One or two characters.
    Present,
    /// Three or more characters.
    Abundant,
}

impl CountBand {
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Absent,
            1 | 2 => Self::Present,
            _ => Self::Abundant,
        }
    }
}

/// Phase counts over the four visible stems and four visible branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhaseCounts {
    counts: [u8; 5],
}

impl PhaseCounts {
    pub fn from_chart(chart: &FourPillarsChart) -> Self {
        let mut counts = [0u8; 5];
        for s in chart.stems() {
            counts[s.phase().index() as usize] += 1;
        }
        for b in chart.branches() {
            counts[b.phase().index() as usize] += 1;
        }
        Self { counts }
    }

    pub const fn count(&self, phase: Phase) -> u8 {
        self.counts[phase.index() as usize]
    }

    pub const fn band(&self, phase: Phase) -> CountBand {
        CountBand::from_count(self.count(phase))
    }

    pub const fn counts(&self) -> [u8; 5] {
        self.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PillarConfig;
    use crate::pillars::four_pillars;
    use saju_time::CivilDateTime;

    fn chart(y: i64, m: i64, d: i64, h: i64, min: i64) -> FourPillarsChart {
        four_pillars(CivilDateTime::lenient(y, m, d, h, min), &PillarConfig::default())
    }

    #[test]
    fn sums_to_100() {
        for (y, m, d, h) in [(1971, 11, 17, 4), (1976, 9, 16, 9), (2024, 2, 29, 23), (1900, 1, 1, 0)] {
            let b = PhaseBalance::from_chart(&chart(y, m, d, h, 0));
            let sum: u32 = b.weights().iter().map(|&w| w as u32).sum();
            assert_eq!(sum, 100);
        }
    }

    #[test]
    fn largest_remainder() {
        let b = PhaseBalance::from_raw([1, 1, 1, 0, 0]);
        assert_eq!(b.weights(), [34, 33, 33, 0, 0]);
        assert_eq!(PhaseBalance::from_raw([0; 5]).weights(), [20; 5]);
    }

    #[test]
    fn day_pillar_counts_more() {
        // xinhai jihai bingwu gengyin
        let c = chart(1971, 11, 17, 4, 0);
        let raw = raw_weights(&c);
        assert_eq!(raw, [30, 67, 28, 40, 44]);
        let b = PhaseBalance::from_chart(&c);
        assert_eq!(b.weights(), [14, 32, 14, 19, 21]);
        assert_eq!(b.dominant(), Phase::Fire);
        assert_eq!(b.weakest(), Phase::Wood);
        assert!(b.missing().is_empty());
    }

    #[test]
    fn counts_and_bands() {
        let c = chart(1971, 11, 17, 4, 0);
        let counts = PhaseCounts::from_chart(&c);
        // stems xin ji bing geng, branches hai hai wu yin
        assert_eq!(counts.count(Phase::Metal), 2);
        assert_eq!(counts.count(Phase::Water), 2);
        assert_eq!(counts.count(Phase::Fire), 2);
        assert_eq!(counts.band(Phase::Earth), CountBand::Present);
        let total: u8 = counts.counts().iter().sum();
        assert_eq!(total, 8);
    }

    #[test]
    fn serde_checks_sum() {
        let b = PhaseBalance::from_raw([2, 1, 1, 0, 0]);
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"wood":50,"fire":25,"earth":25,"metal":0,"water":0}"#);
        let bad = r#"{"wood":50,"fire":25,"earth":25,"metal":0,"water":1}"#;
        assert!(serde_json::from_str::<PhaseBalance>(bad).is_err());
    }
}
