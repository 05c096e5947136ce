//! The five phases (wuxing) and their generation / conquest cycles.
//!
//! Generation: wood → fire → earth → metal → water → wood.
//! Conquest:   wood → earth → water → fire → metal → wood.
//!
//! Both cycles are arithmetic on the phase index: generation is +1 and
//! conquest is +2 (mod 5).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BaseError;

/// One of the five phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

/// All 5 phases in generation order.
pub const ALL_PHASES: [Phase; 5] = [
    Phase::Wood,
    Phase::Fire,
    Phase::Earth,
    Phase::Metal,
    Phase::Water,
];

impl Phase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Wood => "목",
            Self::Fire => "화",
            Self::Earth => "토",
            Self::Metal => "금",
            Self::Water => "수",
        }
    }

    /// 0-based index into [`ALL_PHASES`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Phase for a 0-based index. Returns None if index >= 5.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 5 {
            Some(ALL_PHASES[index as usize])
        } else {
            None
        }
    }

    const fn step(self, n: u8) -> Self {
        ALL_PHASES[((self as u8 + n) % 5) as usize]
    }

    /// The phase this one generates (wood → fire).
    pub const fn generated(self) -> Self {
        self.step(1)
    }

    /// The phase that generates this one (fire ← wood).
    pub const fn generator(self) -> Self {
        self.step(4)
    }

    /// The phase this one conquers (wood → earth).
    pub const fn conquered(self) -> Self {
        self.step(2)
    }

    /// The phase that conquers this one (wood ← metal).
    pub const fn conqueror(self) -> Self {
        self.step(3)
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Phase {
    type Err = BaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_PHASES
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(t) || p.hanja() == t || p.hangul() == t)
            .ok_or_else(|| BaseError::unknown("phase", s))
    }
}

/// Whether `a` generates `b`.
pub const fn generates(a: Phase, b: Phase) -> bool {
    (a as u8 + 1) % 5 == b as u8
}

/// Whether `a` conquers `b`.
pub const fn conquers(a: Phase, b: Phase) -> bool {
    (a as u8 + 2) % 5 == b as u8
}

/// How `to` stands relative to `from` on the two cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseRelation {
    Same,
    /// `from` generates `to`.
    Generates,
    /// `to` generates `from`.
    GeneratedBy,
    /// `from` conquers `to`.
    Conquers,
    /// `to` conquers `from`.
    ConqueredBy,
}

/// Relation of `to` relative to `from`.
pub const fn phase_relation(from: Phase, to: Phase) -> PhaseRelation {
    match (to as u8 + 5 - from as u8) % 5 {
        0 => PhaseRelation::Same,
        1 => PhaseRelation::Generates,
        2 => PhaseRelation::Conquers,
        3 => PhaseRelation::ConqueredBy,
        _ => PhaseRelation::GeneratedBy,
    }
}

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yang,
    Yin,
}

impl Polarity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Yang => "陽",
            Self::Yin => "陰",
        }
    }

    /// Polarity of the element at `index` in an alternating yang-first sequence.
    pub const fn alternating(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_cycle() {
        assert!(generates(Phase::Wood, Phase::Fire));
        assert!(generates(Phase::Fire, Phase::Earth));
        assert!(generates(Phase::Earth, Phase::Metal));
        assert!(generates(Phase::Metal, Phase::Water));
        assert!(generates(Phase::Water, Phase::Wood));
        assert!(!generates(Phase::Fire, Phase::Wood));
    }

    #[test]
    fn conquest_cycle() {
        assert!(conquers(Phase::Wood, Phase::Earth));
        assert!(conquers(Phase::Earth, Phase::Water));
        assert!(conquers(Phase::Water, Phase::Fire));
        assert!(conquers(Phase::Fire, Phase::Metal));
        assert!(conquers(Phase::Metal, Phase::Wood));
        assert!(!conquers(Phase::Earth, Phase::Wood));
    }

    #[test]
    fn relation_is_exhaustive_and_consistent() {
        for a in ALL_PHASES {
            for b in ALL_PHASES {
                let r = phase_relation(a, b);
                match r {
                    PhaseRelation::Same => assert_eq!(a, b),
                    PhaseRelation::Generates => assert!(generates(a, b)),
                    PhaseRelation::GeneratedBy => assert!(generates(b, a)),
                    PhaseRelation::Conquers => assert!(conquers(a, b)),
                    PhaseRelation::ConqueredBy => assert!(conquers(b, a)),
                }
            }
        }
    }

    #[test]
    fn neighbours() {
        assert_eq!(Phase::Water.generated(), Phase::Wood);
        assert_eq!(Phase::Wood.generator(), Phase::Water);
        assert_eq!(Phase::Metal.conquered(), Phase::Wood);
        assert_eq!(Phase::Wood.conqueror(), Phase::Metal);
    }

    #[test]
    fn parse_names() {
        assert_eq!("Water".parse::<Phase>().unwrap(), Phase::Water);
        assert_eq!("土".parse::<Phase>().unwrap(), Phase::Earth);
        assert_eq!("화".parse::<Phase>().unwrap(), Phase::Fire);
        assert!("aether".parse::<Phase>().is_err());
    }
}
