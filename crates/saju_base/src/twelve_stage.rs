//! Twelve stages of life (sibi unseong) of a stem in a branch.
//!
//! Each stem is born (changsaeng) in a fixed branch and then walks the
//! stages branch by branch: forward for yang stems, backward for yin stems.

use serde::{Deserialize, Serialize};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::phase::Polarity;
use crate::stem::Stem;

/// The 12 life stages in order from birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwelveStage {
    Birth,
    Bath,
    Capping,
    Office,
    Peak,
    Decline,
    Sickness,
    Death,
    Tomb,
    Extinction,
    Conception,
    Nurture,
}

pub const ALL_TWELVE_STAGES: [TwelveStage; 12] = [
    TwelveStage::Birth,
    TwelveStage::Bath,
    TwelveStage::Capping,
    TwelveStage::Office,
    TwelveStage::Peak,
    TwelveStage::Decline,
    TwelveStage::Sickness,
    TwelveStage::Death,
    TwelveStage::Tomb,
    TwelveStage::Extinction,
    TwelveStage::Conception,
    TwelveStage::Nurture,
];

impl TwelveStage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Birth => "birth",
            Self::Bath => "bath",
            Self::Capping => "capping",
            Self::Office => "office",
            Self::Peak => "peak",
            Self::Decline => "decline",
            Self::Sickness => "sickness",
            Self::Death => "death",
            Self::Tomb => "tomb",
            Self::Extinction => "extinction",
            Self::Conception => "conception",
            Self::Nurture => "nurture",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Birth => "長生",
            Self::Bath => "沐浴",
            Self::Capping => "冠帶",
            Self::Office => "臨官",
            Self::Peak => "帝旺",
            Self::Decline => "衰",
            Self::Sickness => "病",
            Self::Death => "死",
            Self::Tomb => "墓",
            Self::Extinction => "絶",
            Self::Conception => "胎",
            Self::Nurture => "養",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Birth => "장생",
            Self::Bath => "목욕",
            Self::Capping => "관대",
            Self::Office => "건록",
            Self::Peak => "제왕",
            Self::Decline => "쇠",
            Self::Sickness => "병",
            Self::Death => "사",
            Self::Tomb => "묘",
            Self::Extinction => "절",
            Self::Conception => "태",
            Self::Nurture => "양",
        }
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Fortune weight of the stage, -25..=25.
    pub const fn score(self) -> i32 {
        match self {
            Self::Birth => 20,
            Self::Bath => -5,
            Self::Capping => 10,
            Self::Office => 20,
            Self::Peak => 25,
            Self::Decline => -5,
            Self::Sickness => -15,
            Self::Death => -20,
            Self::Tomb => -10,
            Self::Extinction => -25,
            Self::Conception => 0,
            Self::Nurture => 5,
        }
    }
}

/// Branch in which `stem` is born.
pub const fn birth_branch(stem: Stem) -> Branch {
    match stem {
        Stem::Jia => Branch::Hai,
        Stem::Bing | Stem::Wu => Branch::Yin,
        Stem::Geng => Branch::Si,
        Stem::Ren => Branch::Shen,
        Stem::Yi => Branch::Wu,
        Stem::Ding | Stem::Ji => Branch::You,
        Stem::Xin => Branch::Zi,
        Stem::Gui => Branch::Mao,
    }
}

/// Life stage of `stem` in `branch`.
pub const fn twelve_stage(stem: Stem, branch: Branch) -> TwelveStage {
    let birth = birth_branch(stem).index() as i32;
    let b = branch.index() as i32;
    let steps = match stem.polarity() {
        Polarity::Yang => b - birth,
        Polarity::Yin => birth - b,
    };
    ALL_TWELVE_STAGES[steps.rem_euclid(12) as usize]
}

/// Branch where `stem` reaches `stage`.
pub const fn stage_branch(stem: Stem, stage: TwelveStage) -> Branch {
    let birth = birth_branch(stem).index() as i32;
    let s = stage.index() as i32;
    let b = match stem.polarity() {
        Polarity::Yang => birth + s,
        Polarity::Yin => birth - s,
    };
    ALL_BRANCHES[b.rem_euclid(12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::ALL_STEMS;

    #[test]
    fn birth_is_stage_zero() {
        for s in ALL_STEMS {
            assert_eq!(twelve_stage(s, birth_branch(s)), TwelveStage::Birth);
        }
    }

    #[test]
    fn peaks() {
        assert_eq!(twelve_stage(Stem::Jia, Branch::Mao), TwelveStage::Peak);
        assert_eq!(twelve_stage(Stem::Yi, Branch::Yin), TwelveStage::Peak);
        assert_eq!(twelve_stage(Stem::Bing, Branch::Wu), TwelveStage::Peak);
        assert_eq!(twelve_stage(Stem::Gui, Branch::Hai), TwelveStage::Peak);
        assert_eq!(twelve_stage(Stem::Gui, Branch::Zi), TwelveStage::Office);
        assert_eq!(twelve_stage(Stem::Geng, Branch::You), TwelveStage::Peak);
    }

    #[test]
    fn stage_branch_inverts() {
        for s in ALL_STEMS {
            for stage in ALL_TWELVE_STAGES {
                assert_eq!(twelve_stage(s, stage_branch(s, stage)), stage);
            }
        }
    }

    #[test]
    fn scores_in_range() {
        for stage in ALL_TWELVE_STAGES {
            assert!((-25..=25).contains(&stage.score()));
        }
        assert_eq!(TwelveStage::Peak.score(), 25);
        assert_eq!(TwelveStage::Extinction.score(), -25);
    }
}
