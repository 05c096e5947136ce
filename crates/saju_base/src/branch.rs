//! The twelve earthly branches (jiji) and their hidden stems.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::phase::{Phase, Polarity};
use crate::stem::Stem;

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [Branch; 12] = [
    Branch::Zi,
    Branch::Chou,
    Branch::Yin,
    Branch::Mao,
    Branch::Chen,
    Branch::Si,
    Branch::Wu,
    Branch::Wei,
    Branch::Shen,
    Branch::You,
    Branch::Xu,
    Branch::Hai,
];

impl Branch {
    /// Romanized (pinyin) name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Zi => "子",
            Self::Chou => "丑",
            Self::Yin => "寅",
            Self::Mao => "卯",
            Self::Chen => "辰",
            Self::Si => "巳",
            Self::Wu => "午",
            Self::Wei => "未",
            Self::Shen => "申",
            Self::You => "酉",
            Self::Xu => "戌",
            Self::Hai => "亥",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Zi => "자",
            Self::Chou => "축",
            Self::Yin => "인",
            Self::Mao => "묘",
            Self::Chen => "진",
            Self::Si => "사",
            Self::Wu => "오",
            Self::Wei => "미",
            Self::Shen => "신",
            Self::You => "유",
            Self::Xu => "술",
            Self::Hai => "해",
        }
    }

    /// Zodiac animal.
    pub const fn animal(self) -> &'static str {
        match self {
            Self::Zi => "rat",
            Self::Chou => "ox",
            Self::Yin => "tiger",
            Self::Mao => "rabbit",
            Self::Chen => "dragon",
            Self::Si => "snake",
            Self::Wu => "horse",
            Self::Wei => "goat",
            Self::Shen => "monkey",
            Self::You => "rooster",
            Self::Xu => "dog",
            Self::Hai => "pig",
        }
    }

    /// 0-based index into [`ALL_BRANCHES`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch for a 0-based index. Returns None if index >= 12.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 12 {
            Some(ALL_BRANCHES[index as usize])
        } else {
            None
        }
    }

    /// The branch `n` places later in the cycle (negative `n` goes back).
    pub const fn offset(self, n: i64) -> Self {
        ALL_BRANCHES[((self as i64 + n.rem_euclid(12)) % 12) as usize]
    }

    pub const fn phase(self) -> Phase {
        match self {
            Self::Yin | Self::Mao => Phase::Wood,
            Self::Si | Self::Wu => Phase::Fire,
            Self::Chen | Self::Xu | Self::Chou | Self::Wei => Phase::Earth,
            Self::Shen | Self::You => Phase::Metal,
            Self::Hai | Self::Zi => Phase::Water,
        }
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::alternating(self as u8)
    }

    /// Stems stored inside the branch, main stem first.
    pub const fn hidden_stems(self) -> &'static [Stem] {
        match self {
            Self::Zi => &[Stem::Gui],
            Self::Chou => &[Stem::Ji, Stem::Gui, Stem::Xin],
            Self::Yin => &[Stem::Jia, Stem::Bing, Stem::Wu],
            Self::Mao => &[Stem::Yi],
            Self::Chen => &[Stem::Wu, Stem::Yi, Stem::Gui],
            Self::Si => &[Stem::Bing, Stem::Wu, Stem::Geng],
            Self::Wu => &[Stem::Ding, Stem::Ji],
            Self::Wei => &[Stem::Ji, Stem::Ding, Stem::Yi],
            Self::Shen => &[Stem::Geng, Stem::Ren, Stem::Wu],
            Self::You => &[Stem::Xin],
            Self::Xu => &[Stem::Wu, Stem::Xin, Stem::Ding],
            Self::Hai => &[Stem::Ren, Stem::Jia],
        }
    }

    /// The main (first) hidden stem.
    pub const fn main_stem(self) -> Stem {
        self.hidden_stems()[0]
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl FromStr for Branch {
    type Err = BaseError;

    /// Accepts pinyin (case-insensitive), hanja, hangul or the animal name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_BRANCHES
            .into_iter()
            .find(|b| {
                b.name().eq_ignore_ascii_case(t)
                    || b.hanja() == t
                    || b.hangul() == t
                    || b.animal().eq_ignore_ascii_case(t)
            })
            .ok_or_else(|| BaseError::unknown("branch", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, b) in ALL_BRANCHES.iter().enumerate() {
            assert_eq!(b.index() as usize, i);
            assert_eq!(Branch::from_index(i as u8), Some(*b));
        }
        assert_eq!(Branch::from_index(12), None);
    }

    #[test]
    fn main_hidden_stem_shares_branch_phase() {
        for b in ALL_BRANCHES {
            assert_eq!(b.main_stem().phase(), b.phase(), "{}", b.name());
        }
    }

    #[test]
    fn hidden_stem_counts() {
        let total: usize = ALL_BRANCHES.iter().map(|b| b.hidden_stems().len()).sum();
        assert_eq!(total, 28);
        assert!(ALL_BRANCHES.iter().all(|b| (1..=3).contains(&b.hidden_stems().len())));
    }

    #[test]
    fn earth_branches() {
        let earth: Vec<_> = ALL_BRANCHES
            .into_iter()
            .filter(|b| b.phase() == Phase::Earth)
            .collect();
        assert_eq!(earth, vec![Branch::Chou, Branch::Chen, Branch::Wei, Branch::Xu]);
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Branch::Hai.offset(1), Branch::Zi);
        assert_eq!(Branch::Zi.offset(-13), Branch::Hai);
    }

    #[test]
    fn parse_names() {
        assert_eq!("wu".parse::<Branch>().unwrap(), Branch::Wu);
        assert_eq!("午".parse::<Branch>().unwrap(), Branch::Wu);
        assert_eq!("Horse".parse::<Branch>().unwrap(), Branch::Wu);
        assert!("jia".parse::<Branch>().is_err());
    }
}
