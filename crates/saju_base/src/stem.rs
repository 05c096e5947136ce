//! The ten heavenly stems (cheongan).
//!
//! Stems pair off by phase in generation order (jia/yi wood, bing/ding fire,
//! ...), the first of each pair yang and the second yin.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BaseError;
use crate::phase::{ALL_PHASES, Phase, Polarity};

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [Stem; 10] = [
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
];

impl Stem {
    /// Romanized (pinyin) name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Jia => "甲",
            Self::Yi => "乙",
            Self::Bing => "丙",
            Self::Ding => "丁",
            Self::Wu => "戊",
            Self::Ji => "己",
            Self::Geng => "庚",
            Self::Xin => "辛",
            Self::Ren => "壬",
            Self::Gui => "癸",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Jia => "갑",
            Self::Yi => "을",
            Self::Bing => "병",
            Self::Ding => "정",
            Self::Wu => "무",
            Self::Ji => "기",
            Self::Geng => "경",
            Self::Xin => "신",
            Self::Ren => "임",
            Self::Gui => "계",
        }
    }

    /// 0-based index into [`ALL_STEMS`].
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem for a 0-based index. Returns None if index >= 10.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 10 {
            Some(ALL_STEMS[index as usize])
        } else {
            None
        }
    }

    /// The stem `n` places later in the cycle (negative `n` goes back).
    pub const fn offset(self, n: i64) -> Self {
        ALL_STEMS[((self as i64 + n.rem_euclid(10)) % 10) as usize]
    }

    pub const fn phase(self) -> Phase {
        ALL_PHASES[(self as u8 / 2) as usize]
    }

    pub const fn polarity(self) -> Polarity {
        Polarity::alternating(self as u8)
    }
}

impl Display for Stem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl FromStr for Stem {
    type Err = BaseError;

    /// Accepts pinyin (case-insensitive), hanja or hangul.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        ALL_STEMS
            .into_iter()
            .find(|x| x.name().eq_ignore_ascii_case(t) || x.hanja() == t || x.hangul() == t)
            .ok_or_else(|| BaseError::unknown("stem", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_sequential() {
        for (i, s) in ALL_STEMS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
            assert_eq!(Stem::from_index(i as u8), Some(*s));
        }
        assert_eq!(Stem::from_index(10), None);
    }

    #[test]
    fn phases_pair_off() {
        assert_eq!(Stem::Jia.phase(), Phase::Wood);
        assert_eq!(Stem::Yi.phase(), Phase::Wood);
        assert_eq!(Stem::Ding.phase(), Phase::Fire);
        assert_eq!(Stem::Ji.phase(), Phase::Earth);
        assert_eq!(Stem::Xin.phase(), Phase::Metal);
        assert_eq!(Stem::Gui.phase(), Phase::Water);
    }

    #[test]
    fn polarity_alternates() {
        assert_eq!(Stem::Jia.polarity(), Polarity::Yang);
        assert_eq!(Stem::Yi.polarity(), Polarity::Yin);
        assert_eq!(Stem::Ren.polarity(), Polarity::Yang);
        assert_eq!(Stem::Gui.polarity(), Polarity::Yin);
    }

    #[test]
    fn offset_wraps() {
        assert_eq!(Stem::Gui.offset(1), Stem::Jia);
        assert_eq!(Stem::Jia.offset(-1), Stem::Gui);
        assert_eq!(Stem::Bing.offset(25), Stem::Xin);
    }

    #[test]
    fn parse_any_script() {
        assert_eq!("Geng".parse::<Stem>().unwrap(), Stem::Geng);
        assert_eq!("庚".parse::<Stem>().unwrap(), Stem::Geng);
        assert_eq!("경".parse::<Stem>().unwrap(), Stem::Geng);
        assert!("zi".parse::<Stem>().is_err());
    }
}
