//! The sexagenary (60-term) cycle.
//!
//! Stems and branches advance in lockstep, so term `i` pairs stem `i mod 10`
//! with branch `i mod 12`. Only same-parity (stem, branch) pairs occur; the
//! other 60 combinations are unrepresentable.
//!
//! Month and hour terms are looked up from five-class tables: the first
//! (tiger) month of a year and the first (rat) hour of a day depend only on
//! the year / day stem modulo 5.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::error::BaseError;
use crate::stem::{ALL_STEMS, Stem};

/// One term of the 60-term cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SexagenaryTerm {
    index: u8,
}

/// Romanized names of the 60 terms (index 0 = jiazi).
pub const TERM_NAMES: [&str; 60] = [
    "jiazi", "yichou", "bingyin", "dingmao", "wuchen", "jisi",
    "gengwu", "xinwei", "renshen", "guiyou", "jiaxu", "yihai",
    "bingzi", "dingchou", "wuyin", "jimao", "gengchen", "xinsi",
    "renwu", "guiwei", "jiashen", "yiyou", "bingxu", "dinghai",
    "wuzi", "jichou", "gengyin", "xinmao", "renchen", "guisi",
    "jiawu", "yiwei", "bingshen", "dingyou", "wuxu", "jihai",
    "gengzi", "xinchou", "renyin", "guimao", "jiachen", "yisi",
    "bingwu", "dingwei", "wushen", "jiyou", "gengxu", "xinhai",
    "renzi", "guichou", "jiayin", "yimao", "bingchen", "dingsi",
    "wuwu", "jiwei", "gengshen", "xinyou", "renxu", "guihai",
];

/// Hanja names of the 60 terms.
pub const TERM_HANJA: [&str; 60] = [
    "甲子", "乙丑", "丙寅", "丁卯", "戊辰", "己巳",
    "庚午", "辛未", "壬申", "癸酉", "甲戌", "乙亥",
    "丙子", "丁丑", "戊寅", "己卯", "庚辰", "辛巳",
    "壬午", "癸未", "甲申", "乙酉", "丙戌", "丁亥",
    "戊子", "己丑", "庚寅", "辛卯", "壬辰", "癸巳",
    "甲午", "乙未", "丙申", "丁酉", "戊戌", "己亥",
    "庚子", "辛丑", "壬寅", "癸卯", "甲辰", "乙巳",
    "丙午", "丁未", "戊申", "己酉", "庚戌", "辛亥",
    "壬子", "癸丑", "甲寅", "乙卯", "丙辰", "丁巳",
    "戊午", "己未", "庚申", "辛酉", "壬戌", "癸亥",
];

/// Hangul names of the 60 terms.
pub const TERM_HANGUL: [&str; 60] = [
    "갑자", "을축", "병인", "정묘", "무진", "기사",
    "경오", "신미", "임신", "계유", "갑술", "을해",
    "병자", "정축", "무인", "기묘", "경진", "신사",
    "임오", "계미", "갑신", "을유", "병술", "정해",
    "무자", "기축", "경인", "신묘", "임진", "계사",
    "갑오", "을미", "병신", "정유", "무술", "기해",
    "경자", "신축", "임인", "계묘", "갑진", "을사",
    "병오", "정미", "무신", "기유", "경술", "신해",
    "임자", "계축", "갑인", "을묘", "병진", "정사",
    "무오", "기미", "경신", "신유", "임술", "계해",
];

/// All 60 terms in cycle order.
pub const CYCLE: [SexagenaryTerm; 60] = {
    let mut out = [SexagenaryTerm { index: 0 }; 60];
    let mut i = 0;
    while i < 60 {
        out[i] = SexagenaryTerm { index: i as u8 };
        i += 1;
    }
    out
};

/// Cycle index of the tiger month for each year-stem class (year stem mod 5).
///
/// Jia/Ji → bingyin, Yi/Geng → wuyin, Bing/Xin → gengyin, Ding/Ren → renyin,
/// Wu/Gui → jiayin.
pub const TIGER_MONTH_START: [u8; 5] = [2, 14, 26, 38, 50];

/// Cycle index of the rat hour for each day-stem class (day stem mod 5).
///
/// Jia/Ji → jiazi, Yi/Geng → bingzi, Bing/Xin → wuzi, Ding/Ren → gengzi,
/// Wu/Gui → renzi.
pub const RAT_HOUR_START: [u8; 5] = [0, 12, 24, 36, 48];

impl SexagenaryTerm {
    /// Term for a 0-based cycle index. Returns None if index >= 60.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 60 {
            Some(Self { index })
        } else {
            None
        }
    }

    /// Term for any integer index, wrapped into the cycle.
    pub const fn wrapping(index: i64) -> Self {
        Self {
            index: index.rem_euclid(60) as u8,
        }
    }

    /// Term for a (stem, branch) pair. Returns None for mixed-parity pairs.
    pub const fn from_parts(stem: Stem, branch: Branch) -> Option<Self> {
        let s = stem.index() as i32;
        let b = branch.index() as i32;
        if (s - b) % 2 != 0 {
            return None;
        }
        // i ≡ s (mod 10) and i ≡ b (mod 12)
        Some(Self {
            index: (6 * s - 5 * b).rem_euclid(60) as u8,
        })
    }

    /// 0-based cycle index (0 = jiazi).
    pub const fn index(self) -> u8 {
        self.index
    }

    pub const fn stem(self) -> Stem {
        ALL_STEMS[(self.index % 10) as usize]
    }

    pub const fn branch(self) -> Branch {
        ALL_BRANCHES[(self.index % 12) as usize]
    }

    /// The term `n` places later in the cycle (negative `n` goes back).
    pub const fn offset(self, n: i64) -> Self {
        Self {
            index: ((self.index as i64 + n.rem_euclid(60)) % 60) as u8,
        }
    }

    pub const fn name(self) -> &'static str {
        TERM_NAMES[self.index as usize]
    }

    pub const fn hanja(self) -> &'static str {
        TERM_HANJA[self.index as usize]
    }

    pub const fn hangul(self) -> &'static str {
        TERM_HANGUL[self.index as usize]
    }

    /// The ten-term decade (xun) this term belongs to, 0-5.
    pub const fn decade(self) -> u8 {
        self.index / 10
    }

    /// The two branches the term's decade does not reach (gongmang).
    pub const fn void_branches(self) -> [Branch; 2] {
        // The decade starts at jia; its branch is this branch moved back by the stem index.
        let start = self.branch().offset(-(self.stem().index() as i64));
        [start.offset(10), start.offset(11)]
    }
}

impl Display for SexagenaryTerm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hanja())
    }
}

impl FromStr for SexagenaryTerm {
    type Err = BaseError;

    /// Accepts a pinyin, hanja or hangul term name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        (0..60usize)
            .find(|&i| {
                TERM_NAMES[i].eq_ignore_ascii_case(t) || TERM_HANJA[i] == t || TERM_HANGUL[i] == t
            })
            .map(|i| CYCLE[i])
            .ok_or_else(|| BaseError::unknown("sexagenary term", s))
    }
}

impl Serialize for SexagenaryTerm {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for SexagenaryTerm {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Month term for a year stem and a solar-term month offset.
///
/// `month_offset` 0 is the tiger (yin) month beginning at lichun; 11 is the
/// ox (chou) month that closes the cycle. Offsets wrap modulo 12.
pub const fn month_term(year_stem: Stem, month_offset: u8) -> SexagenaryTerm {
    let start = TIGER_MONTH_START[(year_stem.index() % 5) as usize];
    SexagenaryTerm {
        index: (start + month_offset % 12) % 60,
    }
}

/// Hour term for a day stem and a double-hour branch.
pub const fn hour_term(day_stem: Stem, hour_branch: Branch) -> SexagenaryTerm {
    let start = RAT_HOUR_START[(day_stem.index() % 5) as usize];
    SexagenaryTerm {
        index: (start + hour_branch.index()) % 60,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn cycle_has_no_duplicates() {
        let pairs: HashSet<_> = CYCLE.iter().map(|t| (t.stem(), t.branch())).collect();
        assert_eq!(pairs.len(), 60);
    }

    #[test]
    fn from_parts_inverts_stem_branch() {
        for t in CYCLE {
            assert_eq!(SexagenaryTerm::from_parts(t.stem(), t.branch()), Some(t));
        }
        assert_eq!(SexagenaryTerm::from_parts(Stem::Jia, Branch::Chou), None);
    }

    #[test]
    fn names_match_parts() {
        for t in CYCLE {
            let expected = format!("{}{}", t.stem().name(), t.branch().name());
            assert_eq!(t.name(), expected);
            let hanja = format!("{}{}", t.stem().hanja(), t.branch().hanja());
            assert_eq!(t.hanja(), hanja);
            let hangul = format!("{}{}", t.stem().hangul(), t.branch().hangul());
            assert_eq!(t.hangul(), hangul);
        }
    }

    #[test]
    fn offset_is_closed_mod_60() {
        let t = SexagenaryTerm::from_index(58).unwrap();
        assert_eq!(t.offset(3).index(), 1);
        assert_eq!(t.offset(-60), t);
        assert_eq!(SexagenaryTerm::wrapping(-1).name(), "guihai");
    }

    #[test]
    fn void_branches_of_first_decade() {
        let jiazi = CYCLE[0];
        assert_eq!(jiazi.void_branches(), [Branch::Xu, Branch::Hai]);
        // bingwu sits in the jiachen decade, void yin/mao
        let bingwu: SexagenaryTerm = "bingwu".parse().unwrap();
        assert_eq!(bingwu.decade(), 4);
        assert_eq!(bingwu.void_branches(), [Branch::Yin, Branch::Mao]);
    }

    #[test]
    fn void_branches_never_in_decade() {
        for t in CYCLE {
            let start = t.decade() * 10;
            for i in start..start + 10 {
                assert!(!t.void_branches().contains(&CYCLE[i as usize].branch()));
            }
        }
    }

    #[test]
    fn month_terms_start_with_tiger() {
        for s in ALL_STEMS {
            assert_eq!(month_term(s, 0).branch(), Branch::Yin);
            assert_eq!(month_term(s, 11).branch(), Branch::Chou);
        }
        assert_eq!(month_term(Stem::Jia, 0).name(), "bingyin");
        assert_eq!(month_term(Stem::Xin, 9).name(), "jihai");
    }

    #[test]
    fn hour_terms_start_with_rat() {
        assert_eq!(hour_term(Stem::Jia, Branch::Zi).name(), "jiazi");
        assert_eq!(hour_term(Stem::Bing, Branch::Yin).name(), "gengyin");
        assert_eq!(hour_term(Stem::Xin, Branch::Si).name(), "guisi");
        assert_eq!(hour_term(Stem::Gui, Branch::Zi).name(), "renzi");
    }

    #[test]
    fn parse_and_serde() {
        let t: SexagenaryTerm = "辛亥".parse().unwrap();
        assert_eq!(t.index(), 47);
        assert_eq!("신해".parse::<SexagenaryTerm>().unwrap(), t);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"xinhai\"");
        let back: SexagenaryTerm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
        assert!("jiachou".parse::<SexagenaryTerm>().is_err());
    }
}
