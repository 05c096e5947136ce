//! Solar-term month boundaries.
//!
//! Months of the four-pillars calendar begin at the twelve "jie" solar terms
//! rather than on the 1st. Term dates drift by a day or so from year to year;
//! this table uses one fixed day-of-month per calendar month instead of an
//! astronomical computation.

use serde::{Deserialize, Serialize};

use crate::branch::Branch;

/// First day of the solar-term month that starts in each calendar month
/// (index 0 = January).
pub const SOLAR_TERM_BREAKPOINTS: [u8; 12] = [6, 4, 6, 5, 6, 6, 7, 8, 8, 8, 7, 7];

/// The 12 month-opening solar terms, in month order from lichun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolarTerm {
    Lichun,
    Jingzhe,
    Qingming,
    Lixia,
    Mangzhong,
    Xiaoshu,
    Liqiu,
    Bailu,
    Hanlu,
    Lidong,
    Daxue,
    Xiaohan,
}

/// All 12 month-opening terms (index 0 = Lichun).
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Lichun,
    SolarTerm::Jingzhe,
    SolarTerm::Qingming,
    SolarTerm::Lixia,
    SolarTerm::Mangzhong,
    SolarTerm::Xiaoshu,
    SolarTerm::Liqiu,
    SolarTerm::Bailu,
    SolarTerm::Hanlu,
    SolarTerm::Lidong,
    SolarTerm::Daxue,
    SolarTerm::Xiaohan,
];

impl SolarTerm {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lichun => "lichun",
            Self::Jingzhe => "jingzhe",
            Self::Qingming => "qingming",
            Self::Lixia => "lixia",
            Self::Mangzhong => "mangzhong",
            Self::Xiaoshu => "xiaoshu",
            Self::Liqiu => "liqiu",
            Self::Bailu => "bailu",
            Self::Hanlu => "hanlu",
            Self::Lidong => "lidong",
            Self::Daxue => "daxue",
            Self::Xiaohan => "xiaohan",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Lichun => "입춘",
            Self::Jingzhe => "경칩",
            Self::Qingming => "청명",
            Self::Lixia => "입하",
            Self::Mangzhong => "망종",
            Self::Xiaoshu => "소서",
            Self::Liqiu => "입추",
            Self::Bailu => "백로",
            Self::Hanlu => "한로",
            Self::Lidong => "입동",
            Self::Daxue => "대설",
            Self::Xiaohan => "소한",
        }
    }

    /// 0-based index; equal to the solar-term month offset it opens.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Calendar month (1-12) in which the term falls.
    pub const fn calendar_month(self) -> u32 {
        (self as u32 + 1) % 12 + 1
    }

    /// Branch of the month this term opens.
    pub const fn month_branch(self) -> Branch {
        Branch::Yin.offset(self as i64)
    }
}

/// A solar-term month resolved from a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarMonth {
    /// 0 = tiger (yin) month, 11 = ox (chou) month.
    pub offset: u8,
    /// The month belongs to the previous calendar year's term sequence
    /// (dates before lichun).
    pub previous_year: bool,
}

impl SolarMonth {
    pub const fn branch(self) -> Branch {
        Branch::Yin.offset(self.offset as i64)
    }

    /// The solar term that opened this month.
    pub const fn term(self) -> SolarTerm {
        ALL_SOLAR_TERMS[(self.offset % 12) as usize]
    }
}

/// Day-of-month breakpoints for the 12 month-opening terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTermTable {
    breakpoints: [u8; 12],
}

impl Default for SolarTermTable {
    fn default() -> Self {
        Self::new(SOLAR_TERM_BREAKPOINTS)
    }
}

impl SolarTermTable {
    pub const fn new(breakpoints: [u8; 12]) -> Self {
        Self { breakpoints }
    }

    pub const fn breakpoints(&self) -> [u8; 12] {
        self.breakpoints
    }

    /// Every breakpoint lies on a day that exists in every month (1-28).
    pub fn is_valid(&self) -> bool {
        self.breakpoints.iter().all(|d| (1..=28).contains(d))
    }

    /// Solar-term month containing `month`/`day` (1-based calendar fields).
    ///
    /// Dates before the breakpoint of their calendar month belong to the
    /// previous solar-term month. January, and February before lichun, fall
    /// in the previous year's term sequence.
    pub fn solar_month(&self, month: u32, day: u32) -> SolarMonth {
        let m = month.clamp(1, 12);
        let starts_here = day >= self.breakpoints[(m - 1) as usize] as u32;
        // The term month opening in calendar month m has offset m - 2.
        let raw = m as i32 - if starts_here { 2 } else { 3 };
        SolarMonth {
            offset: raw.rem_euclid(12) as u8,
            previous_year: raw < 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lichun_opens_tiger_month() {
        let t = SolarTermTable::default();
        assert_eq!(t.solar_month(2, 4), SolarMonth { offset: 0, previous_year: false });
        assert_eq!(t.solar_month(2, 4).branch(), Branch::Yin);
        assert_eq!(t.solar_month(2, 4).term(), SolarTerm::Lichun);
    }

    #[test]
    fn before_lichun_is_previous_year_ox_month() {
        let t = SolarTermTable::default();
        let m = t.solar_month(2, 3);
        assert_eq!(m.branch(), Branch::Chou);
        assert!(m.previous_year);
    }

    #[test]
    fn january_wraps() {
        let t = SolarTermTable::default();
        assert_eq!(t.solar_month(1, 5), SolarMonth { offset: 10, previous_year: true });
        assert_eq!(t.solar_month(1, 6), SolarMonth { offset: 11, previous_year: true });
    }

    #[test]
    fn november_breakpoint() {
        let t = SolarTermTable::default();
        assert_eq!(t.solar_month(11, 6).branch(), Branch::Xu);
        assert_eq!(t.solar_month(11, 7).branch(), Branch::Hai);
        assert_eq!(t.solar_month(11, 17).term(), SolarTerm::Lidong);
    }

    #[test]
    fn december_after_daxue_is_rat_month() {
        let t = SolarTermTable::default();
        let m = t.solar_month(12, 25);
        assert_eq!(m.branch(), Branch::Zi);
        assert!(!m.previous_year);
    }

    #[test]
    fn term_calendar_months() {
        assert_eq!(SolarTerm::Lichun.calendar_month(), 2);
        assert_eq!(SolarTerm::Daxue.calendar_month(), 12);
        assert_eq!(SolarTerm::Xiaohan.calendar_month(), 1);
        for term in ALL_SOLAR_TERMS {
            assert_eq!(term.month_branch(), SolarMonth { offset: term.index(), previous_year: false }.branch());
        }
    }

    #[test]
    fn validity() {
        assert!(SolarTermTable::default().is_valid());
        let mut bp = SOLAR_TERM_BREAKPOINTS;
        bp[3] = 31;
        assert!(!SolarTermTable::new(bp).is_valid());
    }
}
