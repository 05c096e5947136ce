//! Types for the time-bonus fortune calculator.

use serde::{Deserialize, Serialize};

use saju_base::{RoleGroup, SexagenaryTerm};

use crate::error::ScoreError;

/// Reading category. Each one prefers the phases of certain role groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FortuneCategory {
    Overall,
    Wealth,
    Love,
    Career,
    Health,
    Study,
}

pub const ALL_FORTUNE_CATEGORIES: [FortuneCategory; 6] = [
    FortuneCategory::Overall,
    FortuneCategory::Wealth,
    FortuneCategory::Love,
    FortuneCategory::Career,
    FortuneCategory::Health,
    FortuneCategory::Study,
];

impl FortuneCategory {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Wealth => "wealth",
            Self::Love => "love",
            Self::Career => "career",
            Self::Health => "health",
            Self::Study => "study",
        }
    }

    /// Role groups whose phases this category prefers.
    ///
    /// `Overall` has none of its own; it uses the day master's favorable phases.
    pub const fn preferred_groups(self) -> &'static [RoleGroup] {
        match self {
            Self::Overall => &[],
            Self::Wealth => &[RoleGroup::Wealth, RoleGroup::Output],
            Self::Love => &[RoleGroup::Wealth, RoleGroup::Officer],
            Self::Career => &[RoleGroup::Officer, RoleGroup::Resource],
            Self::Health => &[RoleGroup::Companion, RoleGroup::Resource],
            Self::Study => &[RoleGroup::Resource, RoleGroup::Output],
        }
    }
}

impl std::str::FromStr for FortuneCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FORTUNE_CATEGORIES
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown fortune category: {s}"))
    }
}

/// Granularity of a fortune period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Year,
    Month,
    Day,
}

/// Score for one period pillar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodFortune {
    pub period: Period,
    pub term: SexagenaryTerm,
    /// Bonus from this period's own pillar.
    pub bonus: i32,
    /// Share of the coarser period's bonus carried into this one.
    pub carried: i32,
    pub score: u8,
    pub factors: Vec<String>,
}

impl PeriodFortune {
    /// Own bonus plus carried share.
    pub const fn total_bonus(&self) -> i32 {
        self.bonus + self.carried
    }
}

/// Yearly, monthly and daily fortune for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneReport {
    pub category: FortuneCategory,
    /// Natal baseline before any period bonus.
    pub base: i32,
    pub yearly: PeriodFortune,
    pub monthly: PeriodFortune,
    pub daily: PeriodFortune,
}

/// Clamp bounds and carry-over for period scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FortuneConfig {
    pub min_score: u8,
    pub max_score: u8,
    /// Fraction of the coarser period's bonus added to the finer one.
    pub carry_over: f64,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            min_score: 20,
            max_score: 90,
            carry_over: 0.3,
        }
    }
}

impl FortuneConfig {
    pub fn validate(&self) -> Result<(), ScoreError> {
        if self.min_score > self.max_score {
            return Err(ScoreError::InvalidConfig("min_score exceeds max_score"));
        }
        if self.max_score > 100 {
            return Err(ScoreError::InvalidConfig("max_score must be at most 100"));
        }
        if !self.carry_over.is_finite() || !(0.0..=1.0).contains(&self.carry_over) {
            return Err(ScoreError::InvalidConfig("carry_over must be within 0..=1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(FortuneConfig::default().validate().is_ok());
    }

    #[test]
    fn inverted_bounds_rejected() {
        let cfg = FortuneConfig {
            min_score: 80,
            max_score: 40,
            ..FortuneConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(ScoreError::InvalidConfig(_))));
    }

    #[test]
    fn nan_carry_rejected() {
        let cfg = FortuneConfig {
            carry_over: f64::NAN,
            ..FortuneConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn category_parse() {
        assert_eq!("Love".parse::<FortuneCategory>(), Ok(FortuneCategory::Love));
        assert!("luck".parse::<FortuneCategory>().is_err());
    }
}
