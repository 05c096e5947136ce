//! Compatibility scoring and time-bonus fortune.
//!
//! This crate provides:
//! - A shared pair context over two charts (roles, interactions, balances)
//! - Twenty dimension scorers grouped into four named reports
//! - Yearly, monthly and daily fortune relative to a natal chart
//! - Parallel ranking of many candidates against one chart

pub mod context;
pub mod dimensions;
pub mod error;
pub mod fortune;
pub mod fortune_types;
pub mod rank;
pub mod report;
pub mod score;

pub use context::{PairContext, Partner, Side};
pub use dimensions::score_dimension;
pub use error::ScoreError;
pub use fortune::{fortune, fortune_all, fortune_base, period_bonus, preferred_phases};
pub use fortune_types::{
    ALL_FORTUNE_CATEGORIES, FortuneCategory, FortuneConfig, FortuneReport, Period, PeriodFortune,
};
pub use rank::{RankedCandidate, rank_candidates};
pub use report::{
    ALL_REPORT_KINDS, CompatibilityReport, FullCompatibility, ReportKind, compatibility_report,
    full_compatibility, natal_compatibility,
};
pub use score::{ALL_DIMENSIONS, Dimension, DimensionScore, TIER_THRESHOLDS, Tier};
