//! Convenience wrapper for the saju calculation engine.
//!
//! Provides a process-wide configuration and high-level functions that take
//! caller dates directly, so callers never thread `PillarConfig` or
//! `FortuneConfig` through by hand.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! init(SajuConfig::default()).expect("config init");
//!
//! let birth: SajuDate = "1971-11-17 04:00".parse().unwrap();
//! let c = chart(birth);
//! println!("{c}"); // 辛亥 己亥 丙午 庚寅
//! ```

pub mod convenience;
pub mod date;
pub mod error;
pub mod global;

pub use convenience::{
    chart, compatibility, day_master, day_master_relation, fortune, fortune_all, interactions,
    interactions_within, natal, phase_balance, rank, role_profile,
};
pub use date::SajuDate;
pub use error::SajuError;
pub use global::{SajuConfig, config, init, is_initialized};

// Re-export the types the convenience functions hand back.
pub use saju_base::{
    Branch, BranchInteraction, Detection, InteractionKind, Phase, PhaseRelation, SexagenaryTerm,
    Stem, TenRole,
};
pub use saju_chart::{
    BirthDate, BirthTime, DayMasterProfile, DayMasterStrength, FourPillarsChart, Gender,
    NatalChart, NatalRecord, PhaseBalance, PillarConfig, PillarRole, RoleProfile, SnapshotStatus,
};
pub use saju_score::{
    CompatibilityReport, Dimension, DimensionScore, FortuneCategory, FortuneConfig, FortuneReport,
    FullCompatibility, PeriodFortune, RankedCandidate, ReportKind, Tier,
};
pub use saju_time::{CivilDate, CivilDateTime, LunarDate, LunarSolarNormalizer, NoLunarSupport};
