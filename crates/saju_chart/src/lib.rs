//! Four-pillars chart calculator.
//!
//! This crate provides:
//! - Year / month / day / hour pillar derivation from a civil date-time
//! - The immutable `FourPillarsChart` and its display forms
//! - Five-phase balance, phase counts and ten-role profiles
//! - Natal records with lunar normalization and snapshot verification

pub mod balance;
pub mod chart_types;
pub mod config;
pub mod error;
pub mod natal;
pub mod pillars;
pub mod profile;

pub use balance::{CountBand, PhaseBalance, PhaseCounts, raw_weights};
pub use chart_types::{ALL_PILLAR_ROLES, DatePillars, FourPillarsChart, Pillar, PillarRole};
pub use config::{DAY_EPOCH_INDEX, PillarConfig, YEAR_EPOCH};
pub use error::ChartError;
pub use natal::{
    BirthDate, BirthTime, ChartSnapshot, Gender, NatalChart, NatalRecord, SnapshotStatus,
    birth_date_time, resolve_chart,
};
pub use pillars::{
    date_pillars, day_pillar, four_pillars, four_pillars_lenient, hour_pillar, month_pillar,
    year_pillar,
};
pub use profile::{DayMasterProfile, DayMasterStrength, RoleProfile, favorable_phases};
