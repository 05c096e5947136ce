//! Calendar arithmetic for the saju engine.
//!
//! This crate provides:
//! - Julian Day Number ↔ proleptic Gregorian conversions
//! - Lenient civil dates that roll overflowing fields over instead of failing
//! - The lunar date type and the `LunarSolarNormalizer` seam

pub mod civil;
pub mod error;
pub mod julian;
pub mod lunar;

pub use civil::{CivilDate, CivilDateTime};
pub use error::TimeError;
pub use julian::{J2000_JDN, UNIX_EPOCH_JDN, calendar_to_jdn, days_between, jdn_to_calendar};
pub use lunar::{LunarDate, LunarSolarNormalizer, NoLunarSupport};
