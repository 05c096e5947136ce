//! Error types for calendar parsing and lunar normalization.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::lunar::LunarDate;

/// Errors from date parsing or lunar-to-solar conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date or date-time text could not be parsed.
    Parse(String),
    /// The lunar-solar normalizer had no solar date for this lunar date.
    UnresolvedLunarDate(LunarDate),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::UnresolvedLunarDate(d) => {
                write!(f, "lunar date {d} has no solar equivalent")
            }
        }
    }
}

impl Error for TimeError {}
