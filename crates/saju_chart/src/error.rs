//! Error types for chart construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_time::TimeError;

/// Errors from charting natal records or validating chart configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// The natal record has no birth date.
    MissingBirthDate,
    /// The natal record has no birth time.
    MissingBirthTime,
    /// Date parsing or lunar normalization failed.
    Time(TimeError),
    /// Configuration parameter is out of range.
    InvalidConfig(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingBirthDate => write!(f, "natal record has no birth date"),
            Self::MissingBirthTime => write!(f, "natal record has no birth time"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ChartError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
