//! Error types for scoring.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_chart::ChartError;

/// Errors from compatibility or fortune scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    /// A natal record could not be charted.
    Chart(ChartError),
    /// Configuration parameter is out of range.
    InvalidConfig(&'static str),
}

impl Display for ScoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chart(e) => write!(f, "chart error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ScoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Chart(e) => Some(e),
            Self::InvalidConfig(_) => None,
        }
    }
}

impl From<ChartError> for ScoreError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}
