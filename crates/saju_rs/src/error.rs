//! Unified error type for the convenience layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use saju_chart::ChartError;
use saju_score::ScoreError;
use saju_time::TimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SajuError {
    /// `init()` was called more than once.
    AlreadyInitialized,
    /// Date text could not be parsed.
    Time(TimeError),
    /// Natal data missing or a chart config is invalid.
    Chart(ChartError),
    /// Scoring failed or a fortune config is invalid.
    Score(ScoreError),
}

impl Display for SajuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyInitialized => write!(f, "configuration already initialized"),
            Self::Time(e) => write!(f, "{e}"),
            Self::Chart(e) => write!(f, "{e}"),
            Self::Score(e) => write!(f, "{e}"),
        }
    }
}

impl Error for SajuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AlreadyInitialized => None,
            Self::Time(e) => Some(e),
            Self::Chart(e) => Some(e),
            Self::Score(e) => Some(e),
        }
    }
}

impl From<TimeError> for SajuError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<ChartError> for SajuError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<ScoreError> for SajuError {
    fn from(e: ScoreError) -> Self {
        Self::Score(e)
    }
}
