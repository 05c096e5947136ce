//! Natal records from an external provider and their charts.
//!
//! A record may carry a previously serialized chart snapshot. Snapshots are
//! never trusted: the chart is always recomputed from the birth data, and a
//! snapshot that disagrees is reported and logged.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use saju_base::SexagenaryTerm;
use saju_time::{CivilDate, CivilDateTime, LunarDate, LunarSolarNormalizer};
use tracing::{debug, warn};

use crate::balance::PhaseBalance;
use crate::chart_types::FourPillarsChart;
use crate::config::PillarConfig;
use crate::error::ChartError;
use crate::pillars::four_pillars;

/// Birth date on either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "calendar", rename_all = "lowercase")]
pub enum BirthDate {
    Solar { date: CivilDate },
    Lunar { date: LunarDate },
}

/// Wall-clock birth time. Out-of-range values roll over like any calendar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthTime {
    pub hour: u8,
    #[serde(default)]
    pub minute: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Four terms as stored by a record provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub year: SexagenaryTerm,
    pub month: SexagenaryTerm,
    pub day: SexagenaryTerm,
    pub hour: SexagenaryTerm,
}

impl From<&FourPillarsChart> for ChartSnapshot {
    fn from(c: &FourPillarsChart) -> Self {
        Self {
            year: c.year(),
            month: c.month(),
            day: c.day(),
            hour: c.hour(),
        }
    }
}

impl ChartSnapshot {
    pub fn matches(&self, chart: &FourPillarsChart) -> bool {
        *self == ChartSnapshot::from(chart)
    }
}

impl Display for ChartSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// Birth data supplied by a natal-record provider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NatalRecord {
    #[serde(default)]
    pub birth_date: Option<BirthDate>,
    #[serde(default)]
    pub birth_time: Option<BirthTime>,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub snapshot: Option<ChartSnapshot>,
}

impl NatalRecord {
    /// Record for a solar birth date-time.
    pub fn solar(dt: CivilDateTime, gender: Option<Gender>) -> Self {
        Self {
            birth_date: Some(BirthDate::Solar { date: dt.date() }),
            birth_time: Some(BirthTime {
                hour: dt.hour() as u8,
                minute: dt.minute() as u8,
            }),
            gender,
            snapshot: None,
        }
    }

    /// Record for a lunar birth date and time.
    pub fn lunar(date: LunarDate, time: BirthTime, gender: Option<Gender>) -> Self {
        Self {
            birth_date: Some(BirthDate::Lunar { date }),
            birth_time: Some(time),
            gender,
            snapshot: None,
        }
    }

    pub fn with_snapshot(mut self, snapshot: ChartSnapshot) -> Self {
        self.snapshot = Some(snapshot);
        self
    }
}

/// How a stored snapshot compared with the recomputed chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotStatus {
    Absent,
    Matched,
    Drifted,
}

/// A recomputed natal chart with what the engine derives from it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NatalChart {
    pub birth: CivilDateTime,
    pub chart: FourPillarsChart,
    pub balance: PhaseBalance,
    pub gender: Option<Gender>,
    pub snapshot: SnapshotStatus,
}

/// Solar birth date-time of a record, resolving lunar dates through `normalizer`.
pub fn birth_date_time<N: LunarSolarNormalizer + ?Sized>(
    record: &NatalRecord,
    normalizer: &N,
) -> Result<CivilDateTime, ChartError> {
    let date = match record.birth_date.ok_or(ChartError::MissingBirthDate)? {
        BirthDate::Solar { date } => date,
        BirthDate::Lunar { date } => {
            let solar = normalizer.resolve(date)?;
            debug!(lunar = %date, solar = %solar, "lunar birth date normalized");
            solar
        }
    };
    let time = record.birth_time.ok_or(ChartError::MissingBirthTime)?;
    Ok(CivilDateTime::at(date, time.hour as i64, time.minute as i64))
}

/// Chart a natal record.
///
/// Fails when the birth date or time is missing, or when a lunar date cannot
/// be normalized. A mismatching snapshot is logged and otherwise ignored.
pub fn resolve_chart<N: LunarSolarNormalizer + ?Sized>(
    record: &NatalRecord,
    normalizer: &N,
    config: &PillarConfig,
) -> Result<NatalChart, ChartError> {
    let birth = birth_date_time(record, normalizer)?;
    let chart = four_pillars(birth, config);
    let snapshot = match &record.snapshot {
        None => SnapshotStatus::Absent,
        Some(s) if s.matches(&chart) => SnapshotStatus::Matched,
        Some(s) => {
            warn!(
                stored = %s,
                computed = %chart,
                "stored chart snapshot disagrees with recomputed chart"
            );
            SnapshotStatus::Drifted
        }
    };
    Ok(NatalChart {
        birth,
        chart,
        balance: PhaseBalance::from_chart(&chart),
        gender: record.gender,
        snapshot,
    })
}
