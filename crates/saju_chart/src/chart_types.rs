//! Four-pillars chart types.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use saju_base::{Branch, PillarView, SexagenaryTerm, Stem};

/// Position of a pillar in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PillarRole {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 pillar roles in chart order.
pub const ALL_PILLAR_ROLES: [PillarRole; 4] = [
    PillarRole::Year,
    PillarRole::Month,
    PillarRole::Day,
    PillarRole::Hour,
];

impl PillarRole {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Year => "年",
            Self::Month => "月",
            Self::Day => "日",
            Self::Hour => "時",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A sexagenary term tagged with its chart position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub role: PillarRole,
    pub term: SexagenaryTerm,
}

impl Pillar {
    pub const fn stem(self) -> Stem {
        self.term.stem()
    }

    pub const fn branch(self) -> Branch {
        self.term.branch()
    }
}

/// Four pillars computed from one normalized date-time.
///
/// Immutable: build a new chart rather than editing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "ChartRepr")]
pub struct FourPillarsChart {
    year: SexagenaryTerm,
    month: SexagenaryTerm,
    day: SexagenaryTerm,
    hour: SexagenaryTerm,
}

#[derive(Serialize)]
struct ChartRepr {
    pillars: [Pillar; 4],
    day_master: Stem,
    display: String,
}

impl From<FourPillarsChart> for ChartRepr {
    fn from(c: FourPillarsChart) -> Self {
        Self {
            pillars: c.pillars(),
            day_master: c.day_master(),
            display: c.display_string(),
        }
    }
}

impl FourPillarsChart {
    pub(crate) const fn new(
        year: SexagenaryTerm,
        month: SexagenaryTerm,
        day: SexagenaryTerm,
        hour: SexagenaryTerm,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    pub const fn year(&self) -> SexagenaryTerm {
        self.year
    }

    pub const fn month(&self) -> SexagenaryTerm {
        self.month
    }

    pub const fn day(&self) -> SexagenaryTerm {
        self.day
    }

    pub const fn hour(&self) -> SexagenaryTerm {
        self.hour
    }

    pub const fn term(&self, role: PillarRole) -> SexagenaryTerm {
        match role {
            PillarRole::Year => self.year,
            PillarRole::Month => self.month,
            PillarRole::Day => self.day,
            PillarRole::Hour => self.hour,
        }
    }

    pub fn pillar(&self, role: PillarRole) -> Pillar {
        Pillar {
            role,
            term: self.term(role),
        }
    }

    pub fn pillars(&self) -> [Pillar; 4] {
        ALL_PILLAR_ROLES.map(|r| self.pillar(r))
    }

    /// The day pillar's stem.
    pub const fn day_master(&self) -> Stem {
        self.day.stem()
    }

    pub fn stems(&self) -> [Stem; 4] {
        ALL_PILLAR_ROLES.map(|r| self.term(r).stem())
    }

    pub fn branches(&self) -> [Branch; 4] {
        ALL_PILLAR_ROLES.map(|r| self.term(r).branch())
    }

    /// Hidden stems of every branch, in pillar order, each paired with its
    /// position within the branch (0 = main stem).
    pub fn hidden_stems(&self) -> Vec<(PillarRole, usize, Stem)> {
        ALL_PILLAR_ROLES
            .iter()
            .flat_map(|&r| {
                self.term(r)
                    .branch()
                    .hidden_stems()
                    .iter()
                    .enumerate()
                    .map(move |(i, &s)| (r, i, s))
            })
            .collect()
    }

    /// The chart as input to the interaction detectors.
    pub const fn view(&self) -> PillarView {
        PillarView::new(self.year, self.month, self.day, self.hour)
    }

    /// Hanja terms in year, month, day, hour order: `辛亥 己亥 丙午 庚寅`.
    pub fn display_string(&self) -> String {
        self.join(|t| t.hanja())
    }

    /// Romanized terms in year, month, day, hour order.
    pub fn romanized(&self) -> String {
        self.join(|t| t.name())
    }

    /// Hangul terms in year, month, day, hour order.
    pub fn hangul(&self) -> String {
        self.join(|t| t.hangul())
    }

    fn join(&self, name: impl Fn(SexagenaryTerm) -> &'static str) -> String {
        ALL_PILLAR_ROLES
            .map(|r| name(self.term(r)))
            .join(" ")
    }
}

impl Display for FourPillarsChart {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_string())
    }
}

/// The year, month and day pillars of a calendar date (no hour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DatePillars {
    pub year: SexagenaryTerm,
    pub month: SexagenaryTerm,
    pub day: SexagenaryTerm,
}
