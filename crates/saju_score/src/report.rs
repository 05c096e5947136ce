//! Named groups of dimension scores and the full compatibility run.

use serde::{Deserialize, Serialize};
use tracing::debug;

use saju_chart::{NatalRecord, PillarConfig, resolve_chart};
use saju_time::LunarSolarNormalizer;

use crate::context::{PairContext, Partner};
use crate::dimensions::score_dimension;
use crate::error::ScoreError;
use crate::score::{Dimension, DimensionScore, Tier};

/// The four compatibility reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Relationship,
    Practical,
    Depth,
    Special,
}

pub const ALL_REPORT_KINDS: [ReportKind; 4] = [
    ReportKind::Relationship,
    ReportKind::Practical,
    ReportKind::Depth,
    ReportKind::Special,
];

impl ReportKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Relationship => "relationship",
            Self::Practical => "practical",
            Self::Depth => "depth",
            Self::Special => "special",
        }
    }

    pub const fn dimensions(self) -> &'static [Dimension] {
        match self {
            Self::Relationship => &[
                Dimension::Attraction,
                Dimension::Communication,
                Dimension::Trust,
                Dimension::ConflictResolution,
                Dimension::Intimacy,
                Dimension::EmotionalSupport,
                Dimension::Longevity,
            ],
            Self::Practical => &[
                Dimension::Finance,
                Dimension::Household,
                Dimension::Career,
                Dimension::Family,
                Dimension::Children,
            ],
            Self::Depth => &[
                Dimension::Values,
                Dimension::Temperament,
                Dimension::Growth,
                Dimension::FateBond,
            ],
            Self::Special => &[
                Dimension::SpouseStar,
                Dimension::NoblemanSupport,
                Dimension::VoidRisk,
                Dimension::CollisionRisk,
            ],
        }
    }

    fn summary(self, tier: Tier) -> &'static str {
        match (self, tier) {
            (Self::Relationship, Tier::VeryGood) => {
                "A naturally close pairing; affection and understanding come easily."
            }
            (Self::Relationship, Tier::Good) => {
                "A warm relationship with a few points that need attention."
            }
            (Self::Relationship, Tier::Fair) => {
                "Workable chemistry; steady effort keeps the relationship balanced."
            }
            (Self::Relationship, Tier::Caution) => {
                "Friction shows up often; patience and clear talk are needed."
            }
            (Self::Relationship, Tier::Risk) => {
                "Strong tension between the charts; the relationship needs deliberate care."
            }
            (Self::Practical, Tier::VeryGood) => "Money, home and family matters run smoothly together.",
            (Self::Practical, Tier::Good) => "Daily life fits well with minor adjustments.",
            (Self::Practical, Tier::Fair) => "Practical matters need explicit agreements.",
            (Self::Practical, Tier::Caution) => "Household and money questions are likely sore spots.",
            (Self::Practical, Tier::Risk) => "Practical life together meets repeated obstacles.",
            (Self::Depth, Tier::VeryGood) => "Values and temperaments reinforce each other deeply.",
            (Self::Depth, Tier::Good) => "Shared outlook with room to grow together.",
            (Self::Depth, Tier::Fair) => "Different natures that can complement each other.",
            (Self::Depth, Tier::Caution) => "Core values pull in different directions.",
            (Self::Depth, Tier::Risk) => "Fundamental outlooks clash.",
            (Self::Special, Tier::VeryGood) => "Auspicious signs strongly favor the pairing.",
            (Self::Special, Tier::Good) => "Mostly favorable signs with little risk.",
            (Self::Special, Tier::Fair) => "Mixed signs; neither strongly helped nor harmed.",
            (Self::Special, Tier::Caution) => "Several warning signs deserve attention.",
            (Self::Special, Tier::Risk) => "Heavy clash and void signs weigh on the pairing.",
        }
    }
}

/// One named report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    pub kind: ReportKind,
    /// Present dimensions only, in report order.
    pub dimensions: Vec<DimensionScore>,
    /// Rounded mean of the present dimensions.
    pub average: u8,
    pub tier: Tier,
    pub summary: String,
}

impl CompatibilityReport {
    pub fn get(&self, dimension: Dimension) -> Option<&DimensionScore> {
        self.dimensions.iter().find(|d| d.dimension == dimension)
    }
}

/// All four reports plus the overall mean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullCompatibility {
    pub reports: Vec<CompatibilityReport>,
    /// Rounded mean of every present dimension.
    pub overall: u8,
    pub overall_tier: Tier,
}

impl FullCompatibility {
    pub fn report(&self, kind: ReportKind) -> Option<&CompatibilityReport> {
        self.reports.iter().find(|r| r.kind == kind)
    }

    pub fn dimensions(&self) -> impl Iterator<Item = &DimensionScore> {
        self.reports.iter().flat_map(|r| r.dimensions.iter())
    }
}

fn rounded_mean<'a>(scores: impl Iterator<Item = &'a DimensionScore>) -> u8 {
    let (sum, n) = scores.fold((0u32, 0u32), |(s, n), d| (s + u32::from(d.score), n + 1));
    if n == 0 {
        0
    } else {
        ((sum + n / 2) / n) as u8
    }
}

/// Score one report. Dimensions lacking inputs are left out.
pub fn compatibility_report(kind: ReportKind, ctx: &PairContext) -> CompatibilityReport {
    let dimensions: Vec<DimensionScore> = kind
        .dimensions()
        .iter()
        .filter_map(|&d| score_dimension(d, ctx))
        .collect();
    let average = rounded_mean(dimensions.iter());
    let tier = Tier::from_score(average);
    CompatibilityReport {
        kind,
        summary: format!("{} ({average}) {}", tier.hangul(), kind.summary(tier)),
        dimensions,
        average,
        tier,
    }
}

/// Score all four reports for a pair.
pub fn full_compatibility(a: &Partner, b: &Partner) -> FullCompatibility {
    let ctx = PairContext::new(a, b);
    let reports: Vec<CompatibilityReport> = ALL_REPORT_KINDS
        .iter()
        .map(|&k| compatibility_report(k, &ctx))
        .collect();
    let overall = rounded_mean(reports.iter().flat_map(|r| r.dimensions.iter()));
    debug!(
        a = %a.chart,
        b = %b.chart,
        overall,
        "compatibility scored"
    );
    FullCompatibility {
        reports,
        overall,
        overall_tier: Tier::from_score(overall),
    }
}

/// Resolve two natal records and score them.
pub fn natal_compatibility<N: LunarSolarNormalizer + ?Sized>(
    a: &NatalRecord,
    b: &NatalRecord,
    normalizer: &N,
    config: &PillarConfig,
) -> Result<FullCompatibility, ScoreError> {
    let na = resolve_chart(a, normalizer, config)?;
    let nb = resolve_chart(b, normalizer, config)?;
    Ok(full_compatibility(&Partner::from(&na), &Partner::from(&nb)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::ALL_DIMENSIONS;

    #[test]
    fn reports_partition_all_dimensions() {
        let mut seen: Vec<Dimension> = ALL_REPORT_KINDS
            .iter()
            .flat_map(|k| k.dimensions().iter().copied())
            .collect();
        seen.sort();
        let mut all = ALL_DIMENSIONS.to_vec();
        all.sort();
        assert_eq!(seen, all);
        assert_eq!(ReportKind::Relationship.dimensions().len(), 7);
        assert_eq!(ReportKind::Practical.dimensions().len(), 5);
        assert_eq!(ReportKind::Depth.dimensions().len(), 4);
        assert_eq!(ReportKind::Special.dimensions().len(), 4);
    }

    #[test]
    fn mean_rounds_half_up() {
        let mk = |score| DimensionScore {
            dimension: Dimension::Trust,
            score,
            tier: Tier::from_score(score),
            positives: vec![],
            negatives: vec![],
            description: String::new(),
        };
        let v = [mk(70), mk(71)];
        assert_eq!(rounded_mean(v.iter()), 71);
        assert_eq!(rounded_mean(std::iter::empty()), 0);
    }
}
