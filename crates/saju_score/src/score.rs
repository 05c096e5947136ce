//! Dimension scores, tiers and the score builder shared by every dimension.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Score band from fixed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    VeryGood,
    Good,
    Fair,
    Caution,
    Risk,
}

/// Lower bounds of VeryGood, Good, Fair and Caution.
pub const TIER_THRESHOLDS: [u8; 4] = [85, 70, 50, 30];

impl Tier {
    pub const fn from_score(score: u8) -> Self {
        if score >= TIER_THRESHOLDS[0] {
            Self::VeryGood
        } else if score >= TIER_THRESHOLDS[1] {
            Self::Good
        } else if score >= TIER_THRESHOLDS[2] {
            Self::Fair
        } else if score >= TIER_THRESHOLDS[3] {
            Self::Caution
        } else {
            Self::Risk
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::VeryGood => "very good",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Caution => "caution",
            Self::Risk => "risk",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::VeryGood => "매우 좋음",
            Self::Good => "좋음",
            Self::Fair => "보통",
            Self::Caution => "주의",
            Self::Risk => "위험",
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The 20 compatibility dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Attraction,
    Communication,
    Trust,
    ConflictResolution,
    Intimacy,
    EmotionalSupport,
    Longevity,
    Finance,
    Household,
    Career,
    Family,
    Children,
    Values,
    Temperament,
    Growth,
    FateBond,
    SpouseStar,
    NoblemanSupport,
    VoidRisk,
    CollisionRisk,
}

pub const ALL_DIMENSIONS: [Dimension; 20] = [
    Dimension::Attraction,
    Dimension::Communication,
    Dimension::Trust,
    Dimension::ConflictResolution,
    Dimension::Intimacy,
    Dimension::EmotionalSupport,
    Dimension::Longevity,
    Dimension::Finance,
    Dimension::Household,
    Dimension::Career,
    Dimension::Family,
    Dimension::Children,
    Dimension::Values,
    Dimension::Temperament,
    Dimension::Growth,
    Dimension::FateBond,
    Dimension::SpouseStar,
    Dimension::NoblemanSupport,
    Dimension::VoidRisk,
    Dimension::CollisionRisk,
];

impl Dimension {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Attraction => "attraction",
            Self::Communication => "communication",
            Self::Trust => "trust",
            Self::ConflictResolution => "conflict_resolution",
            Self::Intimacy => "intimacy",
            Self::EmotionalSupport => "emotional_support",
            Self::Longevity => "longevity",
            Self::Finance => "finance",
            Self::Household => "household",
            Self::Career => "career",
            Self::Family => "family",
            Self::Children => "children",
            Self::Values => "values",
            Self::Temperament => "temperament",
            Self::Growth => "growth",
            Self::FateBond => "fate_bond",
            Self::SpouseStar => "spouse_star",
            Self::NoblemanSupport => "nobleman_support",
            Self::VoidRisk => "void_risk",
            Self::CollisionRisk => "collision_risk",
        }
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Attraction => "Attraction",
            Self::Communication => "Communication",
            Self::Trust => "Trust",
            Self::ConflictResolution => "Conflict resolution",
            Self::Intimacy => "Intimacy",
            Self::EmotionalSupport => "Emotional support",
            Self::Longevity => "Longevity",
            Self::Finance => "Finance",
            Self::Household => "Household",
            Self::Career => "Career",
            Self::Family => "Family",
            Self::Children => "Children",
            Self::Values => "Values",
            Self::Temperament => "Temperament",
            Self::Growth => "Growth",
            Self::FateBond => "Fate bond",
            Self::SpouseStar => "Spouse star",
            Self::NoblemanSupport => "Nobleman support",
            Self::VoidRisk => "Void risk",
            Self::CollisionRisk => "Collision risk",
        }
    }
}

/// One scored dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionScore {
    pub dimension: Dimension,
    /// 0..=100.
    pub score: u8,
    pub tier: Tier,
    pub positives: Vec<String>,
    pub negatives: Vec<String>,
    pub description: String,
}

/// Accumulates deltas for one dimension, then clamps and describes it.
#[derive(Debug, Clone)]
pub(crate) struct ScoreSheet {
    dimension: Dimension,
    total: i32,
    floor: i32,
    positives: Vec<String>,
    negatives: Vec<String>,
}

impl ScoreSheet {
    pub(crate) fn new(dimension: Dimension, base: i32) -> Self {
        Self {
            dimension,
            total: base,
            floor: 0,
            positives: Vec::new(),
            negatives: Vec::new(),
        }
    }

    /// Raise the lower clamp bound from 0.
    pub(crate) fn floored(mut self, floor: i32) -> Self {
        self.floor = floor;
        self
    }

    /// Apply `delta` when `cond` holds.
    pub(crate) fn when(&mut self, cond: bool, delta: i32, reason: &str) -> &mut Self {
        if cond {
            self.add(delta, reason);
        }
        self
    }

    /// Apply `per` once for each of `count` occurrences, limited to `cap` in magnitude.
    pub(crate) fn per(&mut self, count: usize, per: i32, cap: i32, reason: &str) -> &mut Self {
        if count > 0 {
            let raw = per.saturating_mul(count.min(i32::MAX as usize) as i32);
            let delta = raw.clamp(-cap.abs(), cap.abs());
            self.add(delta, &format!("{reason} (x{count})"));
        }
        self
    }

    fn add(&mut self, delta: i32, reason: &str) {
        if delta == 0 {
            return;
        }
        self.total += delta;
        let line = format!("{reason} ({delta:+})");
        if delta > 0 {
            self.positives.push(line);
        } else {
            self.negatives.push(line);
        }
    }

    pub(crate) fn finish(self) -> DimensionScore {
        let score = self.total.clamp(self.floor, 100) as u8;
        let tier = Tier::from_score(score);
        let description = describe(self.dimension, score, tier, &self.positives, &self.negatives);
        trace!(
            dimension = self.dimension.name(),
            score,
            tier = tier.name(),
            "dimension scored"
        );
        DimensionScore {
            dimension: self.dimension,
            score,
            tier,
            positives: self.positives,
            negatives: self.negatives,
            description,
        }
    }
}

fn strip_delta(line: &str) -> &str {
    line.rsplit_once(" (").map_or(line, |(head, _)| head)
}

fn describe(dimension: Dimension, score: u8, tier: Tier, positives: &[String], negatives: &[String]) -> String {
    let head = format!("{}: {} ({score}).", dimension.label(), tier.name());
    match (positives.first(), negatives.first()) {
        (Some(p), Some(n)) => format!(
            "{head} Helped by {}, held back by {}.",
            strip_delta(p),
            strip_delta(n)
        ),
        (Some(p), None) => format!("{head} Helped by {}.", strip_delta(p)),
        (None, Some(n)) => format!("{head} Held back by {}.", strip_delta(n)),
        (None, None) => format!("{head} No notable factors either way."),
    }
}
