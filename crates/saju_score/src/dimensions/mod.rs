//! One scoring function per compatibility dimension.
//!
//! Each function starts from its own base, applies its own fixed deltas and
//! clamps. Constants are deliberately not shared between dimensions.

pub mod depth;
pub mod practical;
pub mod relationship;
pub mod special;

use crate::context::PairContext;
use crate::score::{Dimension, DimensionScore};

pub use depth::{fate_bond, growth, temperament, values};
pub use practical::{career, children, family, finance, household};
pub use relationship::{
    attraction, communication, conflict_resolution, emotional_support, intimacy, longevity, trust,
};
pub use special::{collision_risk, nobleman_support, spouse_star, void_risk};

/// Score one dimension. None when the pair lacks the inputs it needs.
pub fn score_dimension(dimension: Dimension, ctx: &PairContext) -> Option<DimensionScore> {
    let score = match dimension {
        Dimension::Attraction => attraction(ctx),
        Dimension::Communication => communication(ctx),
        Dimension::Trust => trust(ctx),
        Dimension::ConflictResolution => conflict_resolution(ctx),
        Dimension::Intimacy => intimacy(ctx),
        Dimension::EmotionalSupport => emotional_support(ctx),
        Dimension::Longevity => longevity(ctx),
        Dimension::Finance => finance(ctx),
        Dimension::Household => household(ctx),
        Dimension::Career => career(ctx),
        Dimension::Family => family(ctx),
        Dimension::Children => children(ctx),
        Dimension::Values => values(ctx),
        Dimension::Temperament => temperament(ctx),
        Dimension::Growth => growth(ctx),
        Dimension::FateBond => fate_bond(ctx),
        Dimension::SpouseStar => return spouse_star(ctx),
        Dimension::NoblemanSupport => nobleman_support(ctx),
        Dimension::VoidRisk => void_risk(ctx),
        Dimension::CollisionRisk => collision_risk(ctx),
    };
    Some(score)
}
