//! Score one chart against many candidates in parallel.

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::context::Partner;
use crate::report::{FullCompatibility, full_compatibility};

/// A candidate with its compatibility against the subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedCandidate<K> {
    pub key: K,
    pub compatibility: FullCompatibility,
}

impl<K> RankedCandidate<K> {
    pub const fn overall(&self) -> u8 {
        self.compatibility.overall
    }
}

/// Best match first. Ties keep input order.
pub fn rank_candidates<K>(subject: &Partner, candidates: &[(K, Partner)]) -> Vec<RankedCandidate<K>>
where
    K: Clone + Send + Sync,
{
    let mut ranked: Vec<RankedCandidate<K>> = candidates
        .par_iter()
        .map(|(key, partner)| RankedCandidate {
            key: key.clone(),
            compatibility: full_compatibility(subject, partner),
        })
        .collect();
    ranked.sort_by(|x, y| y.overall().cmp(&x.overall()));
    debug!(candidates = ranked.len(), "candidates ranked");
    ranked
}
