//! Sexagenary reference tables and the relational model.
//!
//! This crate provides:
//! - Stems, branches, phases and the 60-term cycle with their names
//! - Month and hour term tables and fixed solar-term month boundaries
//! - Ten-role classification, stem combines/clashes and twelve life stages
//! - Branch interaction detectors (clash, combine, triad, punishment,
//!   destruction, harm, void, nobleman)
//!
//! Everything here is `const`/`static` data and pure functions.

pub mod branch;
pub mod cycle;
pub mod error;
pub mod hour;
pub mod interaction;
pub mod interaction_types;
pub mod phase;
pub mod solar_term;
pub mod stem;
pub mod stem_relations;
pub mod ten_role;
pub mod twelve_stage;

pub use branch::{ALL_BRANCHES, Branch};
pub use cycle::{CYCLE, SexagenaryTerm, hour_term, month_term};
pub use error::BaseError;
pub use hour::{hour_branch, hour_branch_fractional, hour_slot};
pub use interaction::{
    PillarView, branch_clash, detect, detect_all, detect_all_within, detect_within,
    nobleman_branches, nobleman_hits, six_combine, virtue_stem, void_hits,
};
pub use interaction_types::{
    ALL_INTERACTION_KINDS, BranchInteraction, BranchPair, Detection, InteractionKind,
};
pub use phase::{ALL_PHASES, Phase, PhaseRelation, Polarity, conquers, generates, phase_relation};
pub use solar_term::{SOLAR_TERM_BREAKPOINTS, SolarMonth, SolarTerm, SolarTermTable};
pub use stem::{ALL_STEMS, Stem};
pub use stem_relations::{stem_clash, stem_combine};
pub use ten_role::{ALL_ROLE_GROUPS, ALL_TEN_ROLES, RoleGroup, TenRole, role_group, ten_role};
pub use twelve_stage::{ALL_TWELVE_STAGES, TwelveStage, twelve_stage};
