//! Critical Statistics Invariants:
//!
//! 1. Statistics are ALWAYS derived, NEVER primary
//! 2. Statistics are computed on demand by aggregate queries
//! 3. Statistics NEVER alter domain state

pub mod entity;
pub use entity::{ActorStats, BirthYearStats, DirectorStats, MovieYearStats};
