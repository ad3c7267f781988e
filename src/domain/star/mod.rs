pub mod entity;
pub mod invariants;

pub use entity::{NewStar, Star};
pub use invariants::{validate_new_star, validate_star};
