pub mod entity;
pub mod invariants;

pub use entity::{Movie, MovieDetail, NewMovie};
pub use invariants::{validate_movie, validate_new_movie};
