// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are data mappers over SQLite
// - One pooled connection per call, one transaction per write
// - "Not found" is `Ok(None)`, storage failures are errors
// - Explicit SQL only

pub mod casting_repository;
pub mod movie_repository;
pub mod star_repository;
pub mod statistics_repository;

mod rows;

#[cfg(test)]
pub(crate) mod test_support;

pub use casting_repository::{CastingRepository, SqliteCastingRepository};
pub use movie_repository::{MovieRepository, SqliteMovieRepository};
pub use star_repository::{SqliteStarRepository, StarRepository};
pub use statistics_repository::{SqliteStatisticsRepository, StatisticsRepository};

#[cfg(test)]
pub use casting_repository::MockCastingRepository;
#[cfg(test)]
pub use movie_repository::MockMovieRepository;
#[cfg(test)]
pub use star_repository::MockStarRepository;
#[cfg(test)]
pub use statistics_repository::MockStatisticsRepository;
