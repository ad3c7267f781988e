// src/application/state.rs

use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::repositories::{
    CastingRepository, MovieRepository, SqliteCastingRepository, SqliteMovieRepository,
    SqliteStarRepository, SqliteStatisticsRepository, StarRepository, StatisticsRepository,
};
use crate::services::{MovieService, StarService};

/// Services shared by every request handler.
/// All fields are Arc-wrapped for thread-safe sharing.
pub struct AppState {
    pub movie_service: Arc<MovieService>,
    pub star_service: Arc<StarService>,
}

impl AppState {
    /// Wire the SQLite repositories and the services over one pool
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        let movie_repo: Arc<dyn MovieRepository> =
            Arc::new(SqliteMovieRepository::new(pool.clone()));
        let star_repo: Arc<dyn StarRepository> = Arc::new(SqliteStarRepository::new(pool.clone()));
        let casting_repo: Arc<dyn CastingRepository> =
            Arc::new(SqliteCastingRepository::new(pool.clone()));
        let statistics_repo: Arc<dyn StatisticsRepository> =
            Arc::new(SqliteStatisticsRepository::new(pool));

        let movie_service = Arc::new(MovieService::new(
            movie_repo,
            casting_repo,
            statistics_repo.clone(),
        ));
        let star_service = Arc::new(StarService::new(star_repo, statistics_repo));

        Self {
            movie_service,
            star_service,
        }
    }
}
