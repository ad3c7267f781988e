// src/repositories/statistics_repository.rs
//
// Aggregate queries over the catalog. Nothing here writes.

use std::sync::Arc;

use log::debug;
use rusqlite::{params, Row};

use super::rows::row_to_star;
use crate::db::ConnectionPool;
use crate::domain::{ActorStats, BirthYearStats, DirectorStats, MovieYearStats};
use crate::error::AppResult;

/// SQLite integers are signed; thresholds beyond `i64::MAX` saturate
fn threshold(min_count: u64) -> i64 {
    i64::try_from(min_count).unwrap_or(i64::MAX)
}

#[cfg_attr(test, mockall::automock)]
pub trait StatisticsRepository: Send + Sync {
    /// One record per distinct year, ordered by year
    fn stats_by_year(&self) -> AppResult<Vec<MovieYearStats>>;
    /// Directors of at least `min_count` movies, most prolific first
    fn movies_per_director(&self, min_count: u64) -> AppResult<Vec<DirectorStats>>;
    /// Stars with a known birthdate, grouped by birth year
    fn stars_per_birth_year(&self) -> AppResult<Vec<BirthYearStats>>;
    /// Actors of at least `min_count` movies, most prolific first
    fn actor_stats(&self, min_count: u64) -> AppResult<Vec<ActorStats>>;
}

pub struct SqliteStatisticsRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteStatisticsRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_year_stats(row: &Row) -> Result<MovieYearStats, rusqlite::Error> {
        let movie_count: i64 = row.get("movie_count")?;

        Ok(MovieYearStats {
            year: row.get("year")?,
            movie_count: movie_count as u64,
            min_duration: row.get("min_duration")?,
            max_duration: row.get("max_duration")?,
            avg_duration: row.get("avg_duration")?,
        })
    }

    fn row_to_director_stats(row: &Row) -> Result<DirectorStats, rusqlite::Error> {
        let movie_count: i64 = row.get("movie_count")?;

        Ok(DirectorStats {
            director: row_to_star(row)?,
            movie_count: movie_count as u64,
        })
    }

    fn row_to_birth_year_stats(row: &Row) -> Result<BirthYearStats, rusqlite::Error> {
        let star_count: i64 = row.get("star_count")?;

        Ok(BirthYearStats {
            birth_year: row.get("birth_year")?,
            star_count: star_count as u64,
        })
    }

    fn row_to_actor_stats(row: &Row) -> Result<ActorStats, rusqlite::Error> {
        let movie_count: i64 = row.get("movie_count")?;

        Ok(ActorStats {
            actor: row_to_star(row)?,
            movie_count: movie_count as u64,
            first_movie_year: row.get("first_movie_year")?,
            last_movie_year: row.get("last_movie_year")?,
        })
    }
}

impl StatisticsRepository for SqliteStatisticsRepository {
    fn stats_by_year(&self) -> AppResult<Vec<MovieYearStats>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT year,
                    COUNT(*) AS movie_count,
                    MIN(duration) AS min_duration,
                    MAX(duration) AS max_duration,
                    AVG(duration) AS avg_duration
             FROM movies
             GROUP BY year
             ORDER BY year",
        )?;

        let stats: Vec<MovieYearStats> = stmt
            .query_map([], Self::row_to_year_stats)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Movie statistics over {} years", stats.len());
        Ok(stats)
    }

    fn movies_per_director(&self, min_count: u64) -> AppResult<Vec<DirectorStats>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT s.id AS id, s.name AS name, s.birthdate AS birthdate,
                    COUNT(m.id) AS movie_count
             FROM movies m
             JOIN stars s ON s.id = m.director_id
             GROUP BY s.id, s.name, s.birthdate
             HAVING COUNT(m.id) >= ?1
             ORDER BY movie_count DESC, s.id",
        )?;

        let stats: Vec<DirectorStats> = stmt
            .query_map(params![threshold(min_count)], Self::row_to_director_stats)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("{} directors with at least {} movies", stats.len(), min_count);
        Ok(stats)
    }

    fn stars_per_birth_year(&self) -> AppResult<Vec<BirthYearStats>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT CAST(strftime('%Y', birthdate) AS INTEGER) AS birth_year,
                    COUNT(*) AS star_count
             FROM stars
             WHERE birthdate IS NOT NULL
             GROUP BY birth_year
             ORDER BY birth_year",
        )?;

        let stats: Vec<BirthYearStats> = stmt
            .query_map([], Self::row_to_birth_year_stats)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(stats)
    }

    fn actor_stats(&self, min_count: u64) -> AppResult<Vec<ActorStats>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT s.id AS id, s.name AS name, s.birthdate AS birthdate,
                    COUNT(m.id) AS movie_count,
                    MIN(m.year) AS first_movie_year,
                    MAX(m.year) AS last_movie_year
             FROM movie_actors ma
             JOIN stars s ON s.id = ma.star_id
             JOIN movies m ON m.id = ma.movie_id
             GROUP BY s.id, s.name, s.birthdate
             HAVING COUNT(m.id) >= ?1
             ORDER BY movie_count DESC, s.id",
        )?;

        let stats: Vec<ActorStats> = stmt
            .query_map(params![threshold(min_count)], Self::row_to_actor_stats)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("{} actors with at least {} movies", stats.len(), min_count);
        Ok(stats)
    }
}
