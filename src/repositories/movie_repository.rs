// src/repositories/movie_repository.rs
//
// Movie persistence and movie queries

use std::sync::Arc;

use log::{debug, info};
use rusqlite::{params, Params};

use super::rows::{contains_sql, ends_with_sql, fetch_movie, row_to_movie, MOVIE_COLUMNS};
use crate::db::ConnectionPool;
use crate::domain::{Movie, NewMovie};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait MovieRepository: Send + Sync {
    fn get(&self, id: i64) -> AppResult<Option<Movie>>;
    /// Page of movies ordered by id
    fn list(&self, skip: u32, limit: u32) -> AppResult<Vec<Movie>>;
    fn create(&self, movie: &NewMovie) -> AppResult<Movie>;
    /// Overwrites every field of the stored movie, `None` if no such id
    fn update(&self, movie: &Movie) -> AppResult<Option<Movie>>;
    /// Returns the removed movie, `None` if no such id
    fn delete(&self, id: i64) -> AppResult<Option<Movie>>;
    fn find_by_title(&self, title: &str) -> AppResult<Vec<Movie>>;
    fn find_by_title_substring(&self, fragment: &str) -> AppResult<Vec<Movie>>;
    fn find_by_year(&self, year: i32) -> AppResult<Vec<Movie>>;
    /// Inclusive bounds; `None` when neither bound is given
    fn find_by_year_range(
        &self,
        min: Option<i32>,
        max: Option<i32>,
    ) -> AppResult<Option<Vec<Movie>>>;
    fn find_by_title_and_year(&self, title: &str, year: i32) -> AppResult<Vec<Movie>>;
    fn count(&self) -> AppResult<u64>;
    fn count_by_year(&self, year: i32) -> AppResult<u64>;
    fn find_by_director_name_suffix(&self, suffix: &str) -> AppResult<Vec<Movie>>;
    fn find_by_actor_name_suffix(&self, suffix: &str) -> AppResult<Vec<Movie>>;
}

pub struct SqliteMovieRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovieRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Select movies from `movies m`, narrowed by `tail` (joins, WHERE, ORDER BY)
    fn query_movies<P: Params>(&self, tail: &str, params: P) -> AppResult<Vec<Movie>> {
        let conn = self.pool.get()?;

        let sql = format!("SELECT {MOVIE_COLUMNS} FROM movies m {tail}");
        let mut stmt = conn.prepare(&sql)?;

        let movies: Vec<Movie> = stmt
            .query_map(params, row_to_movie)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("{} movies for [{}]", movies.len(), tail);
        Ok(movies)
    }

    fn count_where<P: Params>(&self, clause: &str, params: P) -> AppResult<u64> {
        let conn = self.pool.get()?;

        let count: i64 = conn.query_row(
            &format!("SELECT COUNT(*) FROM movies {clause}"),
            params,
            |row| row.get(0),
        )?;

        Ok(count as u64)
    }
}

impl MovieRepository for SqliteMovieRepository {
    fn get(&self, id: i64) -> AppResult<Option<Movie>> {
        let conn = self.pool.get()?;
        Ok(fetch_movie(&conn, id)?)
    }

    fn list(&self, skip: u32, limit: u32) -> AppResult<Vec<Movie>> {
        self.query_movies("ORDER BY m.id LIMIT ?1 OFFSET ?2", params![limit, skip])
    }

    fn create(&self, movie: &NewMovie) -> AppResult<Movie> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO movies (title, year, duration) VALUES (?1, ?2, ?3)",
            params![movie.title, movie.year, movie.duration],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;

        info!("Created movie {} '{}'", id, movie.title);
        Ok(Movie::from_new(id, movie.clone()))
    }

    fn update(&self, movie: &Movie) -> AppResult<Option<Movie>> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let rows_affected = tx.execute(
            "UPDATE movies SET title = ?1, year = ?2, duration = ?3 WHERE id = ?4",
            params![movie.title, movie.year, movie.duration, movie.id],
        )?;

        if rows_affected == 0 {
            debug!("Movie {} not found for update", movie.id);
            return Ok(None);
        }

        tx.commit()?;

        info!("Updated movie {}", movie.id);
        Ok(Some(movie.clone()))
    }

    fn delete(&self, id: i64) -> AppResult<Option<Movie>> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let Some(movie) = fetch_movie(&tx, id)? else {
            debug!("Movie {} not found for delete", id);
            return Ok(None);
        };

        tx.execute("DELETE FROM movies WHERE id = ?1", params![id])?;
        tx.commit()?;

        info!("Deleted movie {} '{}'", id, movie.title);
        Ok(Some(movie))
    }

    fn find_by_title(&self, title: &str) -> AppResult<Vec<Movie>> {
        self.query_movies("WHERE m.title = ?1 ORDER BY m.year DESC", params![title])
    }

    fn find_by_title_substring(&self, fragment: &str) -> AppResult<Vec<Movie>> {
        let tail = format!(
            "WHERE {} ORDER BY m.title, m.year",
            contains_sql("m.title", "?1")
        );
        self.query_movies(&tail, params![fragment])
    }

    fn find_by_year(&self, year: i32) -> AppResult<Vec<Movie>> {
        self.query_movies("WHERE m.year = ?1 ORDER BY m.title", params![year])
    }

    fn find_by_year_range(
        &self,
        min: Option<i32>,
        max: Option<i32>,
    ) -> AppResult<Option<Vec<Movie>>> {
        const ORDER: &str = "ORDER BY m.year, m.title";

        let movies = match (min, max) {
            (None, None) => return Ok(None),
            (Some(min), None) => {
                self.query_movies(&format!("WHERE m.year >= ?1 {ORDER}"), params![min])?
            }
            (None, Some(max)) => {
                self.query_movies(&format!("WHERE m.year <= ?1 {ORDER}"), params![max])?
            }
            (Some(min), Some(max)) => self.query_movies(
                &format!("WHERE m.year BETWEEN ?1 AND ?2 {ORDER}"),
                params![min, max],
            )?,
        };

        Ok(Some(movies))
    }

    fn find_by_title_and_year(&self, title: &str, year: i32) -> AppResult<Vec<Movie>> {
        self.query_movies(
            "WHERE m.title = ?1 AND m.year = ?2 ORDER BY m.year, m.title",
            params![title, year],
        )
    }

    fn count(&self) -> AppResult<u64> {
        self.count_where("", [])
    }

    fn count_by_year(&self, year: i32) -> AppResult<u64> {
        self.count_where("WHERE year = ?1", params![year])
    }

    fn find_by_director_name_suffix(&self, suffix: &str) -> AppResult<Vec<Movie>> {
        let tail = format!(
            "JOIN stars s ON s.id = m.director_id WHERE {} ORDER BY m.year DESC",
            ends_with_sql("s.name", "?1")
        );
        self.query_movies(&tail, params![suffix])
    }

    fn find_by_actor_name_suffix(&self, suffix: &str) -> AppResult<Vec<Movie>> {
        // One row per movie even when several of its actors match
        let tail = format!(
            "WHERE EXISTS (SELECT 1 FROM movie_actors ma JOIN stars s ON s.id = ma.star_id \
             WHERE ma.movie_id = m.id AND {}) ORDER BY m.year DESC",
            ends_with_sql("s.name", "?1")
        );
        self.query_movies(&tail, params![suffix])
    }
}
