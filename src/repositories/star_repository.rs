// src/repositories/star_repository.rs
//
// Star persistence and star queries

use std::sync::Arc;

use log::{debug, info};
use rusqlite::{params, Params};

use super::rows::{
    contains_sql, ends_with_sql, fetch_director, fetch_star, row_to_star, STAR_COLUMNS,
};
use crate::db::ConnectionPool;
use crate::domain::{NewStar, Star};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait StarRepository: Send + Sync {
    fn get(&self, id: i64) -> AppResult<Option<Star>>;
    /// Page of stars ordered by id
    fn list(&self, skip: u32, limit: u32) -> AppResult<Vec<Star>>;
    fn create(&self, star: &NewStar) -> AppResult<Star>;
    /// Overwrites every field of the stored star, `None` if no such id
    fn update(&self, star: &Star) -> AppResult<Option<Star>>;
    /// Returns the removed star, `None` if no such id
    fn delete(&self, id: i64) -> AppResult<Option<Star>>;
    fn find_by_name(&self, name: &str) -> AppResult<Vec<Star>>;
    fn find_by_name_suffix(&self, suffix: &str) -> AppResult<Vec<Star>>;
    fn find_by_birth_year(&self, year: i32) -> AppResult<Vec<Star>>;
    fn count(&self) -> AppResult<u64>;
    /// `None` if the movie does not exist or has no director
    fn director_of_movie(&self, movie_id: i64) -> AppResult<Option<Star>>;
    /// One director per matching movie, so a director may repeat
    fn directors_of_movies_matching_title(&self, fragment: &str) -> AppResult<Vec<Star>>;
}

pub struct SqliteStarRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteStarRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Select stars from `stars s`, narrowed by `tail`
    fn query_stars<P: Params>(&self, tail: &str, params: P) -> AppResult<Vec<Star>> {
        let conn = self.pool.get()?;

        let sql = format!("SELECT {STAR_COLUMNS} FROM stars s {tail}");
        let mut stmt = conn.prepare(&sql)?;

        let stars: Vec<Star> = stmt
            .query_map(params, row_to_star)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("{} stars for [{}]", stars.len(), tail);
        Ok(stars)
    }
}

impl StarRepository for SqliteStarRepository {
    fn get(&self, id: i64) -> AppResult<Option<Star>> {
        let conn = self.pool.get()?;
        Ok(fetch_star(&conn, id)?)
    }

    fn list(&self, skip: u32, limit: u32) -> AppResult<Vec<Star>> {
        self.query_stars("ORDER BY s.id LIMIT ?1 OFFSET ?2", params![limit, skip])
    }

    fn create(&self, star: &NewStar) -> AppResult<Star> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO stars (name, birthdate) VALUES (?1, ?2)",
            params![star.name, star.birthdate],
        )?;
        let id = tx.last_insert_rowid();

        tx.commit()?;

        info!("Created star {} '{}'", id, star.name);
        Ok(Star::from_new(id, star.clone()))
    }

    fn update(&self, star: &Star) -> AppResult<Option<Star>> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let rows_affected = tx.execute(
            "UPDATE stars SET name = ?1, birthdate = ?2 WHERE id = ?3",
            params![star.name, star.birthdate, star.id],
        )?;

        if rows_affected == 0 {
            debug!("Star {} not found for update", star.id);
            return Ok(None);
        }

        tx.commit()?;

        info!("Updated star {}", star.id);
        Ok(Some(star.clone()))
    }

    fn delete(&self, id: i64) -> AppResult<Option<Star>> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let Some(star) = fetch_star(&tx, id)? else {
            debug!("Star {} not found for delete", id);
            return Ok(None);
        };

        // Directed movies keep existing without director, roles are dropped
        tx.execute("DELETE FROM stars WHERE id = ?1", params![id])?;
        tx.commit()?;

        info!("Deleted star {} '{}'", id, star.name);
        Ok(Some(star))
    }

    fn find_by_name(&self, name: &str) -> AppResult<Vec<Star>> {
        self.query_stars("WHERE s.name = ?1 ORDER BY s.birthdate", params![name])
    }

    fn find_by_name_suffix(&self, suffix: &str) -> AppResult<Vec<Star>> {
        let tail = format!(
            "WHERE {} ORDER BY s.birthdate",
            ends_with_sql("s.name", "?1")
        );
        self.query_stars(&tail, params![suffix])
    }

    fn find_by_birth_year(&self, year: i32) -> AppResult<Vec<Star>> {
        self.query_stars(
            "WHERE CAST(strftime('%Y', s.birthdate) AS INTEGER) = ?1 ORDER BY s.name",
            params![year],
        )
    }

    fn count(&self) -> AppResult<u64> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM stars", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn director_of_movie(&self, movie_id: i64) -> AppResult<Option<Star>> {
        let conn = self.pool.get()?;
        Ok(fetch_director(&conn, movie_id)?)
    }

    fn directors_of_movies_matching_title(&self, fragment: &str) -> AppResult<Vec<Star>> {
        let tail = format!(
            "JOIN movies m ON m.director_id = s.id WHERE {} ORDER BY m.id",
            contains_sql("m.title", "?1")
        );
        self.query_stars(&tail, params![fragment])
    }
}
