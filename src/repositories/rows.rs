// src/repositories/rows.rs
//
// Row mapping and lookups shared by the SQLite repositories

use rusqlite::{params, Connection, Row};

use crate::domain::{Movie, Star};

/// Movie columns of a `movies m` query, aliased for by-name mapping
pub(crate) const MOVIE_COLUMNS: &str =
    "m.id AS id, m.title AS title, m.year AS year, m.duration AS duration";

/// Star columns of a `stars s` query, aliased for by-name mapping
pub(crate) const STAR_COLUMNS: &str = "s.id AS id, s.name AS name, s.birthdate AS birthdate";

pub(crate) fn row_to_movie(row: &Row) -> rusqlite::Result<Movie> {
    Ok(Movie {
        id: row.get("id")?,
        title: row.get("title")?,
        year: row.get("year")?,
        duration: row.get("duration")?,
    })
}

pub(crate) fn row_to_star(row: &Row) -> rusqlite::Result<Star> {
    Ok(Star {
        id: row.get("id")?,
        name: row.get("name")?,
        birthdate: row.get("birthdate")?,
    })
}

/// Case-sensitive substring predicate on `column` against `param`
///
/// `LIKE` folds ASCII case in SQLite, `instr` does not.
pub(crate) fn contains_sql(column: &str, param: &str) -> String {
    format!("instr({column}, {param}) > 0")
}

/// Case-sensitive suffix predicate on `column` against `param`
pub(crate) fn ends_with_sql(column: &str, param: &str) -> String {
    format!(
        "length({column}) >= length({param}) \
         AND substr({column}, length({column}) - length({param}) + 1) = {param}"
    )
}

pub(crate) fn fetch_movie(conn: &Connection, id: i64) -> rusqlite::Result<Option<Movie>> {
    let sql = format!("SELECT {MOVIE_COLUMNS} FROM movies m WHERE m.id = ?1");

    match conn.query_row(&sql, params![id], row_to_movie) {
        Ok(movie) => Ok(Some(movie)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

pub(crate) fn fetch_star(conn: &Connection, id: i64) -> rusqlite::Result<Option<Star>> {
    let sql = format!("SELECT {STAR_COLUMNS} FROM stars s WHERE s.id = ?1");

    match conn.query_row(&sql, params![id], row_to_star) {
        Ok(star) => Ok(Some(star)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

/// The directing star of a movie; `None` for an unknown or undirected movie
pub(crate) fn fetch_director(conn: &Connection, movie_id: i64) -> rusqlite::Result<Option<Star>> {
    let sql = format!(
        "SELECT {STAR_COLUMNS} FROM movies m JOIN stars s ON s.id = m.director_id
         WHERE m.id = ?1"
    );

    match conn.query_row(&sql, params![movie_id], row_to_star) {
        Ok(star) => Ok(Some(star)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e),
    }
}

pub(crate) fn star_exists(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM stars WHERE id = ?1)",
        params![id],
        |row| row.get(0),
    )
}
