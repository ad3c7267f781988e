// src/repositories/casting_repository.rs
//
// Movie/star associations: the director of a movie and its actor set
//
// Every update validates all ids before touching any row,
// so a rejected update leaves the association unchanged.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, info, warn};
use rusqlite::{params, Connection};

use super::rows::{fetch_director, fetch_movie, row_to_star, star_exists, STAR_COLUMNS};
use crate::db::ConnectionPool;
use crate::domain::{Movie, MovieDetail, Star};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait CastingRepository: Send + Sync {
    /// `None` if the movie or the star does not exist
    fn set_director(&self, movie_id: i64, star_id: i64) -> AppResult<Option<MovieDetail>>;
    /// Replaces the whole actor set; `None` and no change if any id is unknown
    fn set_actors(&self, movie_id: i64, star_ids: &[i64]) -> AppResult<Option<MovieDetail>>;
    /// Adds one actor unless already cast
    fn add_actor(&self, movie_id: i64, star_id: i64) -> AppResult<Option<MovieDetail>>;
    /// Actors ordered by name, empty for an unknown movie
    fn actors_of_movie(&self, movie_id: i64) -> AppResult<Vec<Star>>;
    fn get_detail(&self, movie_id: i64) -> AppResult<Option<MovieDetail>>;
}

pub struct SqliteCastingRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCastingRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn load_actors(conn: &Connection, movie_id: i64) -> rusqlite::Result<Vec<Star>> {
        let sql = format!(
            "SELECT {STAR_COLUMNS} FROM movie_actors ma JOIN stars s ON s.id = ma.star_id
             WHERE ma.movie_id = ?1
             ORDER BY s.name, s.id"
        );
        let mut stmt = conn.prepare(&sql)?;

        let actors = stmt
            .query_map(params![movie_id], row_to_star)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(actors)
    }

    fn load_detail(conn: &Connection, movie: Movie) -> rusqlite::Result<MovieDetail> {
        let director = fetch_director(conn, movie.id)?;
        let actors = Self::load_actors(conn, movie.id)?;

        Ok(MovieDetail {
            movie,
            director,
            actors,
        })
    }
}

impl CastingRepository for SqliteCastingRepository {
    fn set_director(&self, movie_id: i64, star_id: i64) -> AppResult<Option<MovieDetail>> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let Some(movie) = fetch_movie(&tx, movie_id)? else {
            warn!("Cannot set director of unknown movie {}", movie_id);
            return Ok(None);
        };
        if !star_exists(&tx, star_id)? {
            warn!("Cannot set unknown star {} as director of movie {}", star_id, movie_id);
            return Ok(None);
        }

        tx.execute(
            "UPDATE movies SET director_id = ?1 WHERE id = ?2",
            params![star_id, movie_id],
        )?;
        let detail = Self::load_detail(&tx, movie)?;
        tx.commit()?;

        info!("Star {} now directs movie {}", star_id, movie_id);
        Ok(Some(detail))
    }

    fn set_actors(&self, movie_id: i64, star_ids: &[i64]) -> AppResult<Option<MovieDetail>> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let Some(movie) = fetch_movie(&tx, movie_id)? else {
            warn!("Cannot set actors of unknown movie {}", movie_id);
            return Ok(None);
        };

        let star_ids: BTreeSet<i64> = star_ids.iter().copied().collect();
        for &star_id in &star_ids {
            if !star_exists(&tx, star_id)? {
                warn!(
                    "Cannot cast unknown star {} in movie {}, actors left unchanged",
                    star_id, movie_id
                );
                return Ok(None);
            }
        }

        tx.execute("DELETE FROM movie_actors WHERE movie_id = ?1", params![movie_id])?;
        {
            let mut insert =
                tx.prepare("INSERT INTO movie_actors (movie_id, star_id) VALUES (?1, ?2)")?;
            for star_id in &star_ids {
                insert.execute(params![movie_id, star_id])?;
            }
        }
        let detail = Self::load_detail(&tx, movie)?;
        tx.commit()?;

        info!("Movie {} now has {} actors", movie_id, star_ids.len());
        Ok(Some(detail))
    }

    fn add_actor(&self, movie_id: i64, star_id: i64) -> AppResult<Option<MovieDetail>> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction()?;

        let Some(movie) = fetch_movie(&tx, movie_id)? else {
            warn!("Cannot add actor to unknown movie {}", movie_id);
            return Ok(None);
        };
        if !star_exists(&tx, star_id)? {
            warn!("Cannot cast unknown star {} in movie {}", star_id, movie_id);
            return Ok(None);
        }

        let inserted = tx.execute(
            "INSERT OR IGNORE INTO movie_actors (movie_id, star_id) VALUES (?1, ?2)",
            params![movie_id, star_id],
        )?;
        let detail = Self::load_detail(&tx, movie)?;
        tx.commit()?;

        if inserted == 0 {
            debug!("Star {} already acts in movie {}", star_id, movie_id);
        } else {
            info!("Star {} added to the actors of movie {}", star_id, movie_id);
        }
        Ok(Some(detail))
    }

    fn actors_of_movie(&self, movie_id: i64) -> AppResult<Vec<Star>> {
        let conn = self.pool.get()?;
        Ok(Self::load_actors(&conn, movie_id)?)
    }

    fn get_detail(&self, movie_id: i64) -> AppResult<Option<MovieDetail>> {
        let conn = self.pool.get()?;

        match fetch_movie(&conn, movie_id)? {
            Some(movie) => Ok(Some(Self::load_detail(&conn, movie)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewMovie, NewStar};
    use crate::repositories::test_support::{catalog, seed_hitchcock};
    use crate::repositories::{MovieRepository, StarRepository};

    fn actor_ids(actors: &[Star]) -> Vec<i64> {
        let mut ids: Vec<i64> = actors.iter().map(|s| s.id).collect();
        ids.sort();
        ids
    }

    #[test]
    fn test_set_director_overwrites_previous() {
        let catalog = catalog();
        let seed = seed_hitchcock(&catalog);

        let detail = catalog
            .casting
            .set_director(seed.vertigo.id, seed.james_stewart.id)
            .unwrap()
            .unwrap();

        assert_eq!(detail.movie, seed.vertigo);
        assert_eq!(detail.director, Some(seed.james_stewart.clone()));
        assert_eq!(
            catalog.stars.director_of_movie(seed.vertigo.id).unwrap(),
            Some(seed.james_stewart.clone())
        );
    }

    #[test]
    fn test_set_director_unknown_ids() {
        let catalog = catalog();
        let seed = seed_hitchcock(&catalog);

        assert!(catalog.casting.set_director(404, seed.james_stewart.id).unwrap().is_none());
        assert!(catalog.casting.set_director(seed.vertigo.id, 404).unwrap().is_none());
        assert_eq!(
            catalog.stars.director_of_movie(seed.vertigo.id).unwrap(),
            Some(seed.alfred_hitchcock.clone())
        );
    }

    #[test]
    fn test_set_actors_replaces_set() {
        let catalog = catalog();
        let seed = seed_hitchcock(&catalog);

        let detail = catalog
            .casting
            .set_actors(seed.vertigo.id, &[seed.grace_kelly.id, seed.kim_novak.id])
            .unwrap()
            .unwrap();

        let mut expected = vec![seed.grace_kelly.id, seed.kim_novak.id];
        expected.sort();
        assert_eq!(actor_ids(&detail.actors), expected);
        assert_eq!(
            actor_ids(&catalog.casting.actors_of_movie(seed.vertigo.id).unwrap()),
            expected
        );
    }

    #[test]
    fn test_set_actors_empty_clears_set() {
        let catalog = catalog();
        let seed = seed_hitchcock(&catalog);

        let detail = catalog.casting.set_actors(seed.vertigo.id, &[]).unwrap().unwrap();

        assert!(detail.actors.is_empty());
        assert!(catalog.casting.actors_of_movie(seed.vertigo.id).unwrap().is_empty());
    }

    #[test]
    fn test_set_actors_with_unknown_star_leaves_set_unchanged() {
        let catalog = catalog();
        let seed = seed_hitchcock(&catalog);
        let before = catalog.casting.actors_of_movie(seed.vertigo.id).unwrap();

        let result = catalog
            .casting
            .set_actors(seed.vertigo.id, &[seed.grace_kelly.id, 404])
            .unwrap();

        assert!(result.is_none());
        assert_eq!(catalog.casting.actors_of_movie(seed.vertigo.id).unwrap(), before);
    }

    #[test]
    fn test_set_actors_unknown_movie() {
        let catalog = catalog();
        let seed = seed_hitchcock(&catalog);

        assert!(catalog.casting.set_actors(404, &[seed.grace_kelly.id]).unwrap().is_none());
    }

    #[test]
    fn test_set_actors_collapses_duplicates() {
        let catalog = catalog();
        let seed = seed_hitchcock(&catalog);

        let detail = catalog
            .casting
            .set_actors(seed.vertigo.id, &[seed.kim_novak.id, seed.kim_novak.id])
            .unwrap()
            .unwrap();

        assert_eq!(detail.actors, vec![seed.kim_novak.clone()]);
    }

    #[test]
    fn test_add_actor_is_idempotent() {
        let catalog = catalog();
        let seed = seed_hitchcock(&catalog);

        let first = catalog
            .casting
            .add_actor(seed.rear_window.id, seed.kim_novak.id)
            .unwrap()
            .unwrap();
        let second = catalog
            .casting
            .add_actor(seed.rear_window.id, seed.kim_novak.id)
            .unwrap()
            .unwrap();

        assert_eq!(first.actors.len(), 3);
        assert_eq!(second.actors, first.actors);
    }

    #[test]
    fn test_add_actor_unknown_ids() {
        let catalog = catalog();
        let seed = seed_hitchcock(&catalog);

        assert!(catalog.casting.add_actor(404, seed.kim_novak.id).unwrap().is_none());
        assert!(catalog.casting.add_actor(seed.rear_window.id, 404).unwrap().is_none());
        assert_eq!(catalog.casting.actors_of_movie(seed.rear_window.id).unwrap().len(), 2);
    }

    #[test]
    fn test_get_detail() {
        let catalog = catalog();
        let seed = seed_hitchcock(&catalog);
        let orphan = catalog.movies.create(&NewMovie::new("Orphan", 2009, None)).unwrap();
        catalog.stars.create(&NewStar::new("Unused", None)).unwrap();

        let detail = catalog.casting.get_detail(seed.rear_window.id).unwrap().unwrap();
        assert_eq!(detail.director, Some(seed.alfred_hitchcock.clone()));
        // Ordered by name
        assert_eq!(detail.actors, vec![seed.grace_kelly.clone(), seed.james_stewart.clone()]);

        let detail = catalog.casting.get_detail(orphan.id).unwrap().unwrap();
        assert_eq!(detail.director, None);
        assert!(detail.actors.is_empty());

        assert!(catalog.casting.get_detail(404).unwrap().is_none());
    }
}
