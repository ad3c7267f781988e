// src/repositories/test_support.rs
//
// In-memory catalog fixtures for repository tests

use std::sync::Arc;

use chrono::NaiveDate;

use super::{
    CastingRepository, MovieRepository, SqliteCastingRepository, SqliteMovieRepository,
    SqliteStarRepository, SqliteStatisticsRepository, StarRepository,
};
use crate::db::create_memory_pool;
use crate::domain::{Movie, NewMovie, NewStar, Star};

pub(crate) struct TestCatalog {
    pub movies: SqliteMovieRepository,
    pub stars: SqliteStarRepository,
    pub casting: SqliteCastingRepository,
    pub statistics: SqliteStatisticsRepository,
}

/// Repositories sharing one fresh in-memory database
pub(crate) fn catalog() -> TestCatalog {
    let pool = Arc::new(create_memory_pool().unwrap());

    TestCatalog {
        movies: SqliteMovieRepository::new(pool.clone()),
        stars: SqliteStarRepository::new(pool.clone()),
        casting: SqliteCastingRepository::new(pool.clone()),
        statistics: SqliteStatisticsRepository::new(pool),
    }
}

pub(crate) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub(crate) struct HitchcockSeed {
    pub alfred_hitchcock: Star,
    pub james_stewart: Star,
    pub grace_kelly: Star,
    pub kim_novak: Star,
    pub rear_window: Movie,
    pub vertigo: Movie,
}

/// Two Hitchcock movies:
/// - Rear Window (1954): James Stewart, Grace Kelly
/// - Vertigo (1958): James Stewart, Kim Novak
pub(crate) fn seed_hitchcock(catalog: &TestCatalog) -> HitchcockSeed {
    let star = |name: &str, birthdate: NaiveDate| {
        catalog
            .stars
            .create(&NewStar::new(name, Some(birthdate)))
            .unwrap()
    };
    let alfred_hitchcock = star("Alfred Hitchcock", date(1899, 8, 13));
    let james_stewart = star("James Stewart", date(1908, 5, 20));
    let grace_kelly = star("Grace Kelly", date(1929, 11, 12));
    let kim_novak = star("Kim Novak", date(1933, 2, 13));

    let rear_window = catalog
        .movies
        .create(&NewMovie::new("Rear Window", 1954, Some(112)))
        .unwrap();
    let vertigo = catalog
        .movies
        .create(&NewMovie::new("Vertigo", 1958, Some(128)))
        .unwrap();

    for (movie, actors) in [
        (&rear_window, [james_stewart.id, grace_kelly.id]),
        (&vertigo, [james_stewart.id, kim_novak.id]),
    ] {
        catalog
            .casting
            .set_director(movie.id, alfred_hitchcock.id)
            .unwrap()
            .unwrap();
        catalog.casting.set_actors(movie.id, &actors).unwrap().unwrap();
    }

    HitchcockSeed {
        alfred_hitchcock,
        james_stewart,
        grace_kelly,
        kim_novak,
        rear_window,
        vertigo,
    }
}
