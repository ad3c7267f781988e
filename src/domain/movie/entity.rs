use serde::{Deserialize, Serialize};

use crate::domain::star::Star;

/// A film of the catalog
///
/// Director and actors are associations managed separately,
/// see `MovieDetail` for the fully loaded view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Storage-assigned identifier
    pub id: i64,

    pub title: String,

    /// Release year
    pub year: i32,

    /// Running time in minutes (if known)
    pub duration: Option<i32>,
}

/// Movie fields before the storage layer assigned an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub duration: Option<i32>,
}

/// A movie together with its director and its actors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub movie: Movie,
    pub director: Option<Star>,
    pub actors: Vec<Star>,
}

impl NewMovie {
    pub fn new(title: impl Into<String>, year: i32, duration: Option<i32>) -> Self {
        Self {
            title: title.into(),
            year,
            duration,
        }
    }
}

impl Movie {
    /// Attach the id assigned on insert
    pub fn from_new(id: i64, movie: NewMovie) -> Self {
        Self {
            id,
            title: movie.title,
            year: movie.year,
            duration: movie.duration,
        }
    }
}
