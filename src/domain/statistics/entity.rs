use serde::{Deserialize, Serialize};

use crate::domain::star::Star;

/// Movies released in one year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieYearStats {
    pub year: i32,
    pub movie_count: u64,
    /// `None` when no movie of that year has a known duration
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
    pub avg_duration: Option<f64>,
}

/// Number of movies directed by one star
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorStats {
    pub director: Star,
    pub movie_count: u64,
}

/// Number of stars born in one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthYearStats {
    pub birth_year: i32,
    pub star_count: u64,
}

/// Filmography span of one actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorStats {
    pub actor: Star,
    pub movie_count: u64,
    pub first_movie_year: i32,
    pub last_movie_year: i32,
}
