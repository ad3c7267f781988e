// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are the API-facing shapes a surrounding HTTP layer serializes
// - Each entity has a create shape (no id) and a persisted shape (with id)
// - Conversion FROM domain is infallible, conversion TO domain parses
//   and may be rejected

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{
    ActorStats, BirthYearStats, DirectorStats, Movie, MovieDetail, MovieYearStats, NewMovie,
    NewStar, Star,
};
use crate::error::{AppError, AppResult};

/// Wire format of birthdates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// STAR DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarDto {
    pub id: i64,
    pub name: String,
    pub birthdate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateStarDto {
    pub name: String,
    pub birthdate: Option<String>,
}

// ============================================================================
// MOVIE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDto {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub duration: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMovieDto {
    pub title: String,
    pub year: i32,
    pub duration: Option<i32>,
}

/// Movie with its director and actors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetailDto {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub duration: Option<i32>,
    #[serde(default)]
    pub director: Option<StarDto>,
    #[serde(default)]
    pub actors: Vec<StarDto>,
}

// ============================================================================
// STATISTICS DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieStatDto {
    pub year: i32,
    pub movie_count: u64,
    pub min_duration: Option<i32>,
    pub max_duration: Option<i32>,
    pub avg_duration: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectorStatDto {
    pub director: StarDto,
    pub movie_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarBirthyearStatDto {
    pub birthyear: i32,
    pub star_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarStatDto {
    pub actor: StarDto,
    pub movie_count: u64,
    pub first_movie_year: i32,
    pub last_movie_year: i32,
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<Star> for StarDto {
    fn from(star: Star) -> Self {
        Self {
            id: star.id,
            name: star.name,
            birthdate: star.birthdate.map(|d| d.format(DATE_FORMAT).to_string()),
        }
    }
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            year: movie.year,
            duration: movie.duration,
        }
    }
}

impl From<MovieDetail> for MovieDetailDto {
    fn from(detail: MovieDetail) -> Self {
        Self {
            id: detail.movie.id,
            title: detail.movie.title,
            year: detail.movie.year,
            duration: detail.movie.duration,
            director: detail.director.map(StarDto::from),
            actors: detail.actors.into_iter().map(StarDto::from).collect(),
        }
    }
}

impl From<MovieYearStats> for MovieStatDto {
    fn from(stats: MovieYearStats) -> Self {
        Self {
            year: stats.year,
            movie_count: stats.movie_count,
            min_duration: stats.min_duration,
            max_duration: stats.max_duration,
            avg_duration: stats.avg_duration,
        }
    }
}

impl From<DirectorStats> for DirectorStatDto {
    fn from(stats: DirectorStats) -> Self {
        Self {
            director: stats.director.into(),
            movie_count: stats.movie_count,
        }
    }
}

impl From<BirthYearStats> for StarBirthyearStatDto {
    fn from(stats: BirthYearStats) -> Self {
        Self {
            birthyear: stats.birth_year,
            star_count: stats.star_count,
        }
    }
}

impl From<ActorStats> for StarStatDto {
    fn from(stats: ActorStats) -> Self {
        Self {
            actor: stats.actor.into(),
            movie_count: stats.movie_count,
            first_movie_year: stats.first_movie_year,
            last_movie_year: stats.last_movie_year,
        }
    }
}

// ============================================================================
// PARSING (DTO → Domain)
// ============================================================================

fn parse_birthdate(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match raw {
        Some(s) => Ok(Some(NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)?)),
        None => Ok(None),
    }
}

impl TryFrom<CreateStarDto> for NewStar {
    type Error = AppError;

    fn try_from(dto: CreateStarDto) -> AppResult<Self> {
        let birthdate = parse_birthdate(dto.birthdate.as_deref())?;
        Ok(NewStar::new(dto.name, birthdate))
    }
}

impl TryFrom<StarDto> for Star {
    type Error = AppError;

    fn try_from(dto: StarDto) -> AppResult<Self> {
        Ok(Star {
            id: dto.id,
            name: dto.name,
            birthdate: parse_birthdate(dto.birthdate.as_deref())?,
        })
    }
}

impl From<CreateMovieDto> for NewMovie {
    fn from(dto: CreateMovieDto) -> Self {
        NewMovie::new(dto.title, dto.year, dto.duration)
    }
}

impl From<MovieDto> for Movie {
    fn from(dto: MovieDto) -> Self {
        Movie {
            id: dto.id,
            title: dto.title,
            year: dto.year,
            duration: dto.duration,
        }
    }
}
