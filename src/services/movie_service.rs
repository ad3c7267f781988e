// src/services/movie_service.rs
use std::sync::Arc;

use log::debug;

use crate::application::dto::{
    CreateMovieDto, DirectorStatDto, MovieDetailDto, MovieDto, MovieStatDto,
};
use crate::domain::{validate_movie, validate_new_movie, Movie, NewMovie};
use crate::error::{AppError, AppResult};
use crate::repositories::{CastingRepository, MovieRepository, StatisticsRepository};

/// Page size when the caller gives none
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Director threshold when the caller gives none
pub const DEFAULT_MIN_DIRECTED: u64 = 10;

fn to_dtos(movies: Vec<Movie>) -> Vec<MovieDto> {
    movies.into_iter().map(MovieDto::from).collect()
}

pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
    casting_repo: Arc<dyn CastingRepository>,
    statistics_repo: Arc<dyn StatisticsRepository>,
}

impl MovieService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        casting_repo: Arc<dyn CastingRepository>,
        statistics_repo: Arc<dyn StatisticsRepository>,
    ) -> Self {
        Self {
            movie_repo,
            casting_repo,
            statistics_repo,
        }
    }

    pub fn get_movie(&self, movie_id: i64) -> AppResult<Option<MovieDto>> {
        Ok(self.movie_repo.get(movie_id)?.map(MovieDto::from))
    }

    pub fn get_movie_detail(&self, movie_id: i64) -> AppResult<Option<MovieDetailDto>> {
        Ok(self.casting_repo.get_detail(movie_id)?.map(MovieDetailDto::from))
    }

    pub fn list_movies(&self, skip: Option<u32>, limit: Option<u32>) -> AppResult<Vec<MovieDto>> {
        let skip = skip.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE);
        Ok(to_dtos(self.movie_repo.list(skip, limit)?))
    }

    pub fn create_movie(&self, request: CreateMovieDto) -> AppResult<MovieDto> {
        let movie = NewMovie::from(request);
        validate_new_movie(&movie).map_err(AppError::Domain)?;

        Ok(self.movie_repo.create(&movie)?.into())
    }

    /// Full replace of the movie fields, `None` if the id is unknown
    pub fn update_movie(&self, request: MovieDto) -> AppResult<Option<MovieDto>> {
        let movie = Movie::from(request);
        validate_movie(&movie).map_err(AppError::Domain)?;

        Ok(self.movie_repo.update(&movie)?.map(MovieDto::from))
    }

    pub fn delete_movie(&self, movie_id: i64) -> AppResult<Option<MovieDto>> {
        Ok(self.movie_repo.delete(movie_id)?.map(MovieDto::from))
    }

    pub fn find_by_title(&self, title: &str) -> AppResult<Vec<MovieDto>> {
        Ok(to_dtos(self.movie_repo.find_by_title(title)?))
    }

    pub fn find_by_title_part(&self, fragment: &str) -> AppResult<Vec<MovieDto>> {
        Ok(to_dtos(self.movie_repo.find_by_title_substring(fragment)?))
    }

    pub fn find_by_year(&self, year: i32) -> AppResult<Vec<MovieDto>> {
        Ok(to_dtos(self.movie_repo.find_by_year(year)?))
    }

    /// `None` when neither bound is given, `Some(vec![])` when nothing matches
    pub fn find_by_year_range(
        &self,
        min: Option<i32>,
        max: Option<i32>,
    ) -> AppResult<Option<Vec<MovieDto>>> {
        let movies = self.movie_repo.find_by_year_range(min, max)?;
        if movies.is_none() {
            debug!("Year range search without bounds");
        }
        Ok(movies.map(to_dtos))
    }

    pub fn find_by_title_and_year(&self, title: &str, year: i32) -> AppResult<Vec<MovieDto>> {
        Ok(to_dtos(self.movie_repo.find_by_title_and_year(title, year)?))
    }

    pub fn count_movies(&self) -> AppResult<u64> {
        self.movie_repo.count()
    }

    pub fn count_movies_by_year(&self, year: i32) -> AppResult<u64> {
        self.movie_repo.count_by_year(year)
    }

    pub fn find_by_director_endname(&self, suffix: &str) -> AppResult<Vec<MovieDto>> {
        Ok(to_dtos(self.movie_repo.find_by_director_name_suffix(suffix)?))
    }

    pub fn find_by_actor_endname(&self, suffix: &str) -> AppResult<Vec<MovieDto>> {
        Ok(to_dtos(self.movie_repo.find_by_actor_name_suffix(suffix)?))
    }

    pub fn set_director(&self, movie_id: i64, star_id: i64) -> AppResult<Option<MovieDetailDto>> {
        Ok(self
            .casting_repo
            .set_director(movie_id, star_id)?
            .map(MovieDetailDto::from))
    }

    pub fn set_actors(
        &self,
        movie_id: i64,
        star_ids: &[i64],
    ) -> AppResult<Option<MovieDetailDto>> {
        Ok(self
            .casting_repo
            .set_actors(movie_id, star_ids)?
            .map(MovieDetailDto::from))
    }

    pub fn add_actor(&self, movie_id: i64, star_id: i64) -> AppResult<Option<MovieDetailDto>> {
        Ok(self
            .casting_repo
            .add_actor(movie_id, star_id)?
            .map(MovieDetailDto::from))
    }

    pub fn stats_by_year(&self) -> AppResult<Vec<MovieStatDto>> {
        Ok(self
            .statistics_repo
            .stats_by_year()?
            .into_iter()
            .map(MovieStatDto::from)
            .collect())
    }

    pub fn movies_per_director(&self, min_count: Option<u64>) -> AppResult<Vec<DirectorStatDto>> {
        let min_count = min_count.unwrap_or(DEFAULT_MIN_DIRECTED);
        Ok(self
            .statistics_repo
            .movies_per_director(min_count)?
            .into_iter()
            .map(DirectorStatDto::from)
            .collect())
    }
}
