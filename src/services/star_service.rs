// src/services/star_service.rs
use std::sync::Arc;

use crate::application::dto::{CreateStarDto, StarBirthyearStatDto, StarDto, StarStatDto};
use crate::domain::{validate_new_star, validate_star, NewStar, Star};
use crate::error::{AppError, AppResult};
use crate::repositories::{StarRepository, StatisticsRepository};
use crate::services::movie_service::DEFAULT_PAGE_SIZE;

/// Actor threshold when the caller gives none
pub const DEFAULT_MIN_ROLES: u64 = 10;

fn to_dtos(stars: Vec<Star>) -> Vec<StarDto> {
    stars.into_iter().map(StarDto::from).collect()
}

pub struct StarService {
    star_repo: Arc<dyn StarRepository>,
    statistics_repo: Arc<dyn StatisticsRepository>,
}

impl StarService {
    pub fn new(
        star_repo: Arc<dyn StarRepository>,
        statistics_repo: Arc<dyn StatisticsRepository>,
    ) -> Self {
        Self {
            star_repo,
            statistics_repo,
        }
    }

    pub fn get_star(&self, star_id: i64) -> AppResult<Option<StarDto>> {
        Ok(self.star_repo.get(star_id)?.map(StarDto::from))
    }

    pub fn list_stars(&self, skip: Option<u32>, limit: Option<u32>) -> AppResult<Vec<StarDto>> {
        let skip = skip.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE);
        Ok(to_dtos(self.star_repo.list(skip, limit)?))
    }

    pub fn create_star(&self, request: CreateStarDto) -> AppResult<StarDto> {
        let star = NewStar::try_from(request)?;
        validate_new_star(&star).map_err(AppError::Domain)?;

        Ok(self.star_repo.create(&star)?.into())
    }

    /// Full replace of the star fields, `None` if the id is unknown
    pub fn update_star(&self, request: StarDto) -> AppResult<Option<StarDto>> {
        let star = Star::try_from(request)?;
        validate_star(&star).map_err(AppError::Domain)?;

        Ok(self.star_repo.update(&star)?.map(StarDto::from))
    }

    pub fn delete_star(&self, star_id: i64) -> AppResult<Option<StarDto>> {
        Ok(self.star_repo.delete(star_id)?.map(StarDto::from))
    }

    pub fn find_by_name(&self, name: &str) -> AppResult<Vec<StarDto>> {
        Ok(to_dtos(self.star_repo.find_by_name(name)?))
    }

    pub fn find_by_endname(&self, suffix: &str) -> AppResult<Vec<StarDto>> {
        Ok(to_dtos(self.star_repo.find_by_name_suffix(suffix)?))
    }

    pub fn find_by_birthyear(&self, year: i32) -> AppResult<Vec<StarDto>> {
        Ok(to_dtos(self.star_repo.find_by_birth_year(year)?))
    }

    pub fn count_stars(&self) -> AppResult<u64> {
        self.star_repo.count()
    }

    pub fn director_of_movie(&self, movie_id: i64) -> AppResult<Option<StarDto>> {
        Ok(self.star_repo.director_of_movie(movie_id)?.map(StarDto::from))
    }

    pub fn directors_of_movies_by_title(&self, fragment: &str) -> AppResult<Vec<StarDto>> {
        Ok(to_dtos(self.star_repo.directors_of_movies_matching_title(fragment)?))
    }

    pub fn stars_per_birthyear(&self) -> AppResult<Vec<StarBirthyearStatDto>> {
        Ok(self
            .statistics_repo
            .stars_per_birth_year()?
            .into_iter()
            .map(StarBirthyearStatDto::from)
            .collect())
    }

    pub fn actor_stats(&self, min_count: Option<u64>) -> AppResult<Vec<StarStatDto>> {
        let min_count = min_count.unwrap_or(DEFAULT_MIN_ROLES);
        Ok(self
            .statistics_repo
            .actor_stats(min_count)?
            .into_iter()
            .map(StarStatDto::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{MockStarRepository, MockStatisticsRepository};
    use chrono::NaiveDate;
    use mockall::predicate::eq;

    fn star_service(star_repo: MockStarRepository) -> StarService {
        StarService::new(Arc::new(star_repo), Arc::new(MockStatisticsRepository::new()))
    }

    #[test]
    fn test_create_star_parses_birthdate() {
        let mut repo = MockStarRepository::new();
        repo.expect_create()
            .withf(|star| star.birthdate == NaiveDate::from_ymd_opt(1975, 4, 1))
            .times(1)
            .returning(|star| Ok(Star::from_new(5, star.clone())));

        let created = star_service(repo)
            .create_star(CreateStarDto {
                name: "Jane Doe".to_string(),
                birthdate: Some("1975-04-01".to_string()),
            })
            .unwrap();

        assert_eq!(created.id, 5);
        assert_eq!(created.birthdate.as_deref(), Some("1975-04-01"));
    }

    #[test]
    fn test_create_star_rejects_malformed_input() {
        let mut repo = MockStarRepository::new();
        repo.expect_create().never();
        let service = star_service(repo);

        let bad_date = service.create_star(CreateStarDto {
            name: "Jane Doe".to_string(),
            birthdate: Some("April 1st".to_string()),
        });
        assert!(matches!(bad_date, Err(AppError::Validation(_))));

        let empty_name = service.create_star(CreateStarDto {
            name: "".to_string(),
            birthdate: None,
        });
        assert!(matches!(empty_name, Err(AppError::Domain(_))));
    }

    #[test]
    fn test_delete_unknown_star_is_none() {
        let mut repo = MockStarRepository::new();
        repo.expect_delete().with(eq(404)).returning(|_| Ok(None));

        assert!(star_service(repo).delete_star(404).unwrap().is_none());
    }

    #[test]
    fn test_list_stars_defaults() {
        let mut repo = MockStarRepository::new();
        repo.expect_list()
            .with(eq(0), eq(DEFAULT_PAGE_SIZE))
            .times(1)
            .returning(|_, _| Ok(vec![]));

        assert!(star_service(repo).list_stars(None, None).unwrap().is_empty());
    }

    #[test]
    fn test_actor_stats_default_threshold() {
        let mut statistics = MockStatisticsRepository::new();
        statistics
            .expect_actor_stats()
            .with(eq(DEFAULT_MIN_ROLES))
            .times(1)
            .returning(|_| Ok(vec![]));
        statistics
            .expect_actor_stats()
            .with(eq(u64::MAX))
            .times(1)
            .returning(|_| Ok(vec![]));
        let service = StarService::new(Arc::new(MockStarRepository::new()), Arc::new(statistics));

        assert!(service.actor_stats(None).unwrap().is_empty());
        assert!(service.actor_stats(Some(u64::MAX)).unwrap().is_empty());
    }
}
