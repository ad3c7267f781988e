// src/config.rs
//
// Runtime configuration
//
// Resolved from the environment, falling back to the platform data directory.

use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Overrides the database file location
pub const DATABASE_ENV: &str = "MOVIEDB_DATABASE";

/// Overrides the maximum number of pooled connections
pub const POOL_SIZE_ENV: &str = "MOVIEDB_POOL_SIZE";

/// Reasonable for a single-host API process
pub const DEFAULT_POOL_SIZE: u32 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// SQLite database file
    pub path: PathBuf,

    /// Maximum number of pooled connections
    pub pool_size: u32,
}

impl DatabaseConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    /// Resolve configuration from process environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = match lookup(DATABASE_ENV) {
            Some(raw) if !raw.trim().is_empty() => PathBuf::from(raw),
            Some(_) => {
                return Err(AppError::Validation(format!("{} is set but empty", DATABASE_ENV)))
            }
            None => default_database_path()?,
        };

        let pool_size = match lookup(POOL_SIZE_ENV) {
            Some(raw) => parse_pool_size(&raw)?,
            None => DEFAULT_POOL_SIZE,
        };

        Ok(Self { path, pool_size })
    }
}

/// Default database location
///
/// Path structure: {APP_DATA}/moviedb/moviedb.db
pub fn default_database_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    Ok(app_data_dir.join("moviedb").join("moviedb.db"))
}

fn parse_pool_size(raw: &str) -> AppResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(AppError::Validation(format!(
            "{} must be a positive integer, got '{}'",
            POOL_SIZE_ENV, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_explicit_path_and_pool_size() {
        let config = DatabaseConfig::from_lookup(lookup_from(&[
            (DATABASE_ENV, "/tmp/movies.db"),
            (POOL_SIZE_ENV, "4"),
        ]))
        .unwrap();

        assert_eq!(config.path, PathBuf::from("/tmp/movies.db"));
        assert_eq!(config.pool_size, 4);
    }

    #[test]
    fn test_pool_size_defaults() {
        let config =
            DatabaseConfig::from_lookup(lookup_from(&[(DATABASE_ENV, "movies.db")])).unwrap();
        assert_eq!(config.pool_size, DEFAULT_POOL_SIZE);
    }

    #[test]
    fn test_invalid_pool_size_rejected() {
        for raw in ["0", "-1", "many"] {
            let result = DatabaseConfig::from_lookup(lookup_from(&[
                (DATABASE_ENV, "movies.db"),
                (POOL_SIZE_ENV, raw),
            ]));
            assert!(matches!(result, Err(AppError::Validation(_))), "accepted '{}'", raw);
        }
    }

    #[test]
    fn test_empty_path_rejected() {
        let result = DatabaseConfig::from_lookup(lookup_from(&[(DATABASE_ENV, " ")]));
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
