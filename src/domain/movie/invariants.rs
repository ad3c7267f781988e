use super::entity::{Movie, NewMovie};
use crate::domain::{DomainError, DomainResult};

/// Validates a movie before it is created
pub fn validate_new_movie(movie: &NewMovie) -> DomainResult<()> {
    validate_title(&movie.title)?;
    validate_duration(movie.duration)?;
    Ok(())
}

/// Validates a persisted movie before its fields are overwritten
pub fn validate_movie(movie: &Movie) -> DomainResult<()> {
    validate_title(&movie.title)?;
    validate_duration(movie.duration)?;
    Ok(())
}

/// Title cannot be empty
fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Movie title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// A known duration is a positive number of minutes
fn validate_duration(duration: Option<i32>) -> DomainResult<()> {
    match duration {
        Some(minutes) if minutes <= 0 => Err(DomainError::InvariantViolation(format!(
            "Movie duration must be positive, got {} minutes",
            minutes
        ))),
        _ => Ok(()),
    }
}

/// Invariants that must hold true for Movie domain:
///
/// 1. Title cannot be empty
/// 2. Duration, if known, is positive
/// 3. Director, if any, references an existing Star (storage enforced)
/// 4. Every actor references an existing Star (storage enforced)
/// 5. Actor membership is unique
