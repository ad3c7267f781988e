use super::entity::{NewStar, Star};
use crate::domain::{DomainError, DomainResult};

pub fn validate_new_star(star: &NewStar) -> DomainResult<()> {
    validate_name(&star.name)
}

pub fn validate_star(star: &Star) -> DomainResult<()> {
    validate_name(&star.name)
}

/// Name cannot be empty
fn validate_name(name: &str) -> DomainResult<()> {
    if name.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Star name cannot be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_valid_star() {
        let star = NewStar::new("Grace Kelly", NaiveDate::from_ymd_opt(1929, 11, 12));
        assert!(validate_new_star(&star).is_ok());
    }

    #[test]
    fn test_empty_name_fails() {
        let star = Star::from_new(3, NewStar::new("", None));
        assert!(validate_star(&star).is_err());
    }
}
