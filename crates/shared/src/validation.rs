//! Common validation utilities.

use chrono::{NaiveDate, Utc};
use validator::ValidationError;

/// Oldest mark or attendance date accepted, in days (two school years).
const MAX_RECORD_AGE_DAYS: i64 = 730;

/// Validates that a mark score is within the grading scale (0 to 100).
pub fn validate_score(score: f64) -> Result<(), ValidationError> {
    if (0.0..=100.0).contains(&score) {
        Ok(())
    } else {
        let mut err = ValidationError::new("score_range");
        err.message = Some("Score must be between 0 and 100".into());
        Err(err)
    }
}

/// Validates that a person name is non-blank and fits the roster column.
pub fn validate_person_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        let mut err = ValidationError::new("name_blank");
        err.message = Some("Name must not be blank".into());
        return Err(err);
    }
    if trimmed.len() > 120 {
        let mut err = ValidationError::new("name_length");
        err.message = Some("Name must be 120 characters or fewer".into());
        return Err(err);
    }
    Ok(())
}

/// Validates that a record date (marks, attendance) is plausible.
/// - Must not be in the future (records are entered after the fact)
/// - Must not be older than two school years
pub fn validate_record_date(date: &NaiveDate) -> Result<(), ValidationError> {
    let today = Utc::now().date_naive();

    if *date > today {
        let mut err = ValidationError::new("record_date_future");
        err.message = Some("Date cannot be in the future".into());
        return Err(err);
    }

    let past_limit = today - chrono::Duration::days(MAX_RECORD_AGE_DAYS);
    if *date < past_limit {
        let mut err = ValidationError::new("record_date_old");
        err.message = Some("Date cannot be older than two years".into());
        return Err(err);
    }

    Ok(())
}
