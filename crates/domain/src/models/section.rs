//! Section (class roster) domain models.
//!
//! A section is a named class group like `8-A` for one academic year. It is
//! deliberately not called "grade" so it cannot be confused with letter
//! grades on marks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Represents a class section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: Uuid,
    pub name: String,
    /// School year in `YYYY/YYYY` form, e.g. `2025/2026`.
    pub academic_year: String,
    pub class_teacher_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a section.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSectionRequest {
    #[validate(length(min = 1, max = 40, message = "Section name must be 1-40 characters"))]
    pub name: String,

    /// School year in `YYYY/YYYY` format with consecutive years.
    #[validate(custom(function = "validate_academic_year"))]
    pub academic_year: String,

    pub class_teacher_id: Option<Uuid>,
}

lazy_static::lazy_static! {
    static ref ACADEMIC_YEAR_REGEX: regex::Regex =
        regex::Regex::new(r"^(\d{4})/(\d{4})$").unwrap();
}

/// Validates the `YYYY/YYYY` academic year format. The second year must be
/// the first plus one; the regex alone cannot check that.
pub fn validate_academic_year(value: &str) -> Result<(), ValidationError> {
    let captures = match ACADEMIC_YEAR_REGEX.captures(value) {
        Some(c) => c,
        None => {
            let mut err = ValidationError::new("academic_year_format");
            err.message = Some("Academic year must look like 2025/2026".into());
            return Err(err);
        }
    };

    let first: i32 = captures[1].parse().unwrap_or(0);
    let second: i32 = captures[2].parse().unwrap_or(0);
    if second != first + 1 {
        let mut err = ValidationError::new("academic_year_span");
        err.message = Some("Academic year must span two consecutive years".into());
        return Err(err);
    }

    Ok(())
}
