//! Aggregate row mappings for the analytics queries.
//!
//! These are slim projections, not full table rows. Month keys come back as
//! the raw `strftime('%Y-%m', ...)` text; labelling and rounding happen in
//! the domain layer.

use domain::models::{LetterGrade, SectionAverage, StudentAggregate, SubjectAverage};
use domain::services::attendance_rate;
use sqlx::FromRow;

/// Average score per month bucket.
#[derive(Debug, Clone, FromRow)]
pub struct MonthlyScoreEntity {
    pub month: String,
    pub average_score: f64,
}

/// Present/total counts per month bucket.
#[derive(Debug, Clone, FromRow)]
pub struct MonthlyAttendanceEntity {
    pub month: String,
    pub present_count: i64,
    pub total_count: i64,
}

/// Mark count per stored letter grade. Only letters that occur in the
/// window come back; the domain layer zero-fills the rest.
#[derive(Debug, Clone, FromRow)]
pub struct LetterCountEntity {
    pub letter_grade: LetterGrade,
    pub count: i64,
}

/// Per-student aggregates feeding the at-risk predictor.
///
/// Both joins are outer: a student with no marks or no attendance rows
/// carries NULLs here, which must stay `None` downstream so the predicate
/// cannot fire on missing data.
#[derive(Debug, Clone, FromRow)]
pub struct StudentAggregateEntity {
    pub name: String,
    pub email: String,
    pub avg_score: Option<f64>,
    pub present_count: Option<i64>,
    pub total_count: Option<i64>,
}

impl From<StudentAggregateEntity> for StudentAggregate {
    fn from(entity: StudentAggregateEntity) -> Self {
        let attendance_pct = match (entity.present_count, entity.total_count) {
            (Some(present), Some(total)) if total > 0 => Some(attendance_rate(present, total)),
            _ => None,
        };
        Self {
            name: entity.name,
            email: entity.email,
            avg_score: entity.avg_score,
            attendance_pct,
        }
    }
}

/// Per-subject average used by the insight rules.
#[derive(Debug, Clone, FromRow)]
pub struct SubjectAverageEntity {
    pub name: String,
    pub average_score: f64,
    pub mark_count: i64,
}

impl From<SubjectAverageEntity> for SubjectAverage {
    fn from(entity: SubjectAverageEntity) -> Self {
        Self {
            name: entity.name,
            average_score: entity.average_score,
            mark_count: entity.mark_count,
        }
    }
}

/// Per-section average used by the insight rules.
#[derive(Debug, Clone, FromRow)]
pub struct SectionAverageEntity {
    pub name: String,
    pub average_score: f64,
}

impl From<SectionAverageEntity> for SectionAverage {
    fn from(entity: SectionAverageEntity) -> Self {
        Self {
            name: entity.name,
            average_score: entity.average_score,
        }
    }
}
