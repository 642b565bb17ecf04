//! Mark and subject entities (database row mappings).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::{ExamType, LetterGrade, Mark, Subject};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the marks table.
#[derive(Debug, Clone, FromRow)]
pub struct MarkEntity {
    pub id: Uuid,
    pub student_id: Uuid,
    pub subject_id: Uuid,
    pub exam_type: ExamType,
    pub score: f64,
    pub letter_grade: LetterGrade,
    pub recorded_on: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MarkEntity> for Mark {
    fn from(entity: MarkEntity) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            subject_id: entity.subject_id,
            exam_type: entity.exam_type,
            score: entity.score,
            letter_grade: entity.letter_grade,
            recorded_on: entity.recorded_on,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Database row mapping for the subjects table.
#[derive(Debug, Clone, FromRow)]
pub struct SubjectEntity {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<SubjectEntity> for Subject {
    fn from(entity: SubjectEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }
}
