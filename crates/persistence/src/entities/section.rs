//! Section entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::Section;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the sections table.
#[derive(Debug, Clone, FromRow)]
pub struct SectionEntity {
    pub id: Uuid,
    pub name: String,
    pub academic_year: String,
    pub class_teacher_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<SectionEntity> for Section {
    fn from(entity: SectionEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            academic_year: entity.academic_year,
            class_teacher_id: entity.class_teacher_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
