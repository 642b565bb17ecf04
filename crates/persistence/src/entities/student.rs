//! Student roster entities (joined row mappings).

use chrono::{DateTime, Utc};
use domain::models::{NamedRef, StudentDetail, StudentSummary};
use sqlx::FromRow;
use uuid::Uuid;

/// Row mapping for the roster list query: one student joined with the name
/// of their section.
#[derive(Debug, Clone, FromRow)]
pub struct StudentSummaryEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub section_name: Option<String>,
}

impl From<StudentSummaryEntity> for StudentSummary {
    fn from(entity: StudentSummaryEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            section_name: entity.section_name,
        }
    }
}

/// Row mapping for the student detail query, which left-joins the section
/// and the assigned teacher. The id/name column pairs collapse into
/// [`NamedRef`]s; a dangling or absent reference yields `None`.
#[derive(Debug, Clone, FromRow)]
pub struct StudentDetailEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub section_id: Option<Uuid>,
    pub section_name: Option<String>,
    pub assigned_teacher_id: Option<Uuid>,
    pub assigned_teacher_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn named_ref(id: Option<Uuid>, name: Option<String>) -> Option<NamedRef> {
    match (id, name) {
        (Some(id), Some(name)) => Some(NamedRef { id, name }),
        _ => None,
    }
}

impl From<StudentDetailEntity> for StudentDetail {
    fn from(entity: StudentDetailEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            section: named_ref(entity.section_id, entity.section_name),
            assigned_teacher: named_ref(entity.assigned_teacher_id, entity.assigned_teacher_name),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
