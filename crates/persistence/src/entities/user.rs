//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{User, UserRole};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub section_id: Option<Uuid>,
    pub assigned_teacher_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
            section_id: entity.section_id,
            assigned_teacher_id: entity.assigned_teacher_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
