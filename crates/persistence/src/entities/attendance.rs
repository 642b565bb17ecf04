//! Attendance entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::AttendanceRecord;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the attendance table.
#[derive(Debug, Clone, FromRow)]
pub struct AttendanceEntity {
    pub id: Uuid,
    pub student_id: Uuid,
    pub attended_on: NaiveDate,
    pub present: bool,
    pub marked_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<AttendanceEntity> for AttendanceRecord {
    fn from(entity: AttendanceEntity) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            attended_on: entity.attended_on,
            present: entity.present,
            marked_by: entity.marked_by,
            created_at: entity.created_at,
        }
    }
}
