//! Attendance repository.

use chrono::Utc;
use domain::models::RecordAttendanceRequest;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::entities::AttendanceEntity;
use crate::metrics::QueryTimer;

/// Repository for attendance write and lookup operations.
#[derive(Clone)]
pub struct AttendanceRepository {
    pool: SqlitePool,
}

impl AttendanceRepository {
    /// Creates a new AttendanceRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record attendance for a student on a day. Marking the same student
    /// and day twice overwrites the earlier row, so a correction is just a
    /// second call.
    pub async fn record_attendance(
        &self,
        req: &RecordAttendanceRequest,
        marked_by: Option<Uuid>,
    ) -> Result<AttendanceEntity, sqlx::Error> {
        let timer = QueryTimer::new("record_attendance");
        let result = sqlx::query_as::<_, AttendanceEntity>(
            r#"
            INSERT INTO attendance (id, student_id, attended_on, present, marked_by, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT (student_id, attended_on)
            DO UPDATE SET present = excluded.present, marked_by = excluded.marked_by
            RETURNING id, student_id, attended_on, present, marked_by, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(req.student_id)
        .bind(req.attended_on)
        .bind(req.present)
        .bind(marked_by)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
