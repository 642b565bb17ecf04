//! Mark repository.
//!
//! The stored letter grade is always derived from the score at write time,
//! both on insert and on score updates. Clients never supply it.

use chrono::Utc;
use domain::models::{LetterGrade, RecordMarkRequest};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::entities::MarkEntity;
use crate::metrics::QueryTimer;

/// Repository for mark write and lookup operations.
#[derive(Clone)]
pub struct MarkRepository {
    pool: SqlitePool,
}

impl MarkRepository {
    /// Creates a new MarkRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a mark, deriving the letter grade from the score.
    pub async fn record_mark(&self, req: &RecordMarkRequest) -> Result<MarkEntity, sqlx::Error> {
        let timer = QueryTimer::new("record_mark");
        let now = Utc::now();
        let result = sqlx::query_as::<_, MarkEntity>(
            r#"
            INSERT INTO marks (id, student_id, subject_id, exam_type, score, letter_grade,
                               recorded_on, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING id, student_id, subject_id, exam_type, score, letter_grade,
                      recorded_on, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(req.student_id)
        .bind(req.subject_id)
        .bind(req.exam_type)
        .bind(req.score)
        .bind(LetterGrade::from_score(req.score))
        .bind(req.recorded_on)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a mark's score, re-deriving the letter grade. Returns `None`
    /// when no mark with that id exists.
    pub async fn update_score(
        &self,
        id: Uuid,
        score: f64,
    ) -> Result<Option<MarkEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_mark_score");
        let result = sqlx::query_as::<_, MarkEntity>(
            r#"
            UPDATE marks
            SET score = ?, letter_grade = ?, updated_at = ?
            WHERE id = ?
            RETURNING id, student_id, subject_id, exam_type, score, letter_grade,
                      recorded_on, created_at, updated_at
            "#,
        )
        .bind(score)
        .bind(LetterGrade::from_score(score))
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a mark by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<MarkEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_mark_by_id");
        let result = sqlx::query_as::<_, MarkEntity>(
            r#"
            SELECT id, student_id, subject_id, exam_type, score, letter_grade,
                   recorded_on, created_at, updated_at
            FROM marks
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
