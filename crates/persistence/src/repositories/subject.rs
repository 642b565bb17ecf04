//! Subject repository.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::entities::SubjectEntity;
use crate::metrics::QueryTimer;

/// Repository for subject operations.
#[derive(Clone)]
pub struct SubjectRepository {
    pool: SqlitePool,
}

impl SubjectRepository {
    /// Creates a new SubjectRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new subject. Subject names are unique.
    pub async fn create_subject(&self, name: &str) -> Result<SubjectEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_subject");
        let result = sqlx::query_as::<_, SubjectEntity>(
            r#"
            INSERT INTO subjects (id, name, created_at)
            VALUES (?, ?, ?)
            RETURNING id, name, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
