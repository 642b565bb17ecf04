//! Section repository.

use chrono::Utc;
use domain::models::CreateSectionRequest;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::entities::SectionEntity;
use crate::metrics::QueryTimer;

/// Repository for section operations.
#[derive(Clone)]
pub struct SectionRepository {
    pool: SqlitePool,
}

impl SectionRepository {
    /// Creates a new SectionRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new section.
    pub async fn create_section(
        &self,
        req: &CreateSectionRequest,
    ) -> Result<SectionEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_section");
        let now = Utc::now();
        let result = sqlx::query_as::<_, SectionEntity>(
            r#"
            INSERT INTO sections (id, name, academic_year, class_teacher_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, name, academic_year, class_teacher_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.academic_year)
        .bind(req.class_teacher_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
