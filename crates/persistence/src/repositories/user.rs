//! User repository.
//!
//! Student accounts go through `StudentRepository`; this one exists for the
//! staff role lookup on every authenticated request and for creating staff
//! accounts in seeds and tests.

use chrono::Utc;
use domain::models::UserRole;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::entities::UserEntity;
use crate::metrics::QueryTimer;

/// Repository for user account operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Look up just the role of a user. `None` when the id is unknown.
    pub async fn find_role(&self, id: Uuid) -> Result<Option<UserRole>, sqlx::Error> {
        let timer = QueryTimer::new("find_user_role");
        let result = sqlx::query_scalar::<_, UserRole>("SELECT role FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Create a user account with an explicit role.
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        role: UserRole,
    ) -> Result<UserEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_user");
        let now = Utc::now();
        let result = sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (id, name, email, role, section_id, assigned_teacher_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, NULL, NULL, ?, ?)
            RETURNING id, name, email, role, section_id, assigned_teacher_id, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(role)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
