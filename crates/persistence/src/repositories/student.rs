//! Student roster repository.
//!
//! Every query here pins `role = 'student'`, so staff and admin accounts
//! can never leak into the roster or be touched by roster mutations.

use chrono::Utc;
use domain::models::{CreateStudentRequest, UpdateStudentRequest};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::entities::{StudentDetailEntity, StudentSummaryEntity};
use crate::metrics::QueryTimer;

/// Repository for student roster operations.
#[derive(Clone)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    /// Creates a new StudentRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Count students matching the optional search and section filters.
    pub async fn count_students(
        &self,
        search: Option<&str>,
        section_id: Option<Uuid>,
    ) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_students");

        let mut query = String::from(
            r#"
            SELECT COUNT(*)
            FROM users u
            WHERE u.role = 'student'
            "#,
        );
        if search.is_some() {
            query.push_str(" AND (LOWER(u.name) LIKE LOWER(?) OR LOWER(u.email) LIKE LOWER(?))");
        }
        if section_id.is_some() {
            query.push_str(" AND u.section_id = ?");
        }

        let mut q = sqlx::query_scalar::<_, i64>(&query);
        if let Some(search) = search {
            let pattern = format!("%{}%", search);
            q = q.bind(pattern.clone()).bind(pattern);
        }
        if let Some(section_id) = section_id {
            q = q.bind(section_id);
        }

        let result = q.fetch_one(&self.pool).await;
        timer.record();
        result
    }

    /// List students matching the filters, alphabetical by name, with the
    /// name of each student's section joined in.
    pub async fn list_students(
        &self,
        search: Option<&str>,
        section_id: Option<Uuid>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<StudentSummaryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_students");

        let mut query = String::from(
            r#"
            SELECT u.id, u.name, u.email, s.name AS section_name
            FROM users u
            LEFT JOIN sections s ON s.id = u.section_id
            WHERE u.role = 'student'
            "#,
        );
        if search.is_some() {
            query.push_str(" AND (LOWER(u.name) LIKE LOWER(?) OR LOWER(u.email) LIKE LOWER(?))");
        }
        if section_id.is_some() {
            query.push_str(" AND u.section_id = ?");
        }
        query.push_str(" ORDER BY u.name ASC LIMIT ? OFFSET ?");

        let mut q = sqlx::query_as::<_, StudentSummaryEntity>(&query);
        if let Some(search) = search {
            let pattern = format!("%{}%", search);
            q = q.bind(pattern.clone()).bind(pattern);
        }
        if let Some(section_id) = section_id {
            q = q.bind(section_id);
        }
        q = q.bind(limit).bind(offset);

        let result = q.fetch_all(&self.pool).await;
        timer.record();
        result
    }

    /// Fetch one student with section and assigned teacher names joined in.
    pub async fn find_detail(&self, id: Uuid) -> Result<Option<StudentDetailEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_student_detail");
        let result = sqlx::query_as::<_, StudentDetailEntity>(
            r#"
            SELECT u.id, u.name, u.email,
                   u.section_id, s.name AS section_name,
                   u.assigned_teacher_id, t.name AS assigned_teacher_name,
                   u.created_at, u.updated_at
            FROM users u
            LEFT JOIN sections s ON s.id = u.section_id
            LEFT JOIN users t ON t.id = u.assigned_teacher_id
            WHERE u.id = ? AND u.role = 'student'
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Insert a new student and return the generated id. The role column is
    /// hard-wired to `student`.
    pub async fn create_student(&self, req: &CreateStudentRequest) -> Result<Uuid, sqlx::Error> {
        let timer = QueryTimer::new("create_student");
        let id = Uuid::new_v4();
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO users (id, name, email, role, section_id, assigned_teacher_id, created_at, updated_at)
            VALUES (?, ?, ?, 'student', ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&req.name)
        .bind(&req.email)
        .bind(req.section_id)
        .bind(req.assigned_teacher_id)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await;
        timer.record();
        result.map(|_| id)
    }

    /// Apply the fields present in `req` to a student row. Returns `false`
    /// when no student with that id exists.
    pub async fn update_student(
        &self,
        id: Uuid,
        req: &UpdateStudentRequest,
    ) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("update_student");

        let mut query = String::from("UPDATE users SET updated_at = ?");
        if req.name.is_some() {
            query.push_str(", name = ?");
        }
        if req.email.is_some() {
            query.push_str(", email = ?");
        }
        if req.section_id.is_some() {
            query.push_str(", section_id = ?");
        }
        if req.assigned_teacher_id.is_some() {
            query.push_str(", assigned_teacher_id = ?");
        }
        query.push_str(" WHERE id = ? AND role = 'student'");

        let mut q = sqlx::query(&query).bind(Utc::now());
        if let Some(name) = &req.name {
            q = q.bind(name);
        }
        if let Some(email) = &req.email {
            q = q.bind(email);
        }
        if let Some(section_id) = req.section_id {
            q = q.bind(section_id);
        }
        if let Some(teacher_id) = req.assigned_teacher_id {
            q = q.bind(teacher_id);
        }
        q = q.bind(id);

        let result = q.execute(&self.pool).await;
        timer.record();
        result.map(|done| done.rows_affected() > 0)
    }

    /// Delete a student row. Returns `false` when no student with that id
    /// exists.
    pub async fn delete_student(&self, id: Uuid) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("delete_student");
        let result = sqlx::query("DELETE FROM users WHERE id = ? AND role = 'student'")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        result.map(|done| done.rows_affected() > 0)
    }
}
