//! Analytics repository: the aggregation SQL behind the dashboard and the
//! insight/prediction endpoints.
//!
//! Month bucketing uses `strftime('%Y-%m', ...)` over ISO date columns, so
//! buckets sort correctly as plain text. Shaping (labels, rounding,
//! zero-filling) is left to the domain layer.

use chrono::NaiveDate;
use domain::models::OverallAverages;
use domain::services::attendance_rate;
use sqlx::{Row, SqlitePool};

use crate::entities::{
    LetterCountEntity, MonthlyAttendanceEntity, MonthlyScoreEntity, SectionAverageEntity,
    StudentAggregateEntity, SubjectAverageEntity,
};
use crate::metrics::QueryTimer;

/// Repository for analytics aggregation queries.
#[derive(Clone)]
pub struct AnalyticsRepository {
    pool: SqlitePool,
}

impl AnalyticsRepository {
    /// Creates a new AnalyticsRepository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== Monthly series ====================

    /// Average mark score per calendar month, ascending, for marks recorded
    /// on or after `start`.
    pub async fn monthly_average_scores(
        &self,
        start: NaiveDate,
    ) -> Result<Vec<MonthlyScoreEntity>, sqlx::Error> {
        let timer = QueryTimer::new("analytics_monthly_average_scores");
        let result = sqlx::query_as::<_, MonthlyScoreEntity>(
            r#"
            SELECT strftime('%Y-%m', recorded_on) AS month,
                   AVG(score) AS average_score
            FROM marks
            WHERE recorded_on >= ?
            GROUP BY month
            ORDER BY month ASC
            "#,
        )
        .bind(start)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Present/total attendance counts per calendar month, ascending, for
    /// days on or after `start`. A month only appears if it has rows, so
    /// `total_count` is never zero.
    pub async fn monthly_attendance(
        &self,
        start: NaiveDate,
    ) -> Result<Vec<MonthlyAttendanceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("analytics_monthly_attendance");
        let result = sqlx::query_as::<_, MonthlyAttendanceEntity>(
            r#"
            SELECT strftime('%Y-%m', attended_on) AS month,
                   COUNT(*) FILTER (WHERE present = 1) AS present_count,
                   COUNT(*) AS total_count
            FROM attendance
            WHERE attended_on >= ?
            GROUP BY month
            ORDER BY month ASC
            "#,
        )
        .bind(start)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Mark counts grouped by stored letter grade for marks recorded on or
    /// after `start`. Letters with no marks are absent from the result.
    pub async fn letter_grade_counts(
        &self,
        start: NaiveDate,
    ) -> Result<Vec<LetterCountEntity>, sqlx::Error> {
        let timer = QueryTimer::new("analytics_letter_grade_counts");
        let result = sqlx::query_as::<_, LetterCountEntity>(
            r#"
            SELECT letter_grade,
                   COUNT(*) AS count
            FROM marks
            WHERE recorded_on >= ?
            GROUP BY letter_grade
            "#,
        )
        .bind(start)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    // ==================== Insight and prediction inputs ====================

    /// All-time average score and attendance counts per student, for every
    /// user with the student role. Students without marks or attendance
    /// rows come back with NULL aggregates.
    pub async fn student_aggregates(&self) -> Result<Vec<StudentAggregateEntity>, sqlx::Error> {
        let timer = QueryTimer::new("analytics_student_aggregates");
        let result = sqlx::query_as::<_, StudentAggregateEntity>(
            r#"
            SELECT u.name,
                   u.email,
                   m.avg_score,
                   a.present_count,
                   a.total_count
            FROM users u
            LEFT JOIN (
                SELECT student_id, AVG(score) AS avg_score
                FROM marks
                GROUP BY student_id
            ) m ON m.student_id = u.id
            LEFT JOIN (
                SELECT student_id,
                       COUNT(*) FILTER (WHERE present = 1) AS present_count,
                       COUNT(*) AS total_count
                FROM attendance
                GROUP BY student_id
            ) a ON a.student_id = u.id
            WHERE u.role = 'student'
            ORDER BY u.name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// The `limit` lowest-averaging subjects that have at least one mark,
    /// ascending by average.
    pub async fn bottom_subject_averages(
        &self,
        limit: i64,
    ) -> Result<Vec<SubjectAverageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("analytics_bottom_subject_averages");
        let result = sqlx::query_as::<_, SubjectAverageEntity>(
            r#"
            SELECT s.name,
                   AVG(m.score) AS average_score,
                   COUNT(m.id) AS mark_count
            FROM subjects s
            JOIN marks m ON m.subject_id = s.id
            GROUP BY s.id
            ORDER BY average_score ASC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Average score per section, ascending, over the marks of the section's
    /// students. Sections with no marked students are absent.
    pub async fn section_averages(&self) -> Result<Vec<SectionAverageEntity>, sqlx::Error> {
        let timer = QueryTimer::new("analytics_section_averages");
        let result = sqlx::query_as::<_, SectionAverageEntity>(
            r#"
            SELECT sec.name,
                   AVG(m.score) AS average_score
            FROM sections sec
            JOIN users u ON u.section_id = sec.id
            JOIN marks m ON m.student_id = u.id
            GROUP BY sec.id
            ORDER BY average_score ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// School-wide average score and attendance percentage. Either side is
    /// `None` when its table has no rows at all.
    pub async fn overall_averages(&self) -> Result<OverallAverages, sqlx::Error> {
        let timer = QueryTimer::new("analytics_overall_averages");

        let score_row = sqlx::query("SELECT AVG(score) AS average_score FROM marks")
            .fetch_one(&self.pool)
            .await?;
        let attendance_row = sqlx::query(
            r#"
            SELECT COUNT(*) FILTER (WHERE present = 1) AS present_count,
                   COUNT(*) AS total_count
            FROM attendance
            "#,
        )
        .fetch_one(&self.pool)
        .await?;
        timer.record();

        let average_score: Option<f64> = score_row.get("average_score");
        let present: i64 = attendance_row.get("present_count");
        let total: i64 = attendance_row.get("total_count");
        let attendance_pct = (total > 0).then(|| attendance_rate(present, total));

        Ok(OverallAverages {
            average_score,
            attendance_pct,
        })
    }
}
