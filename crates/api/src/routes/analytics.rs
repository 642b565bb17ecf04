//! Analytics dashboard routes.
//!
//! Monthly performance and attendance trends plus the letter-grade
//! distribution. The SQL aggregation lives in `AnalyticsRepository`; the
//! handlers only pick the window and shape the rows for the wire.

use axum::{extract::State, Json};
use chrono::Utc;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Query, StaffAuth};
use domain::models::{AnalyticsQuery, GradeBucket, MonthlyAttendancePoint, MonthlyScorePoint};
use domain::services::{attendance_rate, month_label, normalize_distribution, round2, window_start};
use persistence::repositories::AnalyticsRepository;

/// Average mark score per calendar month in the requested range.
#[axum::debug_handler]
pub async fn monthly_performance(
    State(state): State<AppState>,
    _staff: StaffAuth,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<Vec<MonthlyScorePoint>>, ApiError> {
    let start = window_start(Utc::now().date_naive(), query.range);

    let repo = AnalyticsRepository::new(state.pool.clone());
    let rows = repo.monthly_average_scores(start).await?;

    let points = rows
        .into_iter()
        .map(|row| MonthlyScorePoint {
            month_label: month_label(&row.month),
            month: row.month,
            average_score: round2(row.average_score),
        })
        .collect();

    Ok(Json(points))
}

/// Attendance rate per calendar month in the requested range.
#[axum::debug_handler]
pub async fn monthly_attendance(
    State(state): State<AppState>,
    _staff: StaffAuth,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<Vec<MonthlyAttendancePoint>>, ApiError> {
    let start = window_start(Utc::now().date_naive(), query.range);

    let repo = AnalyticsRepository::new(state.pool.clone());
    let rows = repo.monthly_attendance(start).await?;

    let points = rows
        .into_iter()
        .map(|row| MonthlyAttendancePoint {
            month_label: month_label(&row.month),
            month: row.month,
            attendance_rate: round2(attendance_rate(row.present_count, row.total_count)),
            present_count: row.present_count,
            total_count: row.total_count,
        })
        .collect();

    Ok(Json(points))
}

/// Letter-grade distribution over the requested range.
///
/// Always returns exactly the five buckets A through F, in that order.
#[axum::debug_handler]
pub async fn grade_distribution(
    State(state): State<AppState>,
    _staff: StaffAuth,
    Query(query): Query<AnalyticsQuery>,
) -> Result<Json<Vec<GradeBucket>>, ApiError> {
    let start = window_start(Utc::now().date_naive(), query.range);

    let repo = AnalyticsRepository::new(state.pool.clone());
    let rows = repo.letter_grade_counts(start).await?;

    let distribution =
        normalize_distribution(rows.into_iter().map(|row| (row.letter_grade, row.count)));

    Ok(Json(distribution))
}
