//! Rule-based insight and at-risk prediction routes.
//!
//! Despite living under `/api/v1/ai`, these are deterministic threshold
//! rules over the same aggregates the dashboard uses. The rule logic is in
//! `domain::services`; the handlers fetch aggregates and hand them over.

use axum::{extract::State, Json};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::StaffAuth;
use domain::models::{
    AtRiskResponse, InsightsResponse, SectionAverage, StudentAggregate, SubjectAverage,
};
use domain::services::{build_insights, flag_at_risk};
use persistence::repositories::AnalyticsRepository;

/// How many of the weakest subjects the trend rule inspects.
const WEAK_SUBJECT_LIMIT: i64 = 3;

/// Assembles the insight strings for the staff dashboard.
#[axum::debug_handler]
pub async fn insights(
    State(state): State<AppState>,
    _staff: StaffAuth,
) -> Result<Json<InsightsResponse>, ApiError> {
    let repo = AnalyticsRepository::new(state.pool.clone());

    let weak_subjects: Vec<SubjectAverage> = repo
        .bottom_subject_averages(WEAK_SUBJECT_LIMIT)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let overall = repo.overall_averages().await?;

    let sections: Vec<SectionAverage> = repo
        .section_averages()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let insights = build_insights(&weak_subjects, overall, &sections);

    Ok(Json(InsightsResponse { insights }))
}

/// Flags students whose average score or attendance crosses the risk
/// thresholds.
#[axum::debug_handler]
pub async fn predict(
    State(state): State<AppState>,
    _staff: StaffAuth,
) -> Result<Json<AtRiskResponse>, ApiError> {
    let repo = AnalyticsRepository::new(state.pool.clone());

    let aggregates: Vec<StudentAggregate> = repo
        .student_aggregates()
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let at_risk_students = flag_at_risk(aggregates);

    Ok(Json(AtRiskResponse {
        count: at_risk_students.len() as i64,
        at_risk_students,
    }))
}
