//! At-risk student prediction.
//!
//! Deliberately simple threshold rules. They are transparent to staff and
//! reproducible in tests, which matters more here than model accuracy.

use std::cmp::Ordering;

use crate::models::analytics::{AtRiskStudent, StudentAggregate};
use crate::services::reporting::round2;

/// A student averaging below this score is flagged.
pub const AT_RISK_SCORE_THRESHOLD: f64 = 45.0;

/// A student attending below this percentage is flagged.
pub const AT_RISK_ATTENDANCE_THRESHOLD: f64 = 70.0;

/// Whether one student's aggregates trip either risk rule.
///
/// A missing aggregate never satisfies its clause: a freshly enrolled
/// student with no marks and no attendance is unknown, not at risk.
pub fn is_at_risk(avg_score: Option<f64>, attendance_pct: Option<f64>) -> bool {
    let low_score = avg_score.is_some_and(|score| score < AT_RISK_SCORE_THRESHOLD);
    let low_attendance =
        attendance_pct.is_some_and(|pct| pct < AT_RISK_ATTENDANCE_THRESHOLD);
    low_score || low_attendance
}

/// Filters aggregates down to flagged students, worst average first.
///
/// Students without any marks sort before everyone else; their average
/// serializes as null rather than a made-up zero.
pub fn flag_at_risk(aggregates: Vec<StudentAggregate>) -> Vec<AtRiskStudent> {
    let mut flagged: Vec<AtRiskStudent> = aggregates
        .into_iter()
        .filter(|agg| is_at_risk(agg.avg_score, agg.attendance_pct))
        .map(|agg| AtRiskStudent {
            name: agg.name,
            email: agg.email,
            avg_score: agg.avg_score.map(round2),
            attendance_pct: agg.attendance_pct.map(round2),
        })
        .collect();

    flagged.sort_by(|a, b| match (a.avg_score, b.avg_score) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
    });

    tracing::debug!(flagged = flagged.len(), "at-risk prediction computed");
    flagged
}
