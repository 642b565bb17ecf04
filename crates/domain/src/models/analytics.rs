//! Analytics domain models: dashboard trend points, grade distribution,
//! at-risk prediction and insight payloads.

use serde::{Deserialize, Serialize};

use super::mark::LetterGrade;

// ============================================================================
// Range selection
// ============================================================================

/// How far back an analytics query looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnalyticsRange {
    #[serde(rename = "3m")]
    ThreeMonths,
    #[default]
    #[serde(rename = "6m")]
    SixMonths,
    #[serde(rename = "12m")]
    TwelveMonths,
}

impl AnalyticsRange {
    pub fn months(&self) -> u32 {
        match self {
            AnalyticsRange::ThreeMonths => 3,
            AnalyticsRange::SixMonths => 6,
            AnalyticsRange::TwelveMonths => 12,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyticsRange::ThreeMonths => "3m",
            AnalyticsRange::SixMonths => "6m",
            AnalyticsRange::TwelveMonths => "12m",
        }
    }
}

/// Query parameters shared by the analytics endpoints.
///
/// An unknown `range` value fails deserialization and surfaces as a 400.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct AnalyticsQuery {
    #[serde(default)]
    pub range: AnalyticsRange,
}

// ============================================================================
// Trend points
// ============================================================================

/// Average mark score for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyScorePoint {
    /// Bucket key, `YYYY-MM`.
    pub month: String,
    /// Human label, e.g. `Jan 2025`.
    pub month_label: String,
    pub average_score: f64,
}

/// Attendance rate for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyAttendancePoint {
    pub month: String,
    pub month_label: String,
    /// Percentage of present entries, 0-100.
    pub attendance_rate: f64,
    pub present_count: i64,
    pub total_count: i64,
}

/// One bucket of the letter-grade distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeBucket {
    pub grade: LetterGrade,
    pub count: i64,
}

// ============================================================================
// At-risk prediction
// ============================================================================

/// Per-student aggregates the risk rules run over.
///
/// `None` means the student has no marks (or no attendance entries) at all,
/// which is different from a low value.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentAggregate {
    pub name: String,
    pub email: String,
    pub avg_score: Option<f64>,
    pub attendance_pct: Option<f64>,
}

/// One flagged student in the prediction response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskStudent {
    pub name: String,
    pub email: String,
    pub avg_score: Option<f64>,
    pub attendance_pct: Option<f64>,
}

/// Response for `GET /api/v1/ai/predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtRiskResponse {
    pub count: i64,
    pub at_risk_students: Vec<AtRiskStudent>,
}

// ============================================================================
// Insights
// ============================================================================

/// Average score for one subject, for the insight rules.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectAverage {
    pub name: String,
    pub average_score: f64,
    pub mark_count: i64,
}

/// School-wide aggregates, for the insight rules.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverallAverages {
    pub average_score: Option<f64>,
    pub attendance_pct: Option<f64>,
}

/// Average score for one section, for the insight rules.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionAverage {
    pub name: String,
    pub average_score: f64,
}

/// Response for `GET /api/v1/ai/insights`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub insights: Vec<String>,
}
