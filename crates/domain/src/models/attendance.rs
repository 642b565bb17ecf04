//! Attendance domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One attendance entry: a student, a day, present or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub student_id: Uuid,
    pub attended_on: NaiveDate,
    pub present: bool,
    pub marked_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Request to record attendance for a student on a day.
///
/// A second write for the same student and day replaces the first; the day
/// has one authoritative entry.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordAttendanceRequest {
    pub student_id: Uuid,

    #[validate(custom(function = "shared::validation::validate_record_date"))]
    pub attended_on: NaiveDate,

    pub present: bool,
}
