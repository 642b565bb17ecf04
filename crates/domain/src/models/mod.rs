//! Domain models for EduTrack.

pub mod analytics;
pub mod attendance;
pub mod mark;
pub mod section;
pub mod student;
pub mod user;

pub use analytics::{
    AnalyticsQuery, AnalyticsRange, AtRiskResponse, AtRiskStudent, GradeBucket, InsightsResponse,
    MonthlyAttendancePoint, MonthlyScorePoint, OverallAverages, SectionAverage, StudentAggregate,
    SubjectAverage,
};
pub use attendance::{AttendanceRecord, RecordAttendanceRequest};
pub use mark::{ExamType, LetterGrade, Mark, RecordMarkRequest, Subject, ALL_LETTER_GRADES};
pub use section::{CreateSectionRequest, Section};
pub use student::{
    CreateStudentRequest, NamedRef, StudentDetail, StudentListQuery, StudentListResponse,
    StudentSummary, UpdateStudentRequest,
};
pub use user::{User, UserRole};
