//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod analytics;
pub mod attendance;
pub mod mark;
pub mod section;
pub mod student;
pub mod user;

pub use analytics::{
    LetterCountEntity, MonthlyAttendanceEntity, MonthlyScoreEntity, SectionAverageEntity,
    StudentAggregateEntity, SubjectAverageEntity,
};
pub use attendance::AttendanceEntity;
pub use mark::{MarkEntity, SubjectEntity};
pub use section::SectionEntity;
pub use student::{StudentDetailEntity, StudentSummaryEntity};
pub use user::UserEntity;
