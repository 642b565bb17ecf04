//! Repository implementations for database operations.

pub mod analytics;
pub mod attendance;
pub mod mark;
pub mod section;
pub mod student;
pub mod subject;
pub mod user;

pub use analytics::AnalyticsRepository;
pub use attendance::AttendanceRepository;
pub use mark::MarkRepository;
pub use section::SectionRepository;
pub use student::StudentRepository;
pub use subject::SubjectRepository;
pub use user::UserRepository;
