//! Domain services for EduTrack.
//!
//! Services contain business logic that operates on domain models. All of
//! them are pure functions so the analytics rules can be tested without a
//! database.

pub mod attendance;
pub mod grading;
pub mod insight;
pub mod reporting;
pub mod risk;

pub use attendance::attendance_rate;
pub use grading::normalize_distribution;
pub use insight::{build_insights, DEFAULT_INSIGHT};
pub use reporting::{month_label, round2, window_start};
pub use risk::{flag_at_risk, is_at_risk};
