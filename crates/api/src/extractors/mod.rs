//! Custom Axum extractors.
//!
//! Extractors for authenticating requests before a handler runs, plus
//! Query/Json wrappers whose rejections use the JSON error envelope.

pub mod rejection;
pub mod staff_auth;
pub mod user_auth;

pub use rejection::{Json, Query};
pub use staff_auth::StaffAuth;
pub use user_auth::UserAuth;
