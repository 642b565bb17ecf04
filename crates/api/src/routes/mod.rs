//! HTTP route handlers.

pub mod ai;
pub mod analytics;
pub mod health;
pub mod students;
