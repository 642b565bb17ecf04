//! Domain layer for the EduTrack backend.
//!
//! This crate contains:
//! - Domain models (users, sections, marks, attendance, analytics DTOs)
//! - Pure business rules (grading, at-risk prediction, insights)

pub mod models;
pub mod services;
