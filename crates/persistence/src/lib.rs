//! Persistence layer for the EduTrack analytics backend.
//!
//! This crate contains:
//! - Database connection management
//! - Embedded schema migrations (`src/migrations`)
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
