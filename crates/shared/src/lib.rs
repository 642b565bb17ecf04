//! Shared utilities and common types for the EduTrack backend.
//!
//! This crate provides common functionality used across all other crates:
//! - In-process TTL caching
//! - JWT validation against the platform auth secret
//! - Page-based pagination types
//! - Common validation logic

pub mod cache;
pub mod jwt;
pub mod pagination;
pub mod validation;
