//! Shared types and errors for Tripmate.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Application-wide error types

pub mod error;
pub mod types;

pub use error::{AppError, AppResult};
