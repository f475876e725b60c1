//! Movie schema subsystem.
//!
//! Defines the record types and the validation rules enforced on every write.
//!
//! # Design Principles
//!
//! - Validation happens before any store mutation
//! - Full validation for creates, per-present-field validation for patches
//! - Issues are collected per field, never short-circuited
//! - Unknown keys (including `id`) are stripped, not rejected

mod errors;
mod types;
mod validator;

pub use errors::{FieldIssue, ValidationError, ValidationResult};
pub use types::{Genre, Movie, MoviePatch, NewMovie};
pub use validator::{max_year, validate_full, validate_partial, DEFAULT_RATE, MIN_YEAR};
