//! Validation error types.
//!
//! A failed validation is a list of field-keyed issues rather than a single
//! opaque message, so a client sees every offending field at once.

use serde::Serialize;
use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// One field that failed validation, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    /// Path of the offending field (`"title"`, `"genre[2]"`, or `"$root"`
    /// when the candidate is not a JSON object).
    pub field: String,
    /// What the field must look like instead.
    pub message: String,
}

impl FieldIssue {
    /// Create an issue for a field.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Collected validation failure for a candidate record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed on {} field(s)", .issues.len())]
pub struct ValidationError {
    /// Every issue found, in schema field order.
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Failure with a full issue list.
    pub fn new(issues: Vec<FieldIssue>) -> Self {
        Self { issues }
    }

    /// Failure with a single issue.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![FieldIssue::new(field, message)],
        }
    }

    /// The offending field paths, in reported order.
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|issue| issue.field.as_str()).collect()
    }
}
