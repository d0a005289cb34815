// Error taxonomy for collection and form operations

use thiserror::Error;

use crate::models::IssueStatus;

/// A single inline form-field failure, surfaced per-field and never fatal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as the form knows it ("email", "title", ...)
    pub field: String,
    /// Human-readable message for inline display
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Target id absent from the collection; callers log and no-op
    #[error("no record with id '{id}'")]
    NotFound { id: String },

    /// Record ids must stay unique within one collection
    #[error("record id '{id}' already exists in collection")]
    DuplicateId { id: String },

    /// Record id failed validation (empty, whitespace-only, or oversized)
    #[error("invalid record id: {reason}")]
    InvalidId { reason: String },

    /// Status move not allowed by the transition table
    #[error("invalid status transition: {from} -> {to}")]
    InvalidTransition { from: IssueStatus, to: IssueStatus },

    /// One or more form fields failed validation
    #[error("validation failed on {} field(s)", .0.len())]
    Validation(Vec<FieldError>),
}

pub type Result<T> = std::result::Result<T, Error>;
