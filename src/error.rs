//! Structured error types for ledger operations.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors
    EmptyTaskText,
    InvalidGoal,

    // Not found errors
    TaskNotFound,

    // Internal errors
    StorageError,
    InternalError,
}

/// Structured error for ledger operations.
///
/// Validation and not-found errors never mutate state; callers surface them
/// as a form-level message or treat them as a no-op.
#[derive(Debug, Serialize, Error)]
#[error("{message}")]
pub struct LedgerError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl LedgerError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    // Convenience constructors

    pub fn empty_task_text() -> Self {
        Self::new(ErrorCode::EmptyTaskText, "task text must not be empty").with_field("text")
    }

    pub fn invalid_goal(field: &str) -> Self {
        Self::new(
            ErrorCode::InvalidGoal,
            format!("{} must be a positive number of points", field),
        )
        .with_field(field)
    }

    pub fn task_not_found(task_id: &str) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task not found: {}", task_id),
        )
    }

    pub fn storage(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::StorageError, err.to_string())
    }

    pub fn internal(err: impl fmt::Display) -> Self {
        Self::new(ErrorCode::InternalError, err.to_string())
    }
}

// Allow using ? with anyhow errors by converting them
impl From<anyhow::Error> for LedgerError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<LedgerError>() {
            Ok(ledger_err) => ledger_err,
            Err(err) => LedgerError::storage(err),
        }
    }
}

/// Result type for ledger operations.
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;
