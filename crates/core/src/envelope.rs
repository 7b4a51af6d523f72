//! Uniform result envelopes.
//!
//! Every public catalog operation answers with the same shape: a success
//! flag, a [`Status`], an optional error summary, the per-field errors and
//! (for queries) an optional payload. Presentation layers branch on
//! `success` and render `error` plus each field message; no raw error type
//! crosses this boundary.

use serde::{Deserialize, Serialize};

use crate::status::Status;

/// Summary used whenever one or more field rules fail.
pub const FIELD_ERRORS_SUMMARY: &str = "Fields have errors.";

/// One violated field rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Contractual field key (e.g. `Name`, `Price`).
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of a validation or uniqueness check. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub success: bool,
    pub status: Status,
    pub error: Option<String>,
    pub field_errors: Vec<FieldError>,
}

impl ValidationResult {
    /// All rules passed.
    pub fn passed() -> Self {
        Self {
            success: true,
            status: Status::NoContent,
            error: None,
            field_errors: Vec::new(),
        }
    }

    /// Input rejected as a whole, without field detail.
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            status: Status::BadRequest,
            error: Some(message.into()),
            field_errors: Vec::new(),
        }
    }

    /// Build the result from the collected violations, preserving their order.
    pub fn from_field_errors(field_errors: Vec<FieldError>) -> Self {
        if field_errors.is_empty() {
            return Self::passed();
        }
        Self {
            success: false,
            status: Status::BadRequest,
            error: Some(FIELD_ERRORS_SUMMARY.to_string()),
            field_errors,
        }
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.field_errors.iter().any(|e| e.field == field)
    }
}

/// Envelope returned by every catalog operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult<T> {
    pub success: bool,
    pub status: Status,
    pub error: Option<String>,
    pub field_errors: Vec<FieldError>,
    pub content: Option<T>,
}

impl<T> QueryResult<T> {
    /// Success (200) carrying a payload.
    pub fn ok(content: T) -> Self {
        Self {
            success: true,
            status: Status::Ok,
            error: None,
            field_errors: Vec::new(),
            content: Some(content),
        }
    }

    /// Success (200) without payload.
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            status: Status::Ok,
            error: None,
            field_errors: Vec::new(),
            content: None,
        }
    }

    /// Success of a pure mutation (204).
    pub fn no_content() -> Self {
        Self {
            success: true,
            status: Status::NoContent,
            error: None,
            field_errors: Vec::new(),
            content: None,
        }
    }

    /// Failure (404).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure(Status::NotFound, message)
    }

    /// Failure with an arbitrary status.
    pub fn failure(status: Status, message: impl Into<String>) -> Self {
        Self {
            success: false,
            status,
            error: Some(message.into()),
            field_errors: Vec::new(),
            content: None,
        }
    }

    /// Attach a payload, keeping every other field.
    pub fn with_content(mut self, content: T) -> Self {
        self.content = Some(content);
        self
    }
}

impl<T> From<ValidationResult> for QueryResult<T> {
    fn from(value: ValidationResult) -> Self {
        Self {
            success: value.success,
            status: value.status,
            error: value.error,
            field_errors: value.field_errors,
            content: None,
        }
    }
}
