//! Field validation helpers shared by every resource kind.
//!
//! Each helper checks a single declared constraint and reports the offending
//! field by name, so handlers can surface field-level detail. Validation is
//! purely structural: lengths and signs, never content (timestamps are
//! length-checked text, not parsed dates).

use thiserror::Error;

/// A single field constraint violation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldError {
    /// JSON name of the offending field.
    pub field: &'static str,

    /// Human-readable description of the violated constraint.
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: String) -> Self {
        Self { field, message }
    }
}

/// Trim a text field and check its length bounds.
///
/// Returns the trimmed value, which is what gets stored: trimming is the only
/// normalization the service applies anywhere.
pub fn trimmed_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<String, FieldError> {
    let trimmed = value.trim();

    if trimmed.is_empty() && min > 0 {
        return Err(FieldError::new(field, format!("{field} must not be empty")));
    }

    let length = trimmed.chars().count();
    if length < min || length > max {
        return Err(FieldError::new(
            field,
            format!("{field} must be between {min} and {max} characters"),
        ));
    }

    Ok(trimmed.to_string())
}

/// Check that a text field meets a minimum length, without trimming.
pub fn min_length(field: &'static str, value: &str, min: usize) -> Result<(), FieldError> {
    if value.chars().count() < min {
        return Err(FieldError::new(
            field,
            format!("{field} must be at least {min} characters"),
        ));
    }

    Ok(())
}

/// Check that a floating point field is a non-negative finite number.
pub fn non_negative(field: &'static str, value: f64) -> Result<(), FieldError> {
    if !value.is_finite() || value < 0.0 {
        return Err(FieldError::new(
            field,
            format!("{field} must be a non-negative number"),
        ));
    }

    Ok(())
}
