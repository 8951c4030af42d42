//! Field-level checks for incoming create/update payloads.
//!
//! Every failure is a [`CoreError::Validation`], which the API layer answers
//! with `422 Unprocessable Entity`.

use crate::error::CoreError;

/// Require a field to be present.
pub fn required<T>(field: &str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("{field} is required")))
}

/// Require a string field to be present and not blank. Returns it trimmed.
pub fn required_text(field: &str, value: Option<String>) -> Result<String, CoreError> {
    let value = required(field, value)?;
    non_blank(field, &value).map(str::to_string)
}

/// Reject a string that is empty after trimming.
pub fn non_blank<'a>(field: &str, value: &'a str) -> Result<&'a str, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed)
}

/// Check an optional replacement value on update: `None` means "leave as is",
/// `Some("")` is rejected. A present value comes back trimmed, as on create.
pub fn optional_text(field: &str, value: Option<String>) -> Result<Option<String>, CoreError> {
    value
        .map(|v| non_blank(field, &v).map(str::to_string))
        .transpose()
}

/// Reject non-positive integers (ages, foreign keys).
pub fn positive(field: &str, value: i64) -> Result<i64, CoreError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be positive, got {value}"
        )))
    }
}
