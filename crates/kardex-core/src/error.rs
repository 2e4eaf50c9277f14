//! # Validation Error
//!
//! The error type produced by field-level validation.
//!
//! Validation is non-short-circuiting: every rule for an entity runs, and
//! every violated field contributes one message. The caller receives a
//! single error whose display form is the combined message list, so a form
//! can surface all problems at once instead of one per submit.

use thiserror::Error;

/// Accumulated field-level validation failures for one entity.
///
/// Display joins all messages into one string:
///
/// ```rust
/// use kardex_core::ValidationError;
///
/// let err = ValidationError::new(vec![
///     "product id must not be empty".to_string(),
///     "stock must not be negative".to_string(),
/// ]);
/// assert_eq!(
///     err.to_string(),
///     "product id must not be empty, stock must not be negative"
/// );
/// ```
#[derive(Debug, Clone, Error)]
#[error("{}", .messages.join(", "))]
pub struct ValidationError {
    /// One message per violated field, in rule order.
    pub messages: Vec<String>,
}

impl ValidationError {
    /// Creates a validation error from a list of field messages.
    pub fn new(messages: Vec<String>) -> Self {
        ValidationError { messages }
    }

    /// Creates a validation error with a single message.
    ///
    /// Used by business rules that fail on one condition (bad quantity,
    /// insufficient stock) rather than per-field accumulation.
    pub fn single(message: impl Into<String>) -> Self {
        ValidationError {
            messages: vec![message.into()],
        }
    }
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_message_display() {
        let err = ValidationError::single("quantity must be greater than zero");
        assert_eq!(err.to_string(), "quantity must be greater than zero");
    }

    #[test]
    fn test_combined_message_display() {
        let err = ValidationError::new(vec![
            "name must not be empty".to_string(),
            "price must be greater than zero".to_string(),
        ]);
        assert_eq!(
            err.to_string(),
            "name must not be empty, price must be greater than zero"
        );
    }
}
