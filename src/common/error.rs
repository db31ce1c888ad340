// Error taxonomy shared across modules
//
// Every failure here is recoverable: it resolves to an inline field
// message or a dismissible alert, never a panic.

use thiserror::Error;

use super::validation::ValidationResult;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Fetch(String),
}

/// Collapse a failed validation into a single submit-blocking error
impl From<ValidationResult> for AppError {
    fn from(result: ValidationResult) -> Self {
        let messages: Vec<String> = result
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        AppError::Validation(messages.join(", "))
    }
}
