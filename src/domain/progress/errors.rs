//! Progress-specific error types.

use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors returned by ledger transitions.
///
/// Duplicate check-ins and repeated mission completion are outcomes,
/// not errors; only invalid input is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProgressError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_validation_errors() {
        let err: ProgressError = ValidationError::empty_field("trigger").into();
        assert_eq!(
            err.to_string(),
            "validation failed: Field 'trigger' cannot be empty"
        );
    }
}
