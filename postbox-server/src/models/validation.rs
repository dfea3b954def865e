//! Validation errors for user-submitted fields.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// Field exceeds the maximum length.
    #[error("{field} exceeds maximum length of {max} bytes")]
    TooLong { field: &'static str, max: usize },
}
