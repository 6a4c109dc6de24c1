//! Error types for numeric input handling.
//!
//! These never leave the editor: a rejected commit reverts the field.

use thiserror::Error;

/// Reasons a piece of edited text cannot become a committed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing left to parse after sanitizing
    #[error("input is empty")]
    Empty,

    /// Sanitized text is still not a valid decimal number
    #[error("'{text}' is not a number")]
    NotANumber { text: String },
}
