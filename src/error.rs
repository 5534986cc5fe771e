//! Error types for card and card-list operations.

use crate::money::Money;
use thiserror::Error;

/// Result type alias for card operations
pub type Result<T> = std::result::Result<T, CardError>;

/// Errors that can occur while working with cards and card lists.
#[derive(Error, Debug)]
pub enum CardError {
    /// Failed to open or read an input file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading error not tied to a single record
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Non-numeric or non-positive amount, or malformed account number
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Charge would push the balance above the card limit
    #[error("Charge of {requested} exceeds remaining credit of {available}")]
    LimitExceeded { requested: Money, available: Money },

    /// A card with this account number is already in the list
    #[error("A card with account number {account_no} already exists")]
    DuplicateKey { account_no: String },

    /// Index (after negative adjustment) falls outside the list
    #[error("List index {index} out of range for length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// No card with this account number in the searched range
    #[error("Card with account number {account_no} not found")]
    KeyNotFound { account_no: String },

    /// Input row that is not a card record
    #[error("Row {row} is not a card record: {message}")]
    TypeMismatch { row: usize, message: String },
}

impl CardError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        CardError::InvalidInput {
            message: message.into(),
        }
    }
}
