//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in cart and money operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Price is negative, NaN, infinite or unparsable.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Product name is empty.
    #[error("Product name must not be empty")]
    EmptyName,

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
