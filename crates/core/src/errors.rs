//! Core error types for the debt payoff engine.
//!
//! The engine is a pure computation, so every error is local to a single call.
//! Input problems surface as [`ValidationError`]s; anything the simulation itself
//! cannot represent surfaces as [`Error::Calculation`].

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the payoff engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Payoff calculation failed: {0}")]
    Calculation(String),
}

/// Validation errors for caller-supplied debts and payment amounts.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl Error {
    /// Shorthand for an [`ValidationError::InvalidInput`] wrapped in the root error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::Validation(ValidationError::InvalidInput(message.into()))
    }
}
