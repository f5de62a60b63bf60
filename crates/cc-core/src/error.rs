//! # AppError
//!
//! Centralized error handling for the CitizenConnect workspace.
//! Every failure resolves to "show an inline message" or "treat as signed out";
//! nothing here is fatal to the process.

use thiserror::Error;

/// The primary error type for all cc-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A required field was missing or a form check failed
    /// (e.g., empty email, password mismatch, blank response).
    #[error("validation error: {0}")]
    ValidationError(String),

    /// The persisted session slot could not be read or parsed.
    /// The session store swallows this and starts signed out.
    #[error("storage read error: {0}")]
    StorageReadError(String),

    /// The caller's session does not grant access to the requested dashboard.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Infrastructure failure (e.g., the session slot could not be written).
    #[error("internal service error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// The bare message, without the category prefix, for inline display.
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError(msg)
            | Self::StorageReadError(msg)
            | Self::Unauthorized(msg)
            | Self::Internal(msg) => msg,
        }
    }
}

/// A specialized Result type for CitizenConnect logic.
pub type Result<T> = std::result::Result<T, AppError>;
