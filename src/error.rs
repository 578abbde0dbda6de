//! Top-level error types.
//!
//! Covers the failures that abort the program itself: configuration and
//! I/O problems. Parse failures use their own typed result
//! ([`crate::commands::ParseError`]) because callers must distinguish "do
//! not execute this line" from "abort".

use thiserror::Error;

/// Main error type for conch operations.
#[derive(Error, Debug)]
pub enum ConchError {
    /// Configuration errors (invalid config file, bad CLI combination).
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors (reading input, writing output).
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal application errors (unexpected states, bugs).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ConchError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates an I/O error with the given message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Io(_) => "I/O Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using ConchError.
pub type Result<T> = std::result::Result<T, ConchError>;
