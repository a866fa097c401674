//! Domain-level errors.
//!
//! `ValidationError` is raised by validators and entity setters.
//! `AdapterError` is raised by anything behind a port (repositories,
//! hashing, token signing, id generation). Neither is shown to callers
//! directly: the use-case boundary translates both.

use thiserror::Error;

/// A single field failed its validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Failure reported by an external collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdapterError {
    /// Persistence failed (I/O, serialization, poisoned lock, constraint)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Password hashing or verification failed
    #[error("Hashing error: {0}")]
    Hashing(String),

    /// Token signing or decoding failed
    #[error("Token error: {0}")]
    Token(String),

    /// Id generator failed
    #[error("Id generation error: {0}")]
    IdGeneration(String),
}

impl AdapterError {
    pub fn storage(msg: impl Into<String>) -> Self {
        AdapterError::Storage(msg.into())
    }

    pub fn hashing(msg: impl Into<String>) -> Self {
        AdapterError::Hashing(msg.into())
    }

    pub fn token(msg: impl Into<String>) -> Self {
        AdapterError::Token(msg.into())
    }
}

/// Result type alias for validators and entity setters
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type alias for port implementations
pub type AdapterResult<T> = Result<T, AdapterError>;
