//! Session store error types

use thiserror::Error;

/// Errors that can occur in the session store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Creating another session would exceed the configured limit
    #[error("Session limit reached ({max} active sessions)")]
    CapacityReached { max: usize },

    /// No session with this id exists (expired or never created)
    #[error("Session not found: {0}")]
    NotFound(String),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
