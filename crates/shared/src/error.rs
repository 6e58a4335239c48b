//! Error types for PDMS

use thiserror::Error;

/// Raised when an authenticated role lacks permission for a route.
///
/// This is a value the guard returns, not a hardwired console message - the
/// caller decides whether to log it, audit it, or surface it to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Access denied: role \"{role}\" lacks permissions for '{path}'")]
pub struct AccessDeniedError {
    /// Normalized role that attempted the navigation
    pub role: String,
    /// Path that was requested
    pub path: String,
}

/// General PDMS error type
#[derive(Debug, Error)]
pub enum PdmsError {
    #[error(transparent)]
    AccessDenied(#[from] AccessDeniedError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PdmsError>;
