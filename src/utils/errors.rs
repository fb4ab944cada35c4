//! Error handling for FormBridge
//!
//! This module defines the main error type used throughout the bridge
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for FormBridge
#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend unreachable: {0}")]
    Transport(String),

    #[error("Backend request timed out")]
    Timeout,

    #[error("Backend returned HTTP {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Element not found: {id}")]
    ElementNotFound { id: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Form snapshot error: {0}")]
    Snapshot(String),
}

/// Result type alias for FormBridge operations
pub type Result<T> = std::result::Result<T, BridgeError>;

impl BridgeError {
    /// Shorthand for a missing document element
    pub fn element_not_found(id: impl Into<String>) -> Self {
        BridgeError::ElementNotFound { id: id.into() }
    }

    /// Check if the error is recoverable
    ///
    /// Recoverable errors leave the document usable; triggering the action
    /// again may succeed.
    pub fn is_recoverable(&self) -> bool {
        match self {
            BridgeError::Config(_) => false,
            BridgeError::Http(_) => true,
            BridgeError::Transport(_) => true,
            BridgeError::Timeout => true,
            BridgeError::Backend { .. } => true,
            BridgeError::InvalidResponse(_) => true,
            BridgeError::Serialization(_) => false,
            BridgeError::ElementNotFound { .. } => false,
            BridgeError::InvalidInput(_) => true,
            BridgeError::UrlParse(_) => false,
            BridgeError::Io(_) => true,
            BridgeError::Snapshot(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BridgeError::Config(_) => ErrorSeverity::Critical,
            BridgeError::ElementNotFound { .. } => ErrorSeverity::Critical,
            BridgeError::UrlParse(_) => ErrorSeverity::Critical,
            BridgeError::Timeout => ErrorSeverity::Warning,
            BridgeError::Transport(_) => ErrorSeverity::Warning,
            BridgeError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_are_recoverable() {
        assert!(BridgeError::Timeout.is_recoverable());
        assert!(BridgeError::Transport("connection refused".to_string()).is_recoverable());
        assert!(!BridgeError::Config("missing base url".to_string()).is_recoverable());
    }

    #[test]
    fn test_missing_element_is_critical() {
        let err = BridgeError::element_not_found("login-email");
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.to_string(), "Element not found: login-email");
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(ErrorSeverity::Warning.to_string(), "WARN");
        assert_eq!(ErrorSeverity::Critical.to_string(), "CRITICAL");
    }
}
