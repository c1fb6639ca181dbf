//! Unified application error types for VaultKit.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across VaultKit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The operating system entropy source could not supply random bytes.
    EntropyUnavailable,
    /// The password hashing primitive rejected the input or failed internally.
    Hashing,
    /// A configuration error occurred.
    Configuration,
    /// Configuration values failed validation rules.
    Validation,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An I/O error occurred.
    Io,
    /// A caller-imposed deadline elapsed.
    Timeout,
    /// An internal error occurred.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EntropyUnavailable => write!(f, "ENTROPY_UNAVAILABLE"),
            Self::Hashing => write!(f, "HASHING"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Io => write!(f, "IO"),
            Self::Timeout => write!(f, "TIMEOUT"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout VaultKit.
///
/// Weak passwords and unknown alphabet names are not errors; only failures
/// of a collaborator (entropy source, hashing primitive, config loader)
/// produce an `AppError`.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an entropy-unavailable error.
    pub fn entropy_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EntropyUnavailable, message)
    }

    /// Create a hashing error.
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Hashing, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a timeout error.
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Returns `true` if this error is of the given kind.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Io, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::with_source(
            ErrorKind::Validation,
            format!("Invalid configuration: {err}"),
            err,
        )
    }
}
