//! Application layer errors.
//!
//! These errors represent failures in orchestration and emission, not
//! business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Writing the manifest through the sink failed.
    #[error("Manifest emission failed at {path}: {reason}")]
    EmissionFailed { path: PathBuf, reason: String },

    /// Sink access failed (lock poisoned, etc.).
    #[error("Manifest sink error")]
    SinkLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmissionFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::SinkLockError => vec![
                "The manifest sink is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmissionFailed { .. } | Self::SinkLockError => ErrorCategory::Internal,
        }
    }
}
