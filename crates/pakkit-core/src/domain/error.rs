// ============================================================================
// domain/error.rs - DOMAIN ERROR TAXONOMY
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may re-report after construction fails)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Both variants are fatal to manifest construction: no partial manifest is
/// ever produced past one of these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A dependency identifier that cannot be parsed into `name[@range]`.
    #[error("invalid dependency spec '{spec}': {reason}")]
    InvalidDependencySpec { spec: String, reason: String },

    /// An illegal publish-configuration combination (access/scope mismatch,
    /// conflicting auth modes, CodeArtifact options on a non-CodeArtifact
    /// registry).
    #[error("invalid publish configuration: {reason}")]
    InvalidPublishConfig { reason: String },
}

impl DomainError {
    pub(crate) fn invalid_spec(spec: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDependencySpec {
            spec: spec.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_publish(reason: impl Into<String>) -> Self {
        Self::InvalidPublishConfig {
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidDependencySpec { spec, .. } => vec![
                format!("Dependency specs take the form name[@range], got '{spec}'"),
                "Examples: lodash, lodash@^4.17.0, @scope/pkg@~1.2.3".into(),
            ],
            Self::InvalidPublishConfig { reason } => vec![
                format!("Publish settings are inconsistent: {reason}"),
                "Restricted access requires a scoped package name".into(),
                "CodeArtifact registries authenticate with AWS secrets, not npm tokens".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidDependencySpec { .. } => ErrorCategory::Validation,
            Self::InvalidPublishConfig { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
    Internal,
}
