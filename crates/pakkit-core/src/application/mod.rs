//! Application layer for pakkit.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ManifestService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Manifest**: the serializable projection handed to the sink
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod manifest;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{MANIFEST_FILE, ManifestService};

// Re-export port traits (for adapter implementation)
pub use ports::ManifestSink;

pub use error::ApplicationError;
pub use manifest::{PackageManifest, PublishConfigBlock};
