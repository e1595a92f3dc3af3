// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for pakkit.
//!
//! This module contains pure business logic with NO I/O.
//! Emission concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable options**: [`PackageOptions`] is supplied once; derived
//!   state is computed forward, never mutated in place after resolution
//! - **Rich domain model**: Behavior lives in entities, not services

// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod options;
pub mod pinning;
pub mod publish;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    dependency::Dependency,
    registry::{DependencyRegistry, ResolvedDependencies},
};

pub use error::{DomainError, ErrorCategory};

pub use options::{CodeArtifactOptions, PackageOptions};
pub use pinning::PeerDependencyOptions;
pub use publish::{
    CodeArtifactConfig, DEFAULT_NPM_REGISTRY_URL, GITHUB_NPM_REGISTRY_HOST, PublishConfig,
    PublishConfigResolver,
};
pub use value_objects::{DependencyType, NpmAccess};
