//! pakkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the pakkit
//! manifest generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           pakkit-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ManifestService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │         (Driven: ManifestSink)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     pakkit-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (DependencyRegistry, PublishConfig,    │
//! │   PeerDependencyOptions)                │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use pakkit_core::{
//!     application::{ManifestService, ManifestSink, PackageManifest},
//!     domain::PackageOptions,
//!     error::PakkitResult,
//! };
//!
//! // A sink adapter; production code uses pakkit_adapters::LocalFilesystem.
//! struct NullSink;
//! impl ManifestSink for NullSink {
//!     fn create_dir_all(&self, _: &Path) -> PakkitResult<()> { Ok(()) }
//!     fn write_manifest(&self, _: &Path, _: &PackageManifest) -> PakkitResult<()> { Ok(()) }
//!     fn exists(&self, _: &Path) -> bool { false }
//! }
//!
//! // 1. Describe the package
//! let options = PackageOptions {
//!     deps: vec!["lodash@^4.17.0".into()],
//!     ..PackageOptions::named("my-package")
//! };
//!
//! // 2. Use the application service (with an injected sink adapter)
//! let mut service = ManifestService::new(options, Box::new(NullSink)).unwrap();
//! service.add_dev_deps(&["jest@^29"]).unwrap();
//! service.synth("./my-package").unwrap();
//! ```

pub mod application;
pub mod domain;

// Re-export error types
pub mod error;

pub use error::{PakkitError, PakkitResult};

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{MANIFEST_FILE, ManifestService, PackageManifest, ports::ManifestSink};
    pub use crate::domain::{
        DependencyRegistry, DependencyType, NpmAccess, PackageOptions, PeerDependencyOptions,
        PublishConfig, PublishConfigResolver, ResolvedDependencies,
    };
    pub use crate::error::{PakkitError, PakkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
