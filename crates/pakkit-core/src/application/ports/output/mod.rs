//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `pakkit-adapters` crate provides implementations.

use crate::application::manifest::PackageManifest;
use crate::error::PakkitResult;
use std::path::Path;

/// Port for manifest emission.
///
/// Implemented by:
/// - `pakkit_adapters::filesystem::LocalFilesystem` (production)
/// - `pakkit_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// The sink owns serialization: the application hands over the structured
/// manifest once resolution completes, and the adapter decides the on-disk
/// JSON rendering. The core never performs I/O itself.
pub trait ManifestSink: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> PakkitResult<()>;

    /// Serialize and write a manifest to the named file.
    fn write_manifest(&self, path: &Path, manifest: &PackageManifest) -> PakkitResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
