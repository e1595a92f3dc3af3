//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::{debug, instrument};

use pakkit_core::{
    application::{PackageManifest, ports::ManifestSink},
    error::PakkitResult,
};

use super::render_manifest;

/// Production sink writing manifests through `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestSink for LocalFilesystem {
    #[instrument(skip(self), fields(dir = %path.display()))]
    fn create_dir_all(&self, path: &Path) -> PakkitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    #[instrument(skip_all, fields(path = %path.display()))]
    fn write_manifest(&self, path: &Path, manifest: &PackageManifest) -> PakkitResult<()> {
        let rendered = render_manifest(manifest)?;
        debug!(bytes = rendered.len(), "writing manifest");
        std::fs::write(path, rendered).map_err(|e| map_io_error(path, e, "write manifest"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> pakkit_core::error::PakkitError {
    use pakkit_core::application::ApplicationError;

    ApplicationError::EmissionFailed {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pakkit_core::{application::ManifestService, domain::PackageOptions};

    #[test]
    fn synth_writes_package_json_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("my-package");

        let options = PackageOptions {
            deps: vec!["lodash@^4.17.0".into()],
            ..PackageOptions::named("my-package")
        };
        let service = ManifestService::new(options, Box::new(LocalFilesystem::new())).unwrap();
        let path = service.synth(&out).unwrap();

        assert_eq!(path, out.join("package.json"));
        let raw = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["name"], "my-package");
        assert_eq!(json["dependencies"]["lodash"], "^4.17.0");
        assert!(raw.ends_with('\n'));
    }

    #[test]
    fn write_into_unwritable_path_maps_to_emission_error() {
        let service = ManifestService::new(
            PackageOptions::named("my-package"),
            Box::new(LocalFilesystem::new()),
        )
        .unwrap();

        // A path under a regular file cannot be created as a directory.
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = service.synth(blocker.join("nested")).unwrap_err();
        assert!(matches!(
            err,
            pakkit_core::error::PakkitError::Application(_)
        ));
    }
}
