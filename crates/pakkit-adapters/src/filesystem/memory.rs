//! In-memory sink adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use tracing::debug;

use pakkit_core::{
    application::{ApplicationError, PackageManifest, ports::ManifestSink},
    error::PakkitResult,
};

use super::render_manifest;

/// In-memory manifest sink for testing.
///
/// Clones share storage, so a test can hand one clone to the service and
/// keep another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a written file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Parse a written manifest back as JSON (testing helper).
    pub fn read_json(&self, path: &Path) -> Option<serde_json::Value> {
        serde_json::from_str(&self.read_file(path)?).ok()
    }

    /// List all written files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

impl ManifestSink for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> PakkitResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SinkLockError)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_manifest(&self, path: &Path, manifest: &PackageManifest) -> PakkitResult<()> {
        let rendered = render_manifest(manifest)?;
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::SinkLockError)?;

        // Ensure parent exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::EmissionFailed {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        debug!(path = %path.display(), "manifest captured in memory");
        inner.files.insert(path.to_path_buf(), rendered);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pakkit_core::{application::ManifestService, domain::PackageOptions};

    #[test]
    fn clones_share_written_state() {
        let sink = MemoryFilesystem::new();
        let service = ManifestService::new(
            PackageOptions::named("shared-state"),
            Box::new(sink.clone()),
        )
        .unwrap();

        service.synth("out").unwrap();

        let manifest = sink.read_json(Path::new("out/package.json")).unwrap();
        assert_eq!(manifest["name"], "shared-state");
        assert!(sink.exists(Path::new("out")));
    }

    #[test]
    fn write_without_parent_directory_fails() {
        let sink = MemoryFilesystem::new();
        let manifest = ManifestService::new(
            PackageOptions::named("orphan"),
            Box::new(MemoryFilesystem::new()),
        )
        .unwrap()
        .manifest();

        let err = sink
            .write_manifest(Path::new("missing/package.json"), &manifest)
            .unwrap_err();
        assert!(matches!(
            err,
            pakkit_core::error::PakkitError::Application(_)
        ));
    }

    #[test]
    fn clear_drops_files_and_directories() {
        let sink = MemoryFilesystem::new();
        sink.create_dir_all(Path::new("a/b")).unwrap();
        assert!(sink.exists(Path::new("a/b")));

        sink.clear();
        assert!(!sink.exists(Path::new("a/b")));
        assert!(sink.list_files().is_empty());
    }
}
