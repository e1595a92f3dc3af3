//! Manifest Service - main application orchestrator.
//!
//! The service coordinates the manifest workflow:
//! 1. Resolve the publish configuration from the options (fails fast)
//! 2. Ingest the declared dependency lists into the registry
//! 3. Accept further dependency additions (build scripts appending entries)
//! 4. On synth: pin peers, project the registry, emit `package.json` once
//!
//! It implements the driving port (incoming) and uses the driven
//! [`ManifestSink`] port (outgoing).

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{manifest::PackageManifest, ports::ManifestSink},
    domain::{
        DependencyRegistry, DependencyType, PackageOptions, PublishConfig, PublishConfigResolver,
    },
    error::PakkitResult,
};

/// Name of the emitted manifest file.
pub const MANIFEST_FILE: &str = "package.json";

/// Main manifest service.
///
/// Owns the dependency registry for one package and the resolved publish
/// configuration. Construction fails on any invalid option combination, so
/// a service that exists can always synth a consistent manifest.
pub struct ManifestService {
    options: PackageOptions,
    publish: PublishConfig,
    registry: DependencyRegistry,
    sink: Box<dyn ManifestSink>,
}

impl ManifestService {
    /// Create a new manifest service from immutable options.
    ///
    /// Resolves the publish configuration eagerly and ingests the declared
    /// dependency lists; either step failing aborts construction with no
    /// partial state.
    #[instrument(skip_all, fields(package = %options.name))]
    pub fn new(options: PackageOptions, sink: Box<dyn ManifestSink>) -> PakkitResult<Self> {
        let publish = PublishConfigResolver::resolve(&options)?;

        let mut registry = DependencyRegistry::new();
        let declared = [
            (&options.deps, DependencyType::Runtime),
            (&options.dev_deps, DependencyType::Dev),
            (&options.peer_deps, DependencyType::Peer),
            (&options.bundled_deps, DependencyType::Bundled),
        ];
        for (specs, dep_type) in declared {
            for spec in specs {
                registry.add_dependency(spec, dep_type)?;
            }
        }

        debug!(
            registry = %publish.npm_registry(),
            access = %publish.npm_access(),
            "publish configuration resolved"
        );

        Ok(Self {
            options,
            publish,
            registry,
            sink,
        })
    }

    // ── Mutators (pre-synth) ──────────────────────────────────────────────

    /// Record a single dependency of an explicit type.
    pub fn add_dependency(&mut self, spec: &str, dep_type: DependencyType) -> PakkitResult<()> {
        Ok(self.registry.add_dependency(spec, dep_type)?)
    }

    /// Append runtime dependencies.
    pub fn add_deps(&mut self, specs: &[&str]) -> PakkitResult<()> {
        self.add_all(specs, DependencyType::Runtime)
    }

    /// Append dev dependencies.
    pub fn add_dev_deps(&mut self, specs: &[&str]) -> PakkitResult<()> {
        self.add_all(specs, DependencyType::Dev)
    }

    /// Append peer dependencies.
    pub fn add_peer_deps(&mut self, specs: &[&str]) -> PakkitResult<()> {
        self.add_all(specs, DependencyType::Peer)
    }

    /// Append bundled dependencies (also materialized as runtime).
    pub fn add_bundled_deps(&mut self, specs: &[&str]) -> PakkitResult<()> {
        self.add_all(specs, DependencyType::Bundled)
    }

    fn add_all(&mut self, specs: &[&str], dep_type: DependencyType) -> PakkitResult<()> {
        for spec in specs {
            self.registry.add_dependency(spec, dep_type)?;
        }
        Ok(())
    }

    // ── Resolution ────────────────────────────────────────────────────────

    /// Project the current state into a manifest.
    ///
    /// Pure and deterministic: composing twice without intervening mutation
    /// yields identical manifests.
    pub fn manifest(&self) -> PackageManifest {
        let resolved = self.registry.resolve(&self.options.peer_dependency_options);
        PackageManifest::compose(
            self.options.name.clone(),
            self.options.version.clone(),
            self.options.license_field(),
            resolved,
            &self.publish,
        )
    }

    /// Resolve everything and emit `package.json` under `output_dir`.
    ///
    /// This is the single boundary crossing: one write of one named file
    /// with the structured payload. Returns the path written.
    #[instrument(skip_all, fields(package = %self.options.name, dir = %output_dir.as_ref().display()))]
    pub fn synth(&self, output_dir: impl AsRef<Path>) -> PakkitResult<PathBuf> {
        let output_dir = output_dir.as_ref();
        let manifest = self.manifest();

        self.sink.create_dir_all(output_dir)?;
        let path = output_dir.join(MANIFEST_FILE);
        self.sink.write_manifest(&path, &manifest)?;

        info!(path = %path.display(), "manifest emitted");
        Ok(path)
    }

    /// Whether a manifest already exists under `output_dir`.
    ///
    /// `synth` itself always overwrites; callers that want an overwrite
    /// guard check this first.
    pub fn manifest_exists(&self, output_dir: impl AsRef<Path>) -> bool {
        self.sink.exists(&output_dir.as_ref().join(MANIFEST_FILE))
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn options(&self) -> &PackageOptions {
        &self.options
    }

    pub fn publish_config(&self) -> &PublishConfig {
        &self.publish
    }
}
