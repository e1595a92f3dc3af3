//! The immutable options object supplied once at project-creation time.

use serde::{Deserialize, Serialize};

use crate::domain::{pinning::PeerDependencyOptions, value_objects::NpmAccess};

/// Everything needed to construct one package manifest.
///
/// Constructed once and never mutated; all derived state (dependency buckets,
/// publish configuration) is computed forward from it. Deserializes from the
/// `[package]` table of a pakkit.toml project definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PackageOptions {
    /// Package name. A `@`-delimited scope prefix marks the package scoped,
    /// which flips the default publish access to restricted.
    pub name: String,

    /// Manifest version field.
    pub version: String,

    /// Emit the license field; `false` renders `UNLICENSED`.
    pub licensed: bool,

    /// SPDX license identifier.
    pub license: String,

    /// Runtime dependency specs (`name[@range]`).
    pub deps: Vec<String>,

    /// Dev dependency specs.
    pub dev_deps: Vec<String>,

    /// Peer dependency specs.
    pub peer_deps: Vec<String>,

    /// Bundled dependency specs (always also runtime).
    pub bundled_deps: Vec<String>,

    pub peer_dependency_options: PeerDependencyOptions,

    /// Deprecated: registry host only, `https://` assumed.
    /// Prefer `npm_registry_url`.
    pub npm_registry: Option<String>,

    /// Full registry URL. Defaults to the public npm registry.
    pub npm_registry_url: Option<String>,

    /// Explicit publish access; defaults per package scoping.
    pub npm_access: Option<NpmAccess>,

    /// Name of the secret holding the npm publish token.
    /// Must not be set for CodeArtifact registries.
    pub npm_token_secret: Option<String>,

    pub code_artifact_options: Option<CodeArtifactOptions>,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: "0.1.0".into(),
            licensed: true,
            license: "Apache-2.0".into(),
            deps: Vec::new(),
            dev_deps: Vec::new(),
            peer_deps: Vec::new(),
            bundled_deps: Vec::new(),
            peer_dependency_options: PeerDependencyOptions::default(),
            npm_registry: None,
            npm_registry_url: None,
            npm_access: None,
            npm_token_secret: None,
            code_artifact_options: None,
        }
    }
}

impl PackageOptions {
    /// Minimal options carrying only a package name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether the package name carries a scope marker.
    ///
    /// Scope detection looks for a literal `@` in the name, never at a
    /// semver range — ranges only appear in dependency specs.
    pub fn is_scoped(&self) -> bool {
        self.name.contains('@')
    }

    /// License string for the manifest (`UNLICENSED` when unlicensed).
    pub fn license_field(&self) -> &str {
        if self.licensed { &self.license } else { "UNLICENSED" }
    }
}

/// AWS CodeArtifact authentication overrides.
///
/// Only meaningful when the registry URL points at a CodeArtifact host;
/// supplying any field for another registry is a configuration error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CodeArtifactOptions {
    pub access_key_id_secret: Option<String>,
    pub secret_access_key_secret: Option<String>,
    pub role_to_assume: Option<String>,
}

impl CodeArtifactOptions {
    pub fn is_any_set(&self) -> bool {
        self.access_key_id_secret.is_some()
            || self.secret_access_key_secret.is_some()
            || self.role_to_assume.is_some()
    }
}
