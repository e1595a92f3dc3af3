//! Domain value objects: DependencyType and NpmAccess.
//!
//! # Design
//!
//! These are pure value types — `Copy`, equality-by-value, no identity.
//! They hold NO bucketing logic. Which manifest section a type renders into
//! lives in `entities::registry`. This file's only job is to define the
//! types, their string representations, and their `FromStr` parsers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── DependencyType ───────────────────────────────────────────────────────────

/// Classification bucket for a declared dependency.
///
/// The type controls which section of the output manifest the entry is
/// written to: `Runtime` and `Bundled` render into `dependencies`, `Peer`
/// into `peerDependencies`, and everything else into `devDependencies`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyType {
    /// Needed at runtime by consumers of the package.
    Runtime,
    /// Declared against the consumer's dependency tree, not installed here.
    Peer,
    /// Local development tooling.
    Dev,
    /// Test-only tooling.
    Test,
    /// Build-time tooling (compilers, bundlers).
    Build,
    /// Development-environment tooling (linters, editors).
    Devenv,
    /// Shipped inside the published tarball; always also a runtime dep.
    Bundled,
}

impl DependencyType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Runtime => "runtime",
            Self::Peer => "peer",
            Self::Dev => "dev",
            Self::Test => "test",
            Self::Build => "build",
            Self::Devenv => "devenv",
            Self::Bundled => "bundled",
        }
    }

    /// Whether entries of this type render into `devDependencies`.
    pub const fn is_dev_bucket(self) -> bool {
        matches!(self, Self::Dev | Self::Test | Self::Build | Self::Devenv)
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "runtime" | "prod" => Ok(Self::Runtime),
            "peer" => Ok(Self::Peer),
            "dev" => Ok(Self::Dev),
            "test" => Ok(Self::Test),
            "build" => Ok(Self::Build),
            "devenv" => Ok(Self::Devenv),
            "bundled" | "bundle" => Ok(Self::Bundled),
            other => Err(DomainError::invalid_spec(
                other,
                "unknown dependency type",
            )),
        }
    }
}

// ── NpmAccess ────────────────────────────────────────────────────────────────

/// npm publish access level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NpmAccess {
    /// Installable by anyone.
    Public,
    /// Only visible to the owning scope; requires a scoped package name.
    Restricted,
}

impl NpmAccess {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Restricted => "restricted",
        }
    }

    /// Default access for a package name: restricted when scoped, public
    /// otherwise.
    pub fn default_for(scoped: bool) -> Self {
        if scoped { Self::Restricted } else { Self::Public }
    }
}

impl fmt::Display for NpmAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NpmAccess {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "public" => Ok(Self::Public),
            "restricted" | "private" => Ok(Self::Restricted),
            other => Err(DomainError::invalid_publish(format!(
                "unknown npm access level: {other}"
            ))),
        }
    }
}
