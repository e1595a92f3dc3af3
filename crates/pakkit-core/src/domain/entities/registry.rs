//! The authoritative mapping from package name to (version-range, type).
//!
//! The registry enforces type-exclusivity within a bucket (later write wins
//! for the same `(name, type)` key) while letting peer and runtime planes
//! coexist for the same name. Resolution projects the buckets into the four
//! manifest sections, running peer pinning against the final registry state.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{
    entities::dependency::{Dependency, parse_spec},
    error::DomainError,
    pinning::{self, PeerDependencyOptions},
    value_objects::DependencyType,
};

/// Owns every declared dependency for one package manifest.
///
/// Mutations arrive through [`add_dependency`](Self::add_dependency) (at
/// construction from options, and afterwards from build scripts appending
/// entries). [`resolve`](Self::resolve) is pure: it never mutates the
/// registry, so resolving twice yields identical output.
#[derive(Debug, Clone, Default)]
pub struct DependencyRegistry {
    /// Insertion-ordered entries, unique per `(name, type)`.
    entries: Vec<Dependency>,
    /// Bundled package names, insertion-ordered and deduplicated;
    /// rendered sorted.
    bundle: Vec<String>,
}

/// The four manifest sections produced by [`DependencyRegistry::resolve`].
///
/// Maps are `BTreeMap` so keys render in lexicographic order, which makes
/// the emitted manifest byte-deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedDependencies {
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub peer_dependencies: BTreeMap<String, String>,
    pub bundled_dependencies: Vec<String>,
}

impl DependencyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dependency from a `name[@range]` spec.
    ///
    /// A missing range defaults to `"*"`. Re-adding the same `(name, type)`
    /// overwrites the previous range. A `Bundled` dependency is materialized
    /// as a `Runtime` entry with the same range and additionally tracked in
    /// the bundle list (a bundled dependency is always installable as a
    /// runtime dependency).
    pub fn add_dependency(
        &mut self,
        spec: &str,
        dep_type: DependencyType,
    ) -> Result<(), DomainError> {
        let (name, range) = parse_spec(spec)?;
        debug!(%name, %range, r#type = %dep_type, "dependency recorded");

        if dep_type == DependencyType::Bundled {
            self.record(name.clone(), range, DependencyType::Runtime);
            if !self.bundle.contains(&name) {
                self.bundle.push(name);
            }
        } else {
            self.record(name, range, dep_type);
        }
        Ok(())
    }

    /// All recorded entries, in insertion order.
    pub fn entries(&self) -> &[Dependency] {
        &self.entries
    }

    /// Look up the version range recorded for `(name, type)`.
    pub fn version_of(&self, name: &str, dep_type: DependencyType) -> Option<&str> {
        self.entries
            .iter()
            .find(|d| d.name == name && d.dep_type == dep_type)
            .map(|d| d.version_range.as_str())
    }

    /// Project the registry into the four manifest sections.
    ///
    /// Peer pinning runs here, against the final registry state: a peer
    /// dependency is mirrored into `dev_dependencies` only when its name is
    /// absent from the union of runtime and dev entries, regardless of the
    /// order the entries were added in.
    pub fn resolve(&self, peer_options: &PeerDependencyOptions) -> ResolvedDependencies {
        let mut resolved = ResolvedDependencies::default();

        for dep in &self.entries {
            let target = match dep.dep_type {
                DependencyType::Runtime => &mut resolved.dependencies,
                DependencyType::Peer => &mut resolved.peer_dependencies,
                t if t.is_dev_bucket() => &mut resolved.dev_dependencies,
                // Bundled is rewritten to Runtime at add time.
                _ => continue,
            };
            target.insert(dep.name.clone(), dep.version_range.clone());
        }

        for (name, pinned) in pinning::pin_peer_dependencies(self, peer_options) {
            resolved.dev_dependencies.insert(name, pinned);
        }

        resolved.bundled_dependencies = self.bundle.clone();
        resolved.bundled_dependencies.sort();

        resolved
    }

    /// Insert or overwrite the `(name, type)` entry.
    fn record(&mut self, name: String, range: String, dep_type: DependencyType) {
        match self
            .entries
            .iter_mut()
            .find(|d| d.name == name && d.dep_type == dep_type)
        {
            Some(existing) => existing.version_range = range,
            None => self.entries.push(Dependency::new(name, range, dep_type)),
        }
    }
}
