//! Peer-dependency pinning.
//!
//! Peer dependencies describe what the *consumer* must install, so local
//! tooling would otherwise have nothing to run against. Unless disabled,
//! every peer dependency is mirrored into `devDependencies` at an exact
//! pinned version so local installs are deterministic.

use serde::{Deserialize, Serialize};

use crate::domain::{entities::registry::DependencyRegistry, value_objects::DependencyType};

/// Governs whether peer dependencies are mirrored into dev dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PeerDependencyOptions {
    /// Mirror each peer dependency as a pinned dev dependency. Default true.
    pub pinned_dev_dependency: bool,
}

impl Default for PeerDependencyOptions {
    fn default() -> Self {
        Self {
            pinned_dev_dependency: true,
        }
    }
}

/// Compute the synthetic dev entries for the registry's peer dependencies.
///
/// Precedence is evaluated against the registry's *final* state: a peer name
/// already present as a runtime or dev dependency is skipped, no matter which
/// entry was added first. An independently declared runtime range must never
/// be shadowed by a synthetic pin.
pub(crate) fn pin_peer_dependencies(
    registry: &DependencyRegistry,
    options: &PeerDependencyOptions,
) -> Vec<(String, String)> {
    if !options.pinned_dev_dependency {
        return Vec::new();
    }

    registry
        .entries()
        .iter()
        .filter(|d| d.dep_type == DependencyType::Peer)
        .filter(|d| {
            registry.version_of(&d.name, DependencyType::Runtime).is_none()
                && registry.version_of(&d.name, DependencyType::Dev).is_none()
        })
        .map(|d| (d.name.clone(), pin_range(&d.version_range)))
        .collect()
}

/// Strip range operators down to the literal version token.
///
/// `^1.2.3` → `1.2.3`, `>=2.0.0` → `2.0.0`. Wildcards carry no version to
/// pin and pass through unchanged.
fn pin_range(range: &str) -> String {
    if range == "*" {
        return range.to_string();
    }
    range
        .trim_start_matches(['^', '~', '=', '>', '<', ' '])
        .to_string()
}
