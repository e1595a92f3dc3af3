//! The serializable package-manifest projection.
//!
//! This is the payload handed to the emission port. It contains no business
//! logic, only data: dependency maps are `BTreeMap` so keys serialize in
//! lexicographic order and repeated resolution is byte-identical.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{NpmAccess, PublishConfig, ResolvedDependencies};

/// One fully resolved `package.json` document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub version: String,
    pub license: String,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dev_dependencies: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub peer_dependencies: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bundled_dependencies: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_config: Option<PublishConfigBlock>,
}

/// The optional `publishConfig` block.
///
/// Present only when something diverges from the implicit defaults; each
/// field is itself omitted when it matches its default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishConfigBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<NpmAccess>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
}

impl PackageManifest {
    /// Compose the manifest from resolved parts.
    pub fn compose(
        name: impl Into<String>,
        version: impl Into<String>,
        license: impl Into<String>,
        deps: ResolvedDependencies,
        publish: &PublishConfig,
    ) -> Self {
        let publish_config = publish.diverges_from_defaults().then(|| PublishConfigBlock {
            access: publish.nondefault_access(),
            registry: publish.nondefault_registry().map(str::to_string),
        });

        Self {
            name: name.into(),
            version: version.into(),
            license: license.into(),
            dependencies: deps.dependencies,
            dev_dependencies: deps.dev_dependencies,
            peer_dependencies: deps.peer_dependencies,
            bundled_dependencies: deps.bundled_dependencies,
            publish_config,
        }
    }
}
