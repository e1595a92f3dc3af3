//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the one
//! high-level use case: "resolve a package manifest and emit it".

pub mod manifest_service;

pub use manifest_service::{MANIFEST_FILE, ManifestService};
