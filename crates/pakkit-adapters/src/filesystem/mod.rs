//! Filesystem implementations of the `ManifestSink` port.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;

use pakkit_core::{application::PackageManifest, error::PakkitResult};

/// Render a manifest to its on-disk JSON form.
///
/// Two-space indentation and a trailing newline, matching what npm itself
/// writes, so generated files diff cleanly against hand-edited ones.
pub(crate) fn render_manifest(manifest: &PackageManifest) -> PakkitResult<String> {
    use pakkit_core::error::Context as _;

    let mut rendered =
        serde_json::to_string_pretty(manifest).context("manifest serialization")?;
    rendered.push('\n');
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pakkit_core::{
        application::ManifestService,
        domain::PackageOptions,
    };

    #[test]
    fn rendered_manifest_ends_with_newline() {
        let service = ManifestService::new(
            PackageOptions::named("render-check"),
            Box::new(MemoryFilesystem::new()),
        )
        .unwrap();
        let rendered = render_manifest(&service.manifest()).unwrap();
        assert!(rendered.ends_with('\n'));
        assert!(rendered.starts_with('{'));
    }
}
