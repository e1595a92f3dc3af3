//! Implementation of the `pakkit generate` command.
//!
//! Responsibility: load the project definition, hand it to the core manifest
//! service, and display results.  No resolution logic lives here.

use tracing::{debug, info, instrument};

use pakkit_adapters::LocalFilesystem;
use pakkit_core::application::{MANIFEST_FILE, ManifestService};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    project,
};

/// Execute the `pakkit generate` command.
///
/// Dispatch sequence:
/// 1. Load and validate the project definition
/// 2. Construct the manifest service (publish config resolved eagerly)
/// 3. Early-exit with the rendered manifest if `--dry-run`
/// 4. Refuse to overwrite an existing package.json unless `--force`
/// 5. Synth and print the written path
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Load the project definition
    let options = project::load(&args.file, &config)?;
    debug!(package = %options.name, "project definition loaded");

    // 2. Build the service; construction fails on invalid specs or
    //    publish options, before anything touches the filesystem.
    let service = ManifestService::new(options, Box::new(LocalFilesystem))?;

    // 3. Dry run: render to stdout, write nothing.
    if args.dry_run {
        let manifest = service.manifest();
        let rendered = serde_json::to_string_pretty(&manifest).map_err(|e| {
            CliError::Core(pakkit_core::error::PakkitError::Internal {
                message: format!("failed to render manifest: {e}"),
            })
        })?;
        output.info(&format!(
            "Dry run: would write {}",
            args.out.join(MANIFEST_FILE).display()
        ))?;
        println!("{rendered}");
        return Ok(());
    }

    // 4. Overwrite guard
    let target = args.out.join(MANIFEST_FILE);
    if service.manifest_exists(&args.out) && !args.force {
        return Err(CliError::ManifestExists { path: target });
    }

    // 5. Emit
    output.header(&format!("Generating {}...", target.display()))?;
    let written = service.synth(&args.out)?;
    info!(path = %written.display(), "manifest generated");

    output.success(&format!("Wrote {}", written.display()))?;

    if !global.quiet {
        let publish = service.publish_config();
        output.print(&format!("  Registry: {}", publish.npm_registry_url()))?;
        output.print(&format!("  Access:   {}", publish.npm_access()))?;
    }

    Ok(())
}
