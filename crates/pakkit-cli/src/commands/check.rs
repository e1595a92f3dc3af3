//! Implementation of the `pakkit check` command.
//!
//! Validates a project definition end to end without touching the
//! filesystem: dependency specs are parsed, the publish configuration is
//! resolved, and the manifest is composed against an in-memory sink.

use tracing::{debug, instrument};

use pakkit_adapters::MemoryFilesystem;
use pakkit_core::application::ManifestService;

use crate::{
    cli::CheckArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    project,
};

/// Execute the `pakkit check` command.
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let options = project::load(&args.file, &config)?;
    debug!(package = %options.name, "project definition loaded");

    // Construction exercises every validation path; an in-memory sink keeps
    // the check side-effect free.
    let service = ManifestService::new(options, Box::new(MemoryFilesystem::new()))?;
    let manifest = service.manifest();

    if args.json {
        let rendered = serde_json::to_string_pretty(&manifest).map_err(|e| {
            CliError::Core(pakkit_core::error::PakkitError::Internal {
                message: format!("failed to render manifest: {e}"),
            })
        })?;
        println!("{rendered}");
        return Ok(());
    }

    let publish = service.publish_config();
    output.success(&format!("{} is valid", args.file.display()))?;
    output.print(&format!("  Package:  {}", manifest.name))?;
    output.print(&format!("  Version:  {}", manifest.version))?;
    output.print(&format!("  Registry: {}", publish.npm_registry_url()))?;
    output.print(&format!("  Access:   {}", publish.npm_access()))?;
    output.print(&format!(
        "  Dependencies: {} runtime, {} dev, {} peer, {} bundled",
        manifest.dependencies.len(),
        manifest.dev_dependencies.len(),
        manifest.peer_dependencies.len(),
        manifest.bundled_dependencies.len(),
    ))?;

    Ok(())
}
