//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pakkit",
    bin_name = "pakkit",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f4e6} Deterministic package.json generation",
    long_about = "Pakkit resolves typed dependency declarations and npm \
                  publish settings into a deterministic package.json.",
    after_help = "EXAMPLES:\n\
        \x20 pakkit generate                      # from ./pakkit.toml into .\n\
        \x20 pakkit generate -f app.toml -o dist  # explicit file and output dir\n\
        \x20 pakkit check --json\n\
        \x20 pakkit completions bash > /usr/share/bash-completion/completions/pakkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve the project definition and write package.json.
    #[command(
        visible_alias = "gen",
        about = "Generate package.json from a project definition",
        after_help = "EXAMPLES:\n\
            \x20 pakkit generate\n\
            \x20 pakkit generate --file app.toml --out ./my-package\n\
            \x20 pakkit generate --dry-run"
    )]
    Generate(GenerateArgs),

    /// Validate the project definition without writing anything.
    #[command(
        about = "Validate a project definition",
        after_help = "EXAMPLES:\n\
            \x20 pakkit check\n\
            \x20 pakkit check --file app.toml --json"
    )]
    Check(CheckArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pakkit completions bash > ~/.local/share/bash-completion/completions/pakkit\n\
            \x20 pakkit completions zsh  > ~/.zfunc/_pakkit\n\
            \x20 pakkit completions fish > ~/.config/fish/completions/pakkit.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `pakkit generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project definition file.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        default_value = "pakkit.toml",
        help = "Project definition file"
    )]
    pub file: PathBuf,

    /// Output directory for package.json.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory"
    )]
    pub out: PathBuf,

    /// Overwrite an existing package.json.
    #[arg(long = "force", help = "Overwrite existing package.json")]
    pub force: bool,

    /// Print the manifest to stdout without writing any files.
    #[arg(long = "dry-run", help = "Show the manifest without writing it")]
    pub dry_run: bool,
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `pakkit check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Project definition file.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        default_value = "pakkit.toml",
        help = "Project definition file"
    )]
    pub file: PathBuf,

    /// Print the resolved manifest as JSON.
    #[arg(long = "json", help = "Print the resolved manifest as JSON")]
    pub json: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pakkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum, value_name = "SHELL", help = "Target shell")]
    pub shell: Shell,
}

/// Shells with supported completion scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
