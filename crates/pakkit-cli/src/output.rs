//! Command output rendering.
//!
//! `Auto` resolves once at construction: `Human` on a TTY, `Plain` when
//! stdout is piped or redirected. Plain output carries no indicator symbols
//! and no ANSI codes, so scripts can consume it line by line.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Renders command output according to the resolved format.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        // The flag wins over the config file; `auto` defers to the terminal.
        let format = match args.output_format {
            OutputFormat::Auto => match config.output.format.as_str() {
                "human" => OutputFormat::Human,
                "plain" => OutputFormat::Plain,
                _ if io::stdout().is_terminal() => OutputFormat::Human,
                _ => OutputFormat::Plain,
            },
            explicit => explicit,
        };

        Self {
            format,
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>` (bare message in plain format).
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.emit(msg, '\u{2713}', |s| {
            format!("{} {}", "\u{2713}".green().bold(), s.green())
        })
    }

    /// Informational indicator: `ℹ <msg>` (bare message in plain format).
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.emit(msg, '\u{2139}', |s| {
            format!("{} {}", "\u{2139}".blue().bold(), s.blue())
        })
    }

    /// Bold cyan header line; undecorated in plain format.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = match self.format {
            OutputFormat::Human if !self.no_color => text.cyan().bold().to_string(),
            _ => text.to_owned(),
        };
        self.term.write_line(&line)
    }

    fn emit(&self, msg: &str, symbol: char, colored: impl Fn(&str) -> String) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.render(msg, symbol, colored))
    }

    /// Produce the final line for one message.
    fn render(&self, msg: &str, symbol: char, colored: impl Fn(&str) -> String) -> String {
        match self.format {
            OutputFormat::Plain => msg.to_owned(),
            _ if self.no_color => format!("{symbol} {msg}"),
            _ => colored(msg),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    use crate::config::AppConfig;

    fn make_manager(format: OutputFormat, quiet: bool, no_color: bool) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format, // non-Auto avoids TTY detection in tests
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn plain_format_drops_indicator_symbols() {
        let out = make_manager(OutputFormat::Plain, false, false);
        let line = out.render("done", '\u{2713}', |s| format!("styled {s}"));
        assert_eq!(line, "done");
    }

    #[test]
    fn human_format_without_color_keeps_the_symbol() {
        let out = make_manager(OutputFormat::Human, false, true);
        let line = out.render("done", '\u{2713}', |s| format!("styled {s}"));
        assert_eq!(line, "\u{2713} done");
    }

    #[test]
    fn human_format_with_color_uses_the_styled_line() {
        let out = make_manager(OutputFormat::Human, false, false);
        let line = out.render("done", '\u{2713}', |s| format!("styled {s}"));
        assert_eq!(line, "styled done");
    }

    #[test]
    fn quiet_suppresses_output() {
        let out = make_manager(OutputFormat::Plain, true, true);
        assert!(out.print("hello").is_ok());
        assert!(out.success("hello").is_ok());
    }

    #[test]
    fn explicit_format_is_kept_as_given() {
        let out = make_manager(OutputFormat::Plain, false, false);
        assert_eq!(out.format, OutputFormat::Plain);
    }

    #[test]
    fn auto_defers_to_the_config_file_format() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Auto,
        };
        let mut config = AppConfig::default();
        config.output.format = "plain".into();
        let out = OutputManager::new(&args, &config);
        assert_eq!(out.format, OutputFormat::Plain);
    }
}
