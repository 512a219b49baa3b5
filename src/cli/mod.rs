pub mod completions;

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::config::{self, Prompt};
use crate::error::{DarkError, Result};
use crate::interrupt::Interrupt;
use crate::output::{Printer, Stream};
use crate::process::{process_directory, RunSummary};

/// Width of the start-up banner.
const BANNER_WIDTH: usize = 60;

/// darkicon - Convert PNG icons to dark mode by changing their color
#[derive(Parser, Debug)]
#[command(name = "darkicon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directory to process (prompted for when omitted)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// RGBA color value, e.g. "240,240,240,255" (prompted for when omitted)
    #[arg(short, long)]
    pub color: Option<String>,

    /// Print a JSON run summary to stdout; progress moves to stderr
    #[arg(long)]
    pub json: bool,

    /// Only show warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Build the status printer these flags ask for.
    pub fn printer(&self) -> Printer {
        let stream = if self.json {
            Stream::Stderr
        } else {
            Stream::Stdout
        };
        Printer::with_stream(stream).quiet(self.quiet)
    }
}

/// How a run ended without a fault.
#[derive(Debug)]
pub enum Outcome {
    /// The directory was processed.
    Completed(RunSummary),
    /// The directory did not exist; nothing was processed.
    InvalidDirectory(PathBuf),
    /// A completion script was printed.
    Completions,
}

/// Resolve settings, check the directory and process it.
///
/// An invalid directory is reported and ends the run normally. An
/// interrupt during processing surfaces as [`DarkError::Cancelled`].
pub fn run(
    cli: Cli,
    prompt: &mut dyn Prompt,
    printer: &Printer,
    interrupt: &Interrupt,
) -> Result<Outcome> {
    if let Some(shell) = cli.completions {
        completions::run(shell)?;
        return Ok(Outcome::Completions);
    }

    printer.rule(BANNER_WIDTH);
    printer.heading("ICON DARK MODE CONVERTER", BANNER_WIDTH);
    printer.heading(
        "This tool converts PNG icons to dark mode by changing their color",
        BANNER_WIDTH,
    );
    printer.rule(BANNER_WIDTH);

    let settings = config::resolve(
        cli.color.as_deref(),
        cli.directory.as_deref(),
        prompt,
        printer,
    )?;

    if let Err(e) = config::check_directory(&settings.directory) {
        printer.error("Error", &e.to_string());
        return Ok(Outcome::InvalidDirectory(settings.directory));
    }

    let summary = process_directory(&settings.directory, settings.colour, printer, interrupt)?;

    if cli.json {
        let json = serde_json::to_string_pretty(&summary).map_err(|e| DarkError::Json {
            message: e.to_string(),
        })?;
        println!("{}", json);
    }

    Ok(Outcome::Completed(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_flags() {
        let cli = Cli::try_parse_from(["darkicon", "-d", "icons", "-c", "1,2,3,4"]).unwrap();

        assert_eq!(cli.directory, Some(PathBuf::from("icons")));
        assert_eq!(cli.color.as_deref(), Some("1,2,3,4"));
        assert!(!cli.json);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_parse_long_flags() {
        let cli = Cli::try_parse_from([
            "darkicon",
            "--directory",
            "icons",
            "--color",
            "10, 20, 30, 40",
            "--json",
            "--quiet",
        ])
        .unwrap();

        assert_eq!(cli.directory, Some(PathBuf::from("icons")));
        assert_eq!(cli.color.as_deref(), Some("10, 20, 30, 40"));
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_parse_no_flags() {
        let cli = Cli::try_parse_from(["darkicon"]).unwrap();

        assert!(cli.directory.is_none());
        assert!(cli.color.is_none());
        assert!(cli.completions.is_none());
    }

    #[test]
    fn test_parse_completions() {
        let cli = Cli::try_parse_from(["darkicon", "--completions", "bash"]).unwrap();
        assert_eq!(cli.completions, Some(Shell::Bash));
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }
}
