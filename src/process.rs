//! Directory processing.
//!
//! Runs discovery over a directory and recolors each icon in turn,
//! reporting progress through a [`Printer`].

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::colour::Colour;
use crate::discovery::icons;
use crate::error::Result;
use crate::interrupt::Interrupt;
use crate::output::{display_path, plural, Printer};
use crate::recolor::recolor_icon;

/// An icon that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of processing one directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub directory: PathBuf,
    pub colour: Colour,
    /// Icons yielded by discovery.
    pub found: usize,
    /// Icons with a dark variant written.
    pub converted: usize,
    pub outputs: Vec<PathBuf>,
    pub failures: Vec<Failure>,
}

impl RunSummary {
    pub fn new(directory: &Path, colour: Colour) -> Self {
        Self {
            directory: directory.to_path_buf(),
            colour,
            found: 0,
            converted: 0,
            outputs: Vec::new(),
            failures: Vec::new(),
        }
    }
}

/// Convert every icon below `dir` to a dark variant.
///
/// Per-icon failures are reported and recorded in the summary; they never
/// stop the run. The only error is [`DarkError::Cancelled`], returned
/// before the next icon once `interrupt` has been requested.
///
/// [`DarkError::Cancelled`]: crate::error::DarkError::Cancelled
pub fn process_directory(
    dir: &Path,
    colour: Colour,
    printer: &Printer,
    interrupt: &Interrupt,
) -> Result<RunSummary> {
    let _batch = interrupt.batch();
    let mut summary = RunSummary::new(dir, colour);

    printer.info("Searching", &printer.cyan(&display_path(dir)));
    printer.info("Using", &colour.describe());

    let mut found = icons(dir);
    for icon in found.by_ref() {
        interrupt.check()?;
        summary.found += 1;
        printer.status("Processing", &display_path(&icon));

        match recolor_icon(&icon, colour) {
            Ok(output) => {
                summary.converted += 1;
                printer.status("Created", &display_path(&output));
                summary.outputs.push(output);
            }
            Err(e) => {
                printer.error("Error", &format!("processing {}: {}", display_path(&icon), e));
                summary.failures.push(Failure {
                    path: icon,
                    error: e.to_string(),
                });
            }
        }
    }

    if found.skipped() > 0 {
        printer.warning(
            "Skipped",
            &format!("{} that could not be read", plural(found.skipped(), "entry", "entries")),
        );
    }

    printer.status(
        "Finished",
        &format!(
            "Found {}, successfully converted {} to dark mode",
            plural(summary.found, "icon", "icons"),
            summary.converted
        ),
    );

    Ok(summary)
}
