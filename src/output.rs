//! Terminal output formatting for darkicon.
//!
//! Provides Cargo-style status output with right-aligned coloured verbs.
//! Progress goes to stdout by default; when stdout carries machine-readable
//! output the printer is switched to stderr.

use std::io::{self, IsTerminal, Write};
use std::sync::{Arc, Mutex};

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Stream a [`Printer`] writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn is_terminal(self) -> bool {
        match self {
            Stream::Stdout => io::stdout().is_terminal(),
            Stream::Stderr => io::stderr().is_terminal(),
        }
    }
}

/// Where a [`Printer`] sends its lines.
#[derive(Debug, Clone)]
enum Target {
    Stream(Stream),
    Buffer(Arc<Mutex<Vec<u8>>>),
}

/// Terminal-aware status printer.
///
/// Colour is enabled when the target stream is a terminal. A quiet printer
/// drops status and info lines but still shows warnings and errors.
#[derive(Debug, Clone)]
pub struct Printer {
    target: Target,
    color: bool,
    quiet: bool,
}

impl Printer {
    pub fn new() -> Self {
        Self::with_stream(Stream::Stdout)
    }

    pub fn with_stream(stream: Stream) -> Self {
        Self {
            target: Target::Stream(stream),
            color: stream.is_terminal(),
            quiet: false,
        }
    }

    /// A printer that keeps its lines in memory, without colour.
    ///
    /// Clones share the same buffer; read it back with [`Printer::captured`].
    pub fn buffered() -> Self {
        Self {
            target: Target::Buffer(Arc::new(Mutex::new(Vec::new()))),
            color: false,
            quiet: false,
        }
    }

    /// Everything written so far by a buffered printer.
    ///
    /// Always empty for stream printers.
    pub fn captured(&self) -> String {
        match &self.target {
            Target::Stream(_) => String::new(),
            Target::Buffer(buf) => match buf.lock() {
                Ok(buf) => String::from_utf8_lossy(&buf).into_owned(),
                Err(poisoned) => String::from_utf8_lossy(&poisoned.into_inner()).into_owned(),
            },
        }
    }

    /// Suppress progress lines.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Print a status line with a green bold verb.
    /// e.g. "  Processing ui/save_icon.png"
    pub fn status(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(GREEN, verb, message);
        }
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        if !self.quiet {
            self.print_line(CYAN, verb, message);
        }
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Print an error line with a red bold verb.
    pub fn error(&self, verb: &str, message: &str) {
        self.print_line(RED, verb, message);
    }

    /// Print a bold heading, centred in `width` columns.
    pub fn heading(&self, text: &str, width: usize) {
        if self.quiet {
            return;
        }
        let line = format!("{text:^width$}");
        let line = line.trim_end();
        if self.color {
            self.write(&format!("{BOLD}{line}{RESET}"));
        } else {
            self.write(line);
        }
    }

    /// Print an empty line.
    pub fn blank(&self) {
        self.write("");
    }

    /// Print a plain rule of `=` characters.
    pub fn rule(&self, width: usize) {
        if !self.quiet {
            self.write(&"=".repeat(width));
        }
    }

    /// Format a string as cyan (for paths, info).
    pub fn cyan(&self, text: &str) -> String {
        if self.color {
            format!("{CYAN}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        if self.color {
            self.write(&format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"));
        } else {
            self.write(&format!("{verb:>VERB_WIDTH$} {message}"));
        }
    }

    fn write(&self, line: &str) {
        let _ = match &self.target {
            Target::Stream(Stream::Stdout) => writeln!(io::stdout().lock(), "{line}"),
            Target::Stream(Stream::Stderr) => writeln!(io::stderr().lock(), "{line}"),
            Target::Buffer(buf) => match buf.lock() {
                Ok(mut buf) => writeln!(buf, "{line}"),
                Err(poisoned) => writeln!(poisoned.into_inner(), "{line}"),
            },
        };
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Pluralize a count: `plural(1, "icon", "icons")` → "1 icon".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}
