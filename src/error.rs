use miette::Diagnostic;
use thiserror::Error;

/// Main error type for darkicon operations
#[derive(Error, Diagnostic, Debug)]
pub enum DarkError {
    #[error("IO error: {0}")]
    #[diagnostic(code(darkicon::io))]
    Io(#[from] std::io::Error),

    #[error("Invalid color format: '{input}'")]
    #[diagnostic(
        code(darkicon::color),
        help("Expected R,G,B,A with each value in 0-255 (e.g. 240,240,240,255)")
    )]
    InvalidColor { input: String },

    #[error("The path '{}' is not a valid directory", path.display())]
    #[diagnostic(code(darkicon::directory))]
    InvalidDirectory { path: std::path::PathBuf },

    #[error("Failed to load {}: {message}", path.display())]
    #[diagnostic(code(darkicon::load))]
    Load {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to save {}: {message}", path.display())]
    #[diagnostic(code(darkicon::save))]
    Save {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("JSON error: {message}")]
    #[diagnostic(code(darkicon::json))]
    Json { message: String },

    #[error("Failed to install interrupt handler: {message}")]
    #[diagnostic(code(darkicon::signal))]
    Signal { message: String },

    #[error("Operation cancelled by user")]
    #[diagnostic(code(darkicon::cancelled))]
    Cancelled,
}

impl DarkError {
    /// Whether this error is a user-initiated cancellation rather than a fault.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DarkError::Cancelled)
    }
}

pub type Result<T> = std::result::Result<T, DarkError>;
