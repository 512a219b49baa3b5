//! Ctrl-C handling.
//!
//! Outside a batch an interrupt ends the process straight away with the
//! cancellation message and a success status. While icons are being
//! converted it is only recorded; the batch stops before the next icon so no
//! output file is left half written.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{DarkError, Result};
use crate::output::Printer;

/// Message shown when the user cancels a run.
pub const CANCELLED_MESSAGE: &str = "Operation cancelled by user.";

/// Shared interrupt state between the signal handler and the batch loop.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    requested: Arc<AtomicBool>,
    in_batch: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an interrupt.
    ///
    /// Returns `true` when a batch is running and will stop by itself,
    /// `false` when the caller has to end the process.
    pub fn request(&self) -> bool {
        self.requested.store(true, Ordering::SeqCst);
        self.in_batch.load(Ordering::SeqCst)
    }

    /// Whether an interrupt has been recorded.
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Fail with [`DarkError::Cancelled`] if an interrupt has been recorded.
    pub fn check(&self) -> Result<()> {
        if self.is_requested() {
            Err(DarkError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Mark a batch as running until the guard is dropped.
    pub fn batch(&self) -> BatchGuard<'_> {
        self.in_batch.store(true, Ordering::SeqCst);
        BatchGuard(self)
    }

    /// Install this state as the process Ctrl-C handler.
    ///
    /// Can be called once per process.
    pub fn install(&self, printer: Printer) -> Result<()> {
        let interrupt = self.clone();
        ctrlc::set_handler(move || {
            if !interrupt.request() {
                cancelled(&printer);
                std::process::exit(0);
            }
        })
        .map_err(|e| DarkError::Signal {
            message: e.to_string(),
        })
    }
}

/// Keeps [`Interrupt`] in batch mode while alive.
pub struct BatchGuard<'a>(&'a Interrupt);

impl Drop for BatchGuard<'_> {
    fn drop(&mut self) {
        self.0.in_batch.store(false, Ordering::SeqCst);
    }
}

/// Report a cancellation on a fresh line.
pub fn cancelled(printer: &Printer) {
    printer.blank();
    printer.warning("Cancelled", CANCELLED_MESSAGE);
}
