//! darkicon - Dark mode icon generator
//!
//! A library for finding `*icon.png` files in a directory tree and writing
//! a `.dark.png` sibling for each, with every visible pixel painted in a
//! single colour.

pub mod cli;
pub mod colour;
pub mod config;
pub mod discovery;
pub mod error;
pub mod interrupt;
pub mod output;
pub mod process;
pub mod recolor;

pub use colour::{parse_rgba, Colour};
pub use config::{Prompt, Settings, StdinPrompt};
pub use discovery::{icons, is_icon, Icons, ICON_SUFFIX};
pub use error::{DarkError, Result};
pub use interrupt::Interrupt;
pub use output::Printer;
pub use process::{process_directory, Failure, RunSummary};
pub use recolor::{dark_path, recolor_icon, recolor_pixels};
