//! Shell completions generation.

use clap_complete::Shell;

use crate::error::Result;

/// Write a completion script for `shell` to stdout.
pub fn run(shell: Shell) -> Result<()> {
    let mut cmd = <super::Cli as clap::CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "darkicon", &mut std::io::stdout());
    Ok(())
}
