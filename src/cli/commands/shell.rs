//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, elvish and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::StreakError;

/// Generate the completion script for `shell`.
///
/// # Errors
///
/// Returns `StreakError::MalformedInput` if the generated script is not UTF-8.
pub fn completions(shell: Shell) -> Result<String, StreakError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "ghstreak", &mut buf);
    String::from_utf8(buf).map_err(|e| StreakError::MalformedInput(format!("UTF-8 error: {e}")))
}
