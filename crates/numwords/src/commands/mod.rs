//! Command implementations.

use std::io::IsTerminal;

use anyhow::{Context, bail};

pub mod convert;
pub mod info;

/// Read whitespace-separated values from stdin.
///
/// Refuses to block on an interactive terminal.
pub fn read_stdin_values() -> anyhow::Result<Vec<String>> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("no values given; pass numbers as arguments or pipe them on stdin");
    }
    let content = std::io::read_to_string(stdin).context("failed to read stdin")?;
    Ok(content.split_whitespace().map(str::to_string).collect())
}
