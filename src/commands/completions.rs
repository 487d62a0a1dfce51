//! # Completions Command
//!
//! Writes a completion script for the `todo` binary.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::io::Write;

use anyhow::Result;
use clap::Command;
use clap_complete::{generate, Shell};

/// Writes completions for `shell` to `out`, named after `cmd` (`Cli::command()`).
pub fn execute<W: Write>(shell: Shell, cmd: &mut Command, out: &mut W) -> Result<()> {
    let bin = cmd.get_name().to_string();
    generate(shell, cmd, bin, out);
    out.flush()?;
    Ok(())
}
