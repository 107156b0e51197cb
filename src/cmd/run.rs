// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run command implementation for launch-rs.

use tracing::{info, warn};

use crate::cli::launch::RunArgs;
use crate::cmd::launch::{execute_description, format_env};
use crate::config::Config;
use crate::core::process::LaunchedCommand;
use crate::error::Result;

/// Main handler for run command.
///
/// Returns the exit code of the launched command, or `0` when only the
/// environment was printed.
///
/// # Errors
///
/// Returns an error if the launch file cannot be executed or the command
/// cannot be started.
pub async fn run_run_command(args: &RunArgs, config: &Config) -> Result<i32> {
    let outcome = execute_description(&args.description, config)?;

    let Some((program, rest)) = args.command.split_first() else {
        for line in format_env(outcome.environment.iter()) {
            println!("{line}");
        }
        return Ok(0);
    };

    // The child receives Ctrl+C itself; stay alive to report its exit code.
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Received Ctrl+C, waiting for the command to exit...");
        }
    });

    let command = LaunchedCommand::new(program, outcome.environment).args(rest);
    info!(cmd = %command.command_line(), "running");
    let code = command.run().await?;
    info!(code, "command exited");
    Ok(code)
}
