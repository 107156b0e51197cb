// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env command implementation for launch-rs.

use crate::cli::launch::EnvArgs;
use crate::cmd::launch::{execute_description, format_env};
use crate::config::Config;
use crate::error::Result;

/// Main handler for env command.
///
/// # Errors
///
/// Returns an error if the launch file cannot be executed.
pub fn run_env_command(args: &EnvArgs, config: &Config) -> Result<()> {
    let outcome = execute_description(&args.description, config)?;

    let lines = if args.changed {
        let changed = outcome.changed();
        format_env(changed.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    } else {
        format_env(outcome.environment.iter())
    };

    for line in lines {
        println!("{line}");
    }
    Ok(())
}
