// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for launch-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! launch [global options] <command>
//! run FILE [-a name:=value]... [-- COMMAND ARGS...]
//! env FILE [-a name:=value]... [--changed]
//! list
//! options
//! version
//! ```

pub mod global;
pub mod launch;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::launch::{EnvArgs, RunArgs};
use clap::{Parser, Subcommand};

/// Declarative launch descriptions.
///
/// Builds a process environment from a launch file and runs a command in it.
#[derive(Debug, Parser)]
#[command(
    name = "launch",
    author,
    version,
    about = "Declarative launch descriptions",
    long_about = "launch-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Executes the actions of a launch file against the current\n\
                  environment. `launch run dev.toml -- cargo test` runs a command\n\
                  in the resulting environment; `launch env dev.toml` prints it.\n\
                  See `launch <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  launch reads `launch-rs.toml` from the current directory if present,\n\
                  then every file given with --config, in order. LAUNCH_* environment\n\
                  variables override both, e.g. LAUNCH_GLOBAL__LOG_LEVEL=4.\n\
                  Defaults for launch arguments live in the [arguments] section."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the registered launch actions.
    List,

    /// Executes a launch file, then runs a command in the resulting environment.
    Run(RunArgs),

    /// Executes a launch file and prints the resulting environment.
    Env(EnvArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
