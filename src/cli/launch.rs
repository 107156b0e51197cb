// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the commands that execute a launch file.
//!
//! ```text
//! launch run launch.toml -a prefix:=/opt/tool -- make install
//!            |           |                       |
//!            file        LaunchArgument          command
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;

/// A `name:=value` launch argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchArgument {
    pub name: String,
    pub value: String,
}

impl FromStr for LaunchArgument {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once(":=")
            .ok_or_else(|| format!("expected 'name:=value', got '{s}'"))?;
        let name = name.trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(format!("invalid argument name '{name}'"));
        }
        Ok(Self {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}

impl fmt::Display for LaunchArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:={}", self.name, self.value)
    }
}

/// Launch file plus its arguments.
#[derive(Debug, Clone, Args)]
pub struct DescriptionArgs {
    /// Launch file (.toml, .json, .yaml or .yml).
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Launch argument, read by `$(var name)`. Can be specified multiple times.
    #[arg(short = 'a', long = "arg", value_name = "NAME:=VALUE", action = clap::ArgAction::Append)]
    pub arguments: Vec<LaunchArgument>,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub description: DescriptionArgs,

    /// Command to run in the resulting environment. Prints the environment
    /// when omitted.
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

/// Arguments for the `env` command.
#[derive(Debug, Clone, Args)]
pub struct EnvArgs {
    #[command(flatten)]
    pub description: DescriptionArgs,

    /// Only prints variables the launch added or changed.
    #[arg(long)]
    pub changed: bool,
}
