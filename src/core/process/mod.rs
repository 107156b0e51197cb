// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Running a command inside a launch environment.
//!
//! ```text
//! LaunchedCommand::new("tool", env)
//!   .args([...])
//!   .run()
//!       --> which_in(program, env PATH, cwd)
//!       --> tokio::process::Command (env_clear + envs, inherited stdio)
//!       --> exit code
//! ```

use std::path::PathBuf;

use tokio::process::Command;
use tracing::{debug, trace};

use crate::core::env::container::Env;
use crate::error::{LaunchResult, ProcessError};

/// A command to execute with exactly the variables of a launch environment.
#[derive(Debug, Clone)]
pub struct LaunchedCommand {
    program: String,
    args: Vec<String>,
    env: Env,
}

impl LaunchedCommand {
    #[must_use]
    pub fn new(program: impl Into<String>, env: Env) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env,
        }
    }

    /// Adds arguments.
    #[must_use]
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Returns the full command line as a string (for logging).
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut cmd = self.program.clone();
        for arg in &self.args {
            cmd.push(' ');
            if arg.contains(' ') {
                cmd.push('"');
                cmd.push_str(arg);
                cmd.push('"');
            } else {
                cmd.push_str(arg);
            }
        }
        cmd
    }

    /// Resolves the program against the launch environment's `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `ProcessError::ExecutableNotFound` if no matching executable exists.
    pub fn resolve_program(&self) -> LaunchResult<PathBuf> {
        let cwd = std::env::current_dir()?;
        which::which_in(&self.program, self.env.get("PATH"), cwd).map_err(|_| {
            ProcessError::ExecutableNotFound {
                name: self.program.clone(),
            }
            .into()
        })
    }

    /// Spawns the command with inherited stdio and waits for it.
    ///
    /// Returns the exit code; a process killed by a signal reports `1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be found or spawned.
    pub async fn run(self) -> LaunchResult<i32> {
        let program = self.resolve_program()?;
        debug!(cmd = %self.command_line(), path = %program.display(), "exec");

        let status = Command::new(&program)
            .args(&self.args)
            .env_clear()
            .envs(self.env.iter())
            .status()
            .await
            .map_err(|source| ProcessError::SpawnFailed {
                command: self.command_line(),
                source,
            })?;

        trace!(program = %self.program, ?status, "exited");
        Ok(status.code().unwrap_or(1))
    }
}
