// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared pipeline of the `run` and `env` commands.
//!
//! ```text
//! environment.inherit ? current_env() : Env::new()     initial
//! [arguments] + -a name:=value                          launch configurations
//! Parser(builtin registry).load_description(FILE)
//! LaunchService::run                                    final
//! ```

use anyhow::Context;
use tracing::info;

use crate::action::registry::ActionRegistry;
use crate::cli::launch::DescriptionArgs;
use crate::config::Config;
use crate::context::LaunchContext;
use crate::core::env::container::Env;
use crate::core::env::current_env;
use crate::error::Result;
use crate::frontend::Parser;
use crate::launch::LaunchService;

/// Environments before and after a launch.
#[derive(Debug, Clone)]
pub struct LaunchOutcome {
    pub initial: Env,
    pub environment: Env,
}

impl LaunchOutcome {
    /// Variables the launch added or changed.
    #[must_use]
    pub fn changed(&self) -> std::collections::BTreeMap<String, String> {
        self.environment.changed_since(&self.initial)
    }
}

/// Builds the initial context from the configuration and CLI arguments.
///
/// Command-line arguments override `[arguments]` defaults.
#[must_use]
pub fn initial_context(args: &DescriptionArgs, config: &Config) -> LaunchContext {
    let environment = if config.environment.inherit {
        current_env()
    } else {
        Env::new()
    };

    let configurations = config
        .arguments
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .chain(
            args.arguments
                .iter()
                .map(|arg| (arg.name.clone(), arg.value.clone())),
        );

    LaunchContext::new(environment).with_launch_configurations(configurations)
}

/// Loads and executes the launch file named in `args`.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or parsed, or if an action
/// fails.
pub fn execute_description(args: &DescriptionArgs, config: &Config) -> Result<LaunchOutcome> {
    let registry = ActionRegistry::with_builtin_actions();
    let parser = Parser::new(&registry);

    let description = parser
        .load_description(&args.file)
        .with_context(|| format!("failed to read launch file '{}'", args.file.display()))?;

    let context = initial_context(args, config);
    let initial = context.environment().clone();

    let mut service = LaunchService::new(context);
    service
        .run(&description)
        .with_context(|| format!("launch of '{}' failed", args.file.display()))?;

    let environment = service.into_context().into_environment();
    info!(
        file = %args.file.display(),
        changed = environment.changed_since(&initial).len(),
        "environment ready"
    );

    Ok(LaunchOutcome {
        initial,
        environment,
    })
}

/// Renders `KEY=VALUE` lines.
#[must_use]
pub fn format_env<'a>(vars: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<String> {
    vars.into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect()
}
