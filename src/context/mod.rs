// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Live state of a launch.
//!
//! ```text
//! LaunchContext
//!   environment            Env (read by $(env), written by actions)
//!   launch_configurations  name -> value (read by $(var))
//! ```

use std::collections::BTreeMap;

use crate::core::env::container::Env;
use crate::error::LaunchResult;
use crate::substitution::{SubstitutionList, TypedScalar, TypedSubstitution};

/// Execution context handed to every action.
#[derive(Debug, Clone, Default)]
pub struct LaunchContext {
    environment: Env,
    launch_configurations: BTreeMap<String, String>,
}

impl LaunchContext {
    /// Creates a context around an initial environment.
    #[must_use]
    pub fn new(environment: Env) -> Self {
        Self {
            environment,
            launch_configurations: BTreeMap::new(),
        }
    }

    /// Adds launch configurations, overriding existing ones with the same name.
    #[must_use]
    pub fn with_launch_configurations(
        mut self,
        configurations: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        self.launch_configurations.extend(configurations);
        self
    }

    #[must_use]
    pub const fn environment(&self) -> &Env {
        &self.environment
    }

    pub const fn environment_mut(&mut self) -> &mut Env {
        &mut self.environment
    }

    /// Consumes the context, returning its environment.
    #[must_use]
    pub fn into_environment(self) -> Env {
        self.environment
    }

    #[must_use]
    pub fn launch_configuration(&self, name: &str) -> Option<&str> {
        self.launch_configurations.get(name).map(String::as_str)
    }

    pub fn set_launch_configuration(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.launch_configurations.insert(name.into(), value.into());
    }

    #[must_use]
    pub const fn launch_configurations(&self) -> &BTreeMap<String, String> {
        &self.launch_configurations
    }

    /// Resolves a deferred string value.
    ///
    /// # Errors
    ///
    /// Propagates substitution resolution errors.
    pub fn perform_substitution(&self, list: &SubstitutionList) -> LaunchResult<String> {
        list.perform(self)
    }

    /// Resolves a typed deferred value.
    ///
    /// # Errors
    ///
    /// Propagates resolution and coercion errors.
    pub fn perform_typed_substitution<T: TypedScalar>(
        &self,
        value: &TypedSubstitution<T>,
    ) -> LaunchResult<T> {
        value.perform(self)
    }
}

#[cfg(test)]
mod tests;
