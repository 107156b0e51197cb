// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Registry mapping launch-file tags to action factories.
//!
//! ```text
//! startup:  ActionRegistry::with_builtin_actions()
//!             register("append_env", append_env::factory)
//! parse:    registry.get(entity.type_name()) --> factory(entity, parser)
//! ```

use std::collections::BTreeMap;

use super::Action;
use super::append_env::{self, AppendEnvironmentVariable};
use crate::error::LaunchResult;
use crate::frontend::{Entity, Parser};

/// Builds an action from a parsed entity.
pub type ActionFactory = fn(&Entity, &Parser<'_>) -> LaunchResult<Box<dyn Action>>;

/// Registry for looking up action factories by tag.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    factories: BTreeMap<String, ActionFactory>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Creates a registry holding every built-in action.
    #[must_use]
    pub fn with_builtin_actions() -> Self {
        let mut registry = Self::new();
        register_builtin_actions(&mut registry);
        registry
    }

    /// Registers a factory under `tag`, returning the factory it replaced.
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        factory: ActionFactory,
    ) -> Option<ActionFactory> {
        let tag = tag.into();
        let previous = self.factories.insert(tag.clone(), factory);
        if previous.is_some() {
            tracing::warn!(tag = %tag, "replacing registered action factory");
        }
        previous
    }

    #[must_use]
    pub fn get(&self, tag: &str) -> Option<ActionFactory> {
        self.factories.get(tag).copied()
    }

    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.factories.contains_key(tag)
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

/// Registers the actions shipped with this crate.
pub fn register_builtin_actions(registry: &mut ActionRegistry) {
    registry.register(AppendEnvironmentVariable::TAG, append_env::factory);
}
