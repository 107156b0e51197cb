// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Launch actions.
//!
//! ```text
//! ActionRegistry  "append_env" --> factory(&Entity, &Parser)
//!        |
//!        v
//! LaunchDescription [ Box<dyn Action> ]
//!        |  execute(&mut LaunchContext), in order
//!        v
//! AppendEnvironmentVariable
//! ```
//!
//! ## Adding a New Action
//!
//! 1. Create the action struct in its own module
//! 2. Implement [`Action`] for it
//! 3. Register its tag and factory in [`registry::register_builtin_actions`]

pub mod append_env;
pub mod registry;

use std::fmt;

use crate::context::LaunchContext;
use crate::error::LaunchResult;

/// A unit of work executed against the launch context.
pub trait Action: fmt::Debug + Send + Sync {
    /// Tag under which the action appears in launch files.
    fn tag(&self) -> &'static str;

    /// Executes the action.
    ///
    /// # Errors
    ///
    /// Returns an error if the action cannot complete; the launch stops.
    fn execute(&self, context: &mut LaunchContext) -> LaunchResult<()>;
}

/// Ordered list of actions.
#[derive(Debug, Default)]
pub struct LaunchDescription {
    actions: Vec<Box<dyn Action>>,
}

impl LaunchDescription {
    #[must_use]
    pub fn new(actions: Vec<Box<dyn Action>>) -> Self {
        Self { actions }
    }

    /// Appends an action.
    pub fn push(&mut self, action: impl Action + 'static) {
        self.actions.push(Box::new(action));
    }

    #[must_use]
    pub fn actions(&self) -> &[Box<dyn Action>] {
        &self.actions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
