// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Sequential execution of a [`LaunchDescription`].
//!
//! ```text
//! LaunchService::new(LaunchContext)
//!   run(&description)
//!     for action in description:      span "action" { index, tag }
//!       action.execute(&mut context)  first error stops the launch
//!   into_context()
//! ```

use tracing::{error, info, info_span};

use crate::action::LaunchDescription;
use crate::context::LaunchContext;
use crate::error::LaunchResult;

/// Runs launch descriptions against a context it owns.
#[derive(Debug, Default)]
pub struct LaunchService {
    context: LaunchContext,
}

impl LaunchService {
    #[must_use]
    pub const fn new(context: LaunchContext) -> Self {
        Self { context }
    }

    /// Executes every action in order.
    ///
    /// # Errors
    ///
    /// Returns the first action error; later actions are not executed.
    pub fn run(&mut self, description: &LaunchDescription) -> LaunchResult<()> {
        info!(actions = description.len(), "launching");

        for (index, action) in description.actions().iter().enumerate() {
            let span = info_span!("action", index, tag = action.tag());
            let _enter = span.enter();

            action
                .execute(&mut self.context)
                .inspect_err(|e| error!(error = %e, "action failed"))?;
        }

        info!("launch complete");
        Ok(())
    }

    #[must_use]
    pub const fn context(&self) -> &LaunchContext {
        &self.context
    }

    #[must_use]
    pub fn into_context(self) -> LaunchContext {
        self.context
    }
}
