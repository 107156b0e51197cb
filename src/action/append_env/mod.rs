// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The `append_env` action.
//!
//! Appends to an environment variable if it exists and sets it if it does not.
//! It can optionally prepend instead, and use a custom separator (default: the
//! platform path-list separator).
//!
//! ```text
//! execute:
//!   N = name   V = value   P = prepend   S = separator     (resolved in order)
//!   N set, !P  -->  E + S + V
//!   N set,  P  -->  V + S + E
//!   N unset    -->  V
//! ```
//!
//! ```toml
//! [[launch]]
//! append_env = { name = "PATH", value = "/opt/tool/bin", prepend = "$(var first)", separator = ":" }
//! ```

use bon::Builder;
use tracing::debug;

use super::Action;
use crate::context::LaunchContext;
use crate::core::env::path_separator;
use crate::core::env::types::EnvFlags;
use crate::error::LaunchResult;
use crate::frontend::{DataType, Entity, Parser};
use crate::substitution::{SubstitutionList, TypedSubstitution};

/// Appends (or prepends) a value to an environment variable.
///
/// # Example
///
/// ```
/// use launch_rs::action::Action;
/// use launch_rs::action::append_env::AppendEnvironmentVariable;
/// use launch_rs::context::LaunchContext;
///
/// let mut context = LaunchContext::default();
/// context.environment_mut().set("PATH", "/usr/bin");
///
/// let action = AppendEnvironmentVariable::builder()
///     .name("PATH")
///     .value("/opt/tool/bin")
///     .prepend(true)
///     .separator(":")
///     .build();
/// action.execute(&mut context)?;
///
/// assert_eq!(context.environment().get("PATH"), Some("/opt/tool/bin:/usr/bin"));
/// # Ok::<(), launch_rs::error::LaunchError>(())
/// ```
#[derive(Debug, Clone, Builder)]
pub struct AppendEnvironmentVariable {
    #[builder(into)]
    name: SubstitutionList,
    #[builder(into)]
    value: SubstitutionList,
    #[builder(into, default = TypedSubstitution::Literal(false))]
    prepend: TypedSubstitution<bool>,
    #[builder(into, default = SubstitutionList::text(path_separator()))]
    separator: SubstitutionList,
}

/// Attributes read from an `append_env` entity.
///
/// `None` leaves the constructor default in place.
#[derive(Debug, Clone)]
pub struct AppendEnvironmentVariableArgs {
    /// Variable to modify.
    pub name: SubstitutionList,
    /// Text joined onto the variable.
    pub value: SubstitutionList,
    /// Put `value` in front of the existing text; coerced to bool at execution.
    pub prepend: Option<TypedSubstitution<bool>>,
    /// Joins `value` to existing text; the platform path separator when absent.
    pub separator: Option<SubstitutionList>,
}

impl AppendEnvironmentVariableArgs {
    #[must_use]
    pub fn into_action(self) -> AppendEnvironmentVariable {
        AppendEnvironmentVariable::builder()
            .name(self.name)
            .value(self.value)
            .maybe_prepend(self.prepend)
            .maybe_separator(self.separator)
            .build()
    }
}

impl AppendEnvironmentVariable {
    pub const TAG: &'static str = "append_env";

    /// Appends `value` to `name` with the default prepend flag and separator.
    #[must_use]
    pub fn new(name: impl Into<SubstitutionList>, value: impl Into<SubstitutionList>) -> Self {
        Self::builder().name(name).value(value).build()
    }

    /// Reads an `append_env` entity.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` or `value` is missing, an attribute has the
    /// wrong type, or substitution text is malformed.
    pub fn parse(
        entity: &Entity,
        parser: &Parser<'_>,
    ) -> LaunchResult<AppendEnvironmentVariableArgs> {
        let name = parser.parse_substitution(&entity.get_str("name")?)?;
        let value = parser.parse_substitution(&entity.get_str("value")?)?;

        let prepend = entity
            .get_attr_opt("prepend", DataType::Bool, true)?
            .map(|raw| parser.parse_if_substitutions(raw))
            .transpose()?;

        let separator = entity
            .get_str_opt("separator")?
            .map(|raw| parser.parse_substitution(&raw))
            .transpose()?;

        Ok(AppendEnvironmentVariableArgs {
            name,
            value,
            prepend,
            separator,
        })
    }

    /// Name of the variable to set or append to.
    #[must_use]
    pub const fn name(&self) -> &SubstitutionList {
        &self.name
    }

    /// Value to set or append.
    #[must_use]
    pub const fn value(&self) -> &SubstitutionList {
        &self.value
    }

    #[must_use]
    pub const fn prepend(&self) -> &TypedSubstitution<bool> {
        &self.prepend
    }

    #[must_use]
    pub const fn separator(&self) -> &SubstitutionList {
        &self.separator
    }
}

impl Action for AppendEnvironmentVariable {
    fn tag(&self) -> &'static str {
        Self::TAG
    }

    fn execute(&self, context: &mut LaunchContext) -> LaunchResult<()> {
        let name = context.perform_substitution(&self.name)?;
        let value = context.perform_substitution(&self.value)?;
        let prepend = context.perform_typed_substitution(&self.prepend)?;
        let separator = context.perform_substitution(&self.separator)?;

        debug!(
            name = %name,
            value = %value,
            prepend,
            existing = context.environment().contains(&name),
            "append_env"
        );

        context.environment_mut().set_with_separator(
            name,
            value,
            &separator,
            EnvFlags::from_prepend(prepend),
        );
        Ok(())
    }
}

/// Registry factory for `append_env`.
pub(super) fn factory(entity: &Entity, parser: &Parser<'_>) -> LaunchResult<Box<dyn Action>> {
    Ok(Box::new(AppendEnvironmentVariable::parse(entity, parser)?.into_action()))
}
