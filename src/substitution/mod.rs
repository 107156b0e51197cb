// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Deferred values resolved against a [`LaunchContext`].
//!
//! ```text
//! "$(var prefix)/bin:$(optenv EXTRA)"
//!          |
//!       parse()
//!          v
//! SubstitutionList [ LaunchConfiguration(prefix), Text("/bin:"),
//!                    EnvironmentVariable(EXTRA, default "") ]
//!          |
//!   perform(&LaunchContext)
//!          v
//!     "/opt/tool/bin:"
//! ```
//!
//! | Syntax                     | Token                                   |
//! |----------------------------|-----------------------------------------|
//! | `text`                     | [`Substitution::Text`]                  |
//! | `$(env NAME [DEFAULT])`    | [`Substitution::EnvironmentVariable`]   |
//! | `$(optenv NAME [DEFAULT])` | same, default `""`                      |
//! | `$(var NAME [DEFAULT])`    | [`Substitution::LaunchConfiguration`]   |
//!
//! [`TypedSubstitution`] wraps a literal or a deferred value and coerces the
//! resolved text with YAML scalar rules.

mod parser;
pub mod typed;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::context::LaunchContext;
use crate::error::{LaunchResult, SubstitutionError};

pub use parser::parse;
pub use typed::{TypedScalar, TypedSubstitution};

/// A single deferred token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Substitution {
    /// Literal text.
    Text(String),
    /// Value of a variable in the launch environment.
    EnvironmentVariable {
        name: SubstitutionList,
        default: Option<SubstitutionList>,
    },
    /// Value of a launch argument.
    LaunchConfiguration {
        name: SubstitutionList,
        default: Option<SubstitutionList>,
    },
    /// A grouped expression list.
    Nested(SubstitutionList),
}

impl Substitution {
    /// Resolves this token to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced variable or launch configuration is not
    /// set and no default was given.
    pub fn perform(&self, context: &LaunchContext) -> LaunchResult<String> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::EnvironmentVariable { name, default } => {
                let name = name.perform(context)?;
                match context.environment().get(&name) {
                    Some(value) => Ok(value.to_owned()),
                    None => match default {
                        Some(default) => default.perform(context),
                        None => Err(SubstitutionError::EnvironmentVariableNotSet { name }.into()),
                    },
                }
            }
            Self::LaunchConfiguration { name, default } => {
                let name = name.perform(context)?;
                match context.launch_configuration(&name) {
                    Some(value) => Ok(value.to_owned()),
                    None => match default {
                        Some(default) => default.perform(context),
                        None => Err(SubstitutionError::LaunchConfigurationNotSet { name }.into()),
                    },
                }
            }
            Self::Nested(list) => list.perform(context),
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(&text.replace("$(", "\\$(")),
            Self::EnvironmentVariable { name, default } => match default {
                None => write!(f, "$(env {})", DisplayArg(name)),
                Some(d) if d.is_empty() => write!(f, "$(optenv {})", DisplayArg(name)),
                Some(d) => write!(f, "$(env {} {})", DisplayArg(name), DisplayArg(d)),
            },
            Self::LaunchConfiguration { name, default } => match default {
                None => write!(f, "$(var {})", DisplayArg(name)),
                Some(d) => write!(f, "$(var {} {})", DisplayArg(name), DisplayArg(d)),
            },
            Self::Nested(list) => write!(f, "{list}"),
        }
    }
}

/// Renders a substitution argument, quoting it when it would not survive
/// re-parsing as a single argument.
struct DisplayArg<'a>(&'a SubstitutionList);

impl fmt::Display for DisplayArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.0.to_string();
        if rendered.is_empty() || rendered.contains(|c: char| c.is_whitespace() || c == ')') {
            write!(f, "'{rendered}'")
        } else {
            f.write_str(&rendered)
        }
    }
}

/// An ordered sequence of tokens that resolves to the concatenation of their
/// results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionList(Vec<Substitution>);

impl SubstitutionList {
    #[must_use]
    pub const fn new(tokens: Vec<Substitution>) -> Self {
        Self(tokens)
    }

    /// A list holding one literal text token.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self(vec![Substitution::Text(text.into())])
    }

    #[must_use]
    pub fn tokens(&self) -> &[Substitution] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the literal text if every token is [`Substitution::Text`].
    #[must_use]
    pub fn as_literal(&self) -> Option<String> {
        self.0
            .iter()
            .map(|token| match token {
                Substitution::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Resolves every token in order and concatenates the results.
    ///
    /// # Errors
    ///
    /// Propagates the first token resolution error.
    pub fn perform(&self, context: &LaunchContext) -> LaunchResult<String> {
        self.0.iter().try_fold(String::new(), |mut acc, token| {
            acc.push_str(&token.perform(context)?);
            Ok(acc)
        })
    }
}

impl fmt::Display for SubstitutionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|token| write!(f, "{token}"))
    }
}

impl From<&str> for SubstitutionList {
    fn from(text: &str) -> Self {
        Self::text(text)
    }
}

impl From<String> for SubstitutionList {
    fn from(text: String) -> Self {
        Self::text(text)
    }
}

impl From<Substitution> for SubstitutionList {
    fn from(token: Substitution) -> Self {
        Self(vec![token])
    }
}

impl From<Vec<Substitution>> for SubstitutionList {
    fn from(tokens: Vec<Substitution>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<Substitution> for SubstitutionList {
    fn from_iter<I: IntoIterator<Item = Substitution>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
