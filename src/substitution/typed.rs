// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Typed substitutions with YAML-style scalar coercion.
//!
//! ```text
//! TypedSubstitution<bool>
//!   Literal(true)             --> true
//!   Deferred("$(var flag)")   --> perform --> "Yes" --> coerce --> true
//!
//! bool:  true | yes | on   --> true
//!        false | no | off  --> false      (case-insensitive, trimmed)
//! ```

use std::fmt;

use super::{Substitution, SubstitutionList};
use crate::context::LaunchContext;
use crate::error::{LaunchResult, SubstitutionError};
use crate::frontend::AttrValue;

/// A scalar type a deferred value can be coerced into.
pub trait TypedScalar: Copy + fmt::Debug + fmt::Display {
    /// Name used in error messages.
    const TYPE_NAME: &'static str;

    /// Coerces resolved text following YAML scalar rules.
    fn coerce(text: &str) -> Option<Self>;

    /// Extracts a literal from a non-string entity attribute.
    fn from_attr(value: &AttrValue) -> Option<Self>;
}

impl TypedScalar for bool {
    const TYPE_NAME: &'static str = "bool";

    fn coerce(text: &str) -> Option<Self> {
        let text = text.trim();
        if ["true", "yes", "on"]
            .iter()
            .any(|t| text.eq_ignore_ascii_case(t))
        {
            Some(true)
        } else if ["false", "no", "off"]
            .iter()
            .any(|t| text.eq_ignore_ascii_case(t))
        {
            Some(false)
        } else {
            None
        }
    }

    fn from_attr(value: &AttrValue) -> Option<Self> {
        match value {
            AttrValue::Bool(b) => Some(*b),
            AttrValue::Str(s) => Self::coerce(s),
            AttrValue::Int(_) | AttrValue::Float(_) => None,
        }
    }
}

/// Either a literal value or a deferred expression coerced at execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedSubstitution<T> {
    Literal(T),
    Deferred(SubstitutionList),
}

impl<T: TypedScalar> TypedSubstitution<T> {
    /// Resolves to a concrete value.
    ///
    /// # Errors
    ///
    /// Propagates resolution errors and returns
    /// `SubstitutionError::InvalidTypedValue` when the resolved text is not a
    /// valid `T`.
    pub fn perform(&self, context: &LaunchContext) -> LaunchResult<T> {
        match self {
            Self::Literal(value) => Ok(*value),
            Self::Deferred(list) => {
                let text = list.perform(context)?;
                T::coerce(&text).ok_or_else(|| {
                    SubstitutionError::InvalidTypedValue {
                        value: text,
                        expected: T::TYPE_NAME,
                    }
                    .into()
                })
            }
        }
    }
}

impl<T: TypedScalar> fmt::Display for TypedSubstitution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(value) => write!(f, "{value}"),
            Self::Deferred(list) => write!(f, "{list}"),
        }
    }
}

impl From<bool> for TypedSubstitution<bool> {
    fn from(value: bool) -> Self {
        Self::Literal(value)
    }
}

impl<T> From<&str> for TypedSubstitution<T> {
    fn from(text: &str) -> Self {
        Self::Deferred(SubstitutionList::text(text))
    }
}

impl<T> From<String> for TypedSubstitution<T> {
    fn from(text: String) -> Self {
        Self::Deferred(SubstitutionList::text(text))
    }
}

impl<T> From<Substitution> for TypedSubstitution<T> {
    fn from(token: Substitution) -> Self {
        Self::Deferred(token.into())
    }
}

impl<T> From<SubstitutionList> for TypedSubstitution<T> {
    fn from(list: SubstitutionList) -> Self {
        Self::Deferred(list)
    }
}
