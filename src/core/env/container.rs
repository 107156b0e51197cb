// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable struct and copy-on-write implementation.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write)
//! data: Arc<EnvData>
//! clone shares Arc until the first mutation (Arc::make_mut)
//! ```
//!
//! # Combination rule
//!
//! ```text
//! set_with_separator(key, value, sep, flags)
//!   key present, Append  --> existing + sep + value
//!   key present, Prepend --> value + sep + existing
//!   key present, Replace --> value
//!   key absent           --> value   (separator unused)
//! ```

use super::types::{EnvData, EnvFlags, EnvKey};
use std::collections::BTreeMap;
use std::sync::Arc;

/// A set of environment variables with copy-on-write semantics.
///
/// Cloning is cheap: copies share data until one of them is modified.
///
/// # Thread Safety
/// `Env` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Env {
    data: Arc<EnvData>,
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        let data = EnvData::from_vars(
            vars.into_iter()
                .map(|(k, v)| (EnvKey::new(k), v))
                .collect(),
        );
        Self {
            data: Arc::new(data),
        }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.set_with_flags(key, value, EnvFlags::Replace)
    }

    /// Sets an environment variable with specific flags and no separator.
    pub fn set_with_flags(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        flags: EnvFlags,
    ) -> &mut Self {
        self.set_with_separator(key, value, "", flags)
    }

    /// Combines `value` with the current value of `key` using `separator`.
    ///
    /// When `key` is not set, `value` is stored as-is and `separator` is not
    /// applied.
    pub fn set_with_separator(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
        separator: &str,
        flags: EnvFlags,
    ) -> &mut Self {
        let key = EnvKey::new(key.into());
        let value = value.into();
        let vars = Arc::make_mut(&mut self.data).vars_mut();

        match (vars.get_mut(&key), flags) {
            (Some(existing), EnvFlags::Append) => {
                existing.reserve(separator.len() + value.len());
                existing.push_str(separator);
                existing.push_str(&value);
            }
            (Some(existing), EnvFlags::Prepend) => {
                let mut new_value = value;
                new_value.reserve(separator.len() + existing.len());
                new_value.push_str(separator);
                new_value.push_str(existing);
                *existing = new_value;
            }
            (Some(existing), EnvFlags::Replace) => {
                *existing = value;
            }
            (None, _) => {
                vars.insert(key, value);
            }
        }

        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .vars()
            .get(&EnvKey::new(key))
            .map(String::as_str)
    }

    /// Returns true if `key` is set (possibly to an empty string).
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.data.vars().contains_key(&EnvKey::new(key))
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        if self.contains(key) {
            Arc::make_mut(&mut self.data)
                .vars_mut()
                .remove(&EnvKey::new(key));
        }
        self
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    /// Returns an iterator over environment variables, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .vars()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.vars().is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.vars().len()
    }

    /// Returns the variables whose value differs from `base`, including new ones.
    #[must_use]
    pub fn changed_since(&self, base: &Self) -> BTreeMap<String, String> {
        self.iter()
            .filter(|(k, v)| base.get(k) != Some(*v))
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }
}
