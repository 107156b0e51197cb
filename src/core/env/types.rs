// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Types for environment variable management.
//!
//! # Architecture
//!
//! ```text
//! EnvFlags: Replace | Append | Prepend
//! EnvKey:   case-insensitive on Windows (PATH == Path == path)
//! EnvData:  BTreeMap<EnvKey, String> for deterministic order
//! ```

use std::collections::BTreeMap;

/// How a new value is combined with an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvFlags {
    /// Replace the existing value (default)
    #[default]
    Replace,
    /// Place the new value after the existing value
    Append,
    /// Place the new value before the existing value
    Prepend,
}

impl EnvFlags {
    /// Selects `Prepend` or `Append` from a prepend flag.
    #[must_use]
    pub const fn from_prepend(prepend: bool) -> Self {
        if prepend { Self::Prepend } else { Self::Append }
    }
}

/// An environment variable key, compared case-insensitively on Windows.
#[derive(Debug, Clone)]
pub(super) struct EnvKey(String);

impl EnvKey {
    pub(super) fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub(super) fn as_str(&self) -> &str {
        &self.0
    }

    #[cfg(windows)]
    fn folded(&self) -> std::borrow::Cow<'_, str> {
        std::borrow::Cow::Owned(self.0.to_ascii_lowercase())
    }

    #[cfg(not(windows))]
    fn folded(&self) -> std::borrow::Cow<'_, str> {
        std::borrow::Cow::Borrowed(&self.0)
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded() == other.folded()
    }
}

impl Eq for EnvKey {}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.folded().cmp(&other.folded())
    }
}

/// Shared environment data for copy-on-write semantics.
#[derive(Debug, Clone, Default)]
pub(super) struct EnvData {
    vars: BTreeMap<EnvKey, String>,
}

impl EnvData {
    pub(super) const fn from_vars(vars: BTreeMap<EnvKey, String>) -> Self {
        Self { vars }
    }

    pub(super) const fn vars(&self) -> &BTreeMap<EnvKey, String> {
        &self.vars
    }

    pub(super) const fn vars_mut(&mut self) -> &mut BTreeMap<EnvKey, String> {
        &mut self.vars
    }
}
