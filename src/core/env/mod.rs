// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment variable management.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write BTreeMap<EnvKey, String>)
//! Sources: current_env(), Env::from_map(), Env::new()
//! Ops: set / get / set_with_flags / set_with_separator / changed_since
//! ```
//!
//! - **Case-insensitive keys on Windows**, case-sensitive elsewhere
//! - **Copy-on-write**: clones share data until modified
//! - **UTF-8 only**: process variables that are not valid UTF-8 are skipped

use std::collections::BTreeMap;
use std::ffi::OsString;

use tracing::warn;

pub mod container;
pub mod types;


/// Captures the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped with a warning.
#[must_use]
pub fn current_env() -> container::Env {
    env_from_os_vars(std::env::vars_os())
}

pub(crate) fn env_from_os_vars(
    vars: impl IntoIterator<Item = (OsString, OsString)>,
) -> container::Env {
    let mut map = BTreeMap::new();
    for (key, value) in vars {
        match (key.into_string(), value.into_string()) {
            (Ok(key), Ok(value)) => {
                map.insert(key, value);
            }
            (Ok(key), Err(_)) => {
                warn!(%key, "skipping environment variable with non-UTF-8 value");
            }
            (Err(key), _) => {
                warn!(
                    key = %key.to_string_lossy(),
                    "skipping environment variable with non-UTF-8 name"
                );
            }
        }
    }
    container::Env::from_map(map)
}

/// Returns the platform's path-list separator (`;` on Windows, `:` elsewhere).
#[must_use]
pub const fn path_separator() -> &'static str {
    if cfg!(windows) { ";" } else { ":" }
}
