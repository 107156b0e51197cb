// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Declarative launch files.
//!
//! ```toml
//! [[launch]]
//! append_env = { name = "PATH", value = "$(var prefix)/bin", prepend = true }
//!
//! [[launch]]
//! append_env = { name = "LD_LIBRARY_PATH", value = "$(var prefix)/lib" }
//! ```
//!
//! The same tree may be written in JSON or YAML.

pub mod entity;
pub mod parser;

#[cfg(test)]
mod tests;

pub use entity::{AttrValue, DataType, Entity};
pub use parser::{DescriptionFormat, Parser};
