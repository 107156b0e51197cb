// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   run, env   --> launch::execute_description
//!   list, options
//! ```

pub mod config;
pub mod env;
pub mod launch;
pub mod list;
pub mod run;
