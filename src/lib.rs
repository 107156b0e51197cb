// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |              run / env / list
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, layered settings  |
//!              '-------------+-------------'
//!                            v
//!        frontend -----> action -----> launch
//!     launch files     registry,     LaunchService
//!     Entity, Parser   append_env         |
//!                           |             v
//!                           +-------> context
//!                                  Env + launch args
//!                                         ^
//!                                    substitution
//!                               $(env) $(optenv) $(var)
//!
//!   +-----------------------------------------+
//!   |  core     env container, process        |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod action;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod context;
pub mod core;
pub mod error;
pub mod frontend;
pub mod launch;
pub mod logging;
pub mod substitution;
