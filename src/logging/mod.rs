// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Logging for launch-rs.
//!
//! ```text
//! stdout     `launch env` output, the launched command
//! stderr     console layer
//!              compact, no timestamps, global.log_level
//!              colored only when stderr is a terminal
//! log_file   file layer (optional, non-blocking)
//!              global.file_log_level, global.log_format = text | json
//!              one `close` event per `action` span with its timings
//!
//! LogLevel:  0=silent  1=errors  2=warnings  3=info  4=debug  5=trace
//! ```

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::Dispatch;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::config::GlobalConfig;
use crate::error::{ConfigError, Result};

/// Verbosity, written as 0-5 in configuration and on the command line.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum LogLevel {
    Silent = 0,
    Errors = 1,
    Warnings = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// `EnvFilter` directive for this level.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Silent => "off",
            Self::Errors => "error",
            Self::Warnings => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> std::result::Result<Self, ConfigError> {
        match level {
            0 => Ok(Self::Silent),
            1 => Ok(Self::Errors),
            2 => Ok(Self::Warnings),
            3 => Ok(Self::Info),
            4 => Ok(Self::Debug),
            5 => Ok(Self::Trace),
            _ => Err(ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "log_level".to_string(),
                message: format!("log level must be 0-5, got {level}"),
            }),
        }
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.as_u8()
    }
}

/// Line format of the log file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    /// One JSON object per line, with the enclosing `action` span.
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Json => "json",
        })
    }
}

/// Where and how much launch-rs logs.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(default)]
    console_level: LogLevel,
    #[builder(default = LogLevel::Debug)]
    file_level: LogLevel,
    #[builder(into)]
    log_file: Option<PathBuf>,
    #[builder(default)]
    file_format: LogFormat,
    /// Colored console output. Defaults to whether stderr is a terminal.
    #[builder(default = std::io::stderr().is_terminal())]
    ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl From<&GlobalConfig> for LogConfig {
    fn from(global: &GlobalConfig) -> Self {
        Self::builder()
            .console_level(global.log_level)
            .file_level(global.file_log_level)
            .maybe_log_file(global.log_file.clone())
            .file_format(global.log_format)
            .build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub const fn file_format(&self) -> LogFormat {
        self.file_format
    }

    #[must_use]
    pub const fn ansi(&self) -> bool {
        self.ansi
    }
}

/// Flushes the log file when dropped.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber described by `config`.
///
/// # Errors
///
/// Returns an error if the log directory or file cannot be created.
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let (dispatch, guard) = build_dispatch(config)?;
    dispatch.init();
    Ok(guard)
}

/// Builds the console and file layers without installing them.
pub(crate) fn build_dispatch(config: &LogConfig) -> Result<(Dispatch, LogGuard)> {
    let console_layer = fmt::layer()
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(config.ansi())
        .with_filter(EnvFilter::new(config.console_level().directive()));

    let (file_writer, file_guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = open_log_file(path)?;
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };
    let file_filter = || EnvFilter::new(config.file_level().directive());

    let text_layer = file_writer
        .clone()
        .filter(|_| config.file_format() == LogFormat::Text)
        .map(|writer| {
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(file_filter())
        });
    let json_layer = file_writer
        .filter(|_| config.file_format() == LogFormat::Json)
        .map(|writer| {
            fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(writer)
                .with_span_events(FmtSpan::CLOSE)
                .with_filter(file_filter())
        });

    let subscriber = tracing_subscriber::registry()
        .with(console_layer)
        .with(text_layer)
        .with(json_layer);

    Ok((
        Dispatch::new(subscriber),
        LogGuard {
            _file_guard: file_guard,
        },
    ))
}

fn open_log_file(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    Ok(tracing_appender::non_blocking(file))
}
