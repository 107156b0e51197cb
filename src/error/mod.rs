// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            LaunchError (16 bytes)
//!                    |
//!      +---------+---+-----+---------+
//!      |         |         |         |
//!      v         v         v         v
//!    Subst   Frontend   Config    Process
//!     Box       Box       Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Substitution  Syntax, UnknownSubstitution, *NotSet, InvalidTypedValue
//!   Frontend      MissingAttribute, AttributeTypeMismatch, UnknownAction
//!   Config        ParseError, InvalidValue, NotFound
//!   Process       ExecutableNotFound, SpawnFailed
//!
//! All variants boxed => LaunchError is a tag plus one pointer.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`LaunchError`].
pub type LaunchResult<T> = std::result::Result<T, LaunchError>;

/// Top-level launch error type.
///
/// All sub-errors are boxed to keep this enum at two words on the stack.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// A substitution could not be parsed or resolved.
    #[error("substitution error: {0}")]
    Substitution(#[from] Box<SubstitutionError>),

    /// A launch description could not be read or parsed.
    #[error("frontend error: {0}")]
    Frontend(#[from] Box<FrontendError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for LaunchError {
                fn from(err: $error) -> Self {
                    LaunchError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    SubstitutionError => Substitution,
    FrontendError => Frontend,
    ConfigError => Config,
    ProcessError => Process,
}

// --- Substitution Errors ---

/// Errors raised while parsing or resolving substitutions.
#[derive(Debug, Error)]
pub enum SubstitutionError {
    /// Malformed substitution text.
    #[error("invalid substitution syntax in '{input}' at offset {offset}: {message}")]
    Syntax {
        input: String,
        offset: usize,
        message: String,
    },

    /// The substitution kind is not known.
    #[error("unknown substitution '$({name} ...)'")]
    UnknownSubstitution { name: String },

    /// The substitution was given the wrong number of arguments.
    #[error("substitution '{name}' expects {expected} argument(s), got {got}")]
    InvalidArgumentCount {
        name: String,
        expected: String,
        got: usize,
    },

    /// Referenced environment variable is not set and has no default.
    #[error("environment variable '{name}' is not set")]
    EnvironmentVariableNotSet { name: String },

    /// Referenced launch configuration is not set and has no default.
    #[error("launch configuration '{name}' is not set")]
    LaunchConfigurationNotSet { name: String },

    /// A resolved value could not be coerced to the requested type.
    #[error("cannot interpret '{value}' as {expected}")]
    InvalidTypedValue {
        value: String,
        expected: &'static str,
    },
}

// --- Frontend Errors ---

/// Errors raised while reading launch descriptions.
#[derive(Debug, Error)]
pub enum FrontendError {
    /// A required attribute is absent.
    #[error("entity '{entity}' is missing required attribute '{attribute}'")]
    MissingAttribute { entity: String, attribute: String },

    /// Attribute is present but has the wrong type.
    #[error("attribute '{attribute}' of entity '{entity}' must be {expected}, found {found}")]
    AttributeTypeMismatch {
        entity: String,
        attribute: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The entity carries attributes no parser consumed.
    #[error("entity '{entity}' has unexpected attribute(s): {attributes}")]
    UnexpectedAttributes { entity: String, attributes: String },

    /// No action is registered under this tag.
    #[error("unknown action '{tag}'")]
    UnknownAction { tag: String },

    /// The description does not have the expected shape.
    #[error("invalid launch description: {message}")]
    InvalidDescription { message: String },

    /// The description file could not be read or decoded.
    #[error("failed to load launch description '{path}': {message}")]
    LoadFailed { path: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in the launch environment's PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
