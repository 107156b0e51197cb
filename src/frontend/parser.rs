// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Turns launch files into [`LaunchDescription`]s.
//!
//! ```text
//! launch.toml / .json / .yaml
//!        |  config crate (File + FileFormat)
//!        v
//! serde_json::Value { launch = [ { <tag> = { attrs } }, ... ] }
//!        |  parse_description
//!        v
//! Entity(tag, attrs) --registry.get(tag)--> factory(entity, parser)
//!        |  reject unread attributes
//!        v
//! LaunchDescription [ Box<dyn Action>, ... ]
//! ```

use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::entity::{AttrValue, Entity};
use crate::action::registry::ActionRegistry;
use crate::action::{Action, LaunchDescription};
use crate::error::{FrontendError, LaunchResult, SubstitutionError};
use crate::substitution::{self, SubstitutionList, TypedScalar, TypedSubstitution};

/// Serialization format of a launch file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionFormat {
    Toml,
    Json,
    Yaml,
}

impl DescriptionFormat {
    /// Picks the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    const fn file_format(self) -> config::FileFormat {
        match self {
            Self::Toml => config::FileFormat::Toml,
            Self::Json => config::FileFormat::Json,
            Self::Yaml => config::FileFormat::Yaml,
        }
    }
}

/// Parser for launch descriptions backed by an [`ActionRegistry`].
#[derive(Debug, Clone, Copy)]
pub struct Parser<'a> {
    registry: &'a ActionRegistry,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub const fn new(registry: &'a ActionRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &'a ActionRegistry {
        self.registry
    }

    /// Parses substitution text into a deferred value.
    ///
    /// # Errors
    ///
    /// Returns a `SubstitutionError` for malformed text.
    pub fn parse_substitution(&self, text: &str) -> LaunchResult<SubstitutionList> {
        Ok(substitution::parse(text)?)
    }

    /// Keeps non-string attributes as literals and parses strings as
    /// substitutions.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed substitution text or a literal of the
    /// wrong type.
    pub fn parse_if_substitutions<T: TypedScalar>(
        &self,
        value: AttrValue,
    ) -> LaunchResult<TypedSubstitution<T>> {
        match value {
            AttrValue::Str(text) => Ok(TypedSubstitution::Deferred(
                self.parse_substitution(&text)?,
            )),
            other => T::from_attr(&other)
                .map(TypedSubstitution::Literal)
                .ok_or_else(|| {
                    SubstitutionError::InvalidTypedValue {
                        value: other.to_string(),
                        expected: T::TYPE_NAME,
                    }
                    .into()
                }),
        }
    }

    /// Builds the action registered for the entity's tag.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAction` for unregistered tags, the factory's error, or
    /// `UnexpectedAttributes` when the factory left attributes unread.
    pub fn parse_action(&self, entity: &Entity) -> LaunchResult<Box<dyn Action>> {
        let factory =
            self.registry
                .get(entity.type_name())
                .ok_or_else(|| FrontendError::UnknownAction {
                    tag: entity.type_name().to_string(),
                })?;

        let action = factory(entity, self)?;

        let unparsed = entity.unparsed_attributes();
        if !unparsed.is_empty() {
            return Err(FrontendError::UnexpectedAttributes {
                entity: entity.type_name().to_string(),
                attributes: unparsed.join(", "),
            }
            .into());
        }

        debug!(tag = entity.type_name(), "parsed action");
        Ok(action)
    }

    /// Parses a description tree of the form `{ launch = [ { tag = {...} } ] }`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDescription` for a malformed tree and any
    /// [`Parser::parse_action`] error.
    pub fn parse_description(&self, root: &Value) -> LaunchResult<LaunchDescription> {
        let entries = match root.get("launch") {
            Some(Value::Array(entries)) => entries,
            Some(_) => return Err(invalid("'launch' must be a list")),
            None => return Err(invalid("missing 'launch' list")),
        };

        let actions = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let Value::Object(map) = entry else {
                    return Err(invalid(format!("entry {index} must be a table")));
                };
                let mut items = map.iter();
                match (items.next(), items.next()) {
                    (Some((tag, attributes)), None) => {
                        self.parse_action(&Entity::from_value(tag, attributes)?)
                    }
                    _ => Err(invalid(format!(
                        "entry {index} must hold exactly one action, found {}",
                        map.len()
                    ))),
                }
            })
            .collect::<LaunchResult<Vec<_>>>()?;

        Ok(LaunchDescription::new(actions))
    }

    /// Parses a description from text in the given format.
    ///
    /// # Errors
    ///
    /// Returns `LoadFailed` if the text cannot be decoded, then any
    /// [`Parser::parse_description`] error.
    pub fn parse_description_str(
        &self,
        content: &str,
        format: DescriptionFormat,
    ) -> LaunchResult<LaunchDescription> {
        let source = config::File::from_str(content, format.file_format());
        let root = read_tree(source, "<string>")?;
        self.parse_description(&root)
    }

    /// Loads and parses a launch file; the format follows the extension.
    ///
    /// # Errors
    ///
    /// Returns `LoadFailed` for unreadable files or unsupported extensions,
    /// then any [`Parser::parse_description`] error.
    pub fn load_description(&self, path: &Path) -> LaunchResult<LaunchDescription> {
        let label = path.display().to_string();
        let format = DescriptionFormat::from_path(path).ok_or_else(|| FrontendError::LoadFailed {
            path: label.clone(),
            message: "unsupported file extension (expected .toml, .json, .yaml or .yml)"
                .to_string(),
        })?;

        debug!(path = %label, ?format, "loading launch description");
        let source = config::File::from(path)
            .format(format.file_format())
            .required(true);
        let root = read_tree(source, &label)?;
        self.parse_description(&root)
    }
}

fn read_tree<S>(source: S, label: &str) -> LaunchResult<Value>
where
    S: config::Source + Send + Sync + 'static,
{
    config::Config::builder()
        .add_source(source)
        .build()
        .and_then(|tree| tree.try_deserialize::<Value>())
        .map_err(|e| {
            FrontendError::LoadFailed {
                path: label.to_string(),
                message: e.to_string(),
            }
            .into()
        })
}

fn invalid(message: impl Into<String>) -> crate::error::LaunchError {
    FrontendError::InvalidDescription {
        message: message.into(),
    }
    .into()
}
