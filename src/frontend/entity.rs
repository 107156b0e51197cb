// launch-rs: declarative launch descriptions
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! A node of a serialized launch description.
//!
//! ```text
//! { append_env = { name = "PATH", value = "/opt/bin", prepend = true } }
//!   type_name  = "append_env"
//!   attributes = { name, value, prepend }
//!
//! get_attr(name, DataType, can_be_str)
//!   JSON string  --Str-->   Str
//!                --Bool-->  YAML coercion, else Str if can_be_str, else error
//!   JSON bool    --Bool-->  Bool
//!   JSON number  --Int/Float--> Int / Float
//! ```

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fmt;

use serde_json::{Map, Value};

use crate::error::{FrontendError, LaunchResult};
use crate::substitution::TypedScalar;

/// Requested attribute type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Str,
    Bool,
    Int,
    Float,
}

impl DataType {
    const fn name(self) -> &'static str {
        match self {
            Self::Str => "a string",
            Self::Bool => "a bool",
            Self::Int => "an integer",
            Self::Float => "a float",
        }
    }
}

/// A typed attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

/// An action entity with attribute access tracking.
#[derive(Debug)]
pub struct Entity {
    type_name: String,
    attributes: Map<String, Value>,
    read: RefCell<BTreeSet<String>>,
}

impl Entity {
    #[must_use]
    pub fn new(type_name: impl Into<String>, attributes: Map<String, Value>) -> Self {
        Self {
            type_name: type_name.into(),
            attributes,
            read: RefCell::new(BTreeSet::new()),
        }
    }

    /// Builds an entity from a tag and its attribute object.
    ///
    /// # Errors
    ///
    /// Returns `FrontendError::InvalidDescription` if `value` is not an object.
    pub fn from_value(type_name: &str, value: &Value) -> LaunchResult<Self> {
        match value {
            Value::Object(attributes) => Ok(Self::new(type_name, attributes.clone())),
            other => Err(FrontendError::InvalidDescription {
                message: format!(
                    "attributes of '{type_name}' must be a table, found {}",
                    json_type_name(other)
                ),
            }
            .into()),
        }
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Reads a required attribute.
    ///
    /// # Errors
    ///
    /// Returns `MissingAttribute` if absent and `AttributeTypeMismatch` if the
    /// value cannot be read as `data_type`.
    pub fn get_attr(
        &self,
        name: &str,
        data_type: DataType,
        can_be_str: bool,
    ) -> LaunchResult<AttrValue> {
        self.get_attr_opt(name, data_type, can_be_str)?
            .ok_or_else(|| {
                FrontendError::MissingAttribute {
                    entity: self.type_name.clone(),
                    attribute: name.to_string(),
                }
                .into()
            })
    }

    /// Reads an optional attribute.
    ///
    /// # Errors
    ///
    /// Returns `AttributeTypeMismatch` if present but not readable as `data_type`.
    pub fn get_attr_opt(
        &self,
        name: &str,
        data_type: DataType,
        can_be_str: bool,
    ) -> LaunchResult<Option<AttrValue>> {
        let Some(value) = self.attributes.get(name) else {
            return Ok(None);
        };
        self.read.borrow_mut().insert(name.to_string());

        let typed = match (data_type, value) {
            (DataType::Str, Value::String(s)) => Some(AttrValue::Str(s.clone())),
            (DataType::Bool, Value::Bool(b)) => Some(AttrValue::Bool(*b)),
            (DataType::Bool, Value::String(s)) => <bool as TypedScalar>::coerce(s)
                .map(AttrValue::Bool)
                .or_else(|| can_be_str.then(|| AttrValue::Str(s.clone()))),
            (DataType::Int, Value::Number(n)) => n.as_i64().map(AttrValue::Int),
            (DataType::Float, Value::Number(n)) => n.as_f64().map(AttrValue::Float),
            (_, Value::String(s)) if can_be_str => Some(AttrValue::Str(s.clone())),
            _ => None,
        };

        typed.map(Some).ok_or_else(|| {
            FrontendError::AttributeTypeMismatch {
                entity: self.type_name.clone(),
                attribute: name.to_string(),
                expected: data_type.name(),
                found: json_type_name(value),
            }
            .into()
        })
    }

    /// Reads a required string attribute.
    ///
    /// # Errors
    ///
    /// See [`Entity::get_attr`].
    pub fn get_str(&self, name: &str) -> LaunchResult<String> {
        match self.get_attr(name, DataType::Str, false)? {
            AttrValue::Str(s) => Ok(s),
            other => Ok(other.to_string()),
        }
    }

    /// Reads an optional string attribute.
    ///
    /// # Errors
    ///
    /// See [`Entity::get_attr_opt`].
    pub fn get_str_opt(&self, name: &str) -> LaunchResult<Option<String>> {
        Ok(self
            .get_attr_opt(name, DataType::Str, false)?
            .map(|value| match value {
                AttrValue::Str(s) => s,
                other => other.to_string(),
            }))
    }

    /// Attributes that were never read, sorted by name.
    #[must_use]
    pub fn unparsed_attributes(&self) -> Vec<String> {
        let read = self.read.borrow();
        self.attributes
            .keys()
            .filter(|key| !read.contains(*key))
            .cloned()
            .collect()
    }
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}
