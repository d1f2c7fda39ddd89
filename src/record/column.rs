//! Column descriptors for record schemas
//!
//! A column is what the persistence layer knows about one attribute: its
//! name, its type tag, whether it is a relation, and any form-specific
//! overrides declared by the record type.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::form::FieldOverrides;

/// Type tag of a record column
///
/// Mirrors the tags a record layer reports. Tags are matched exactly; anything
/// outside the known set, including a differently cased tag, is kept verbatim in
/// [`ColumnType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColumnType {
    String,
    Text,
    Date,
    Time,
    Int,
    Integer,
    Float,
    Double,
    Bool,
    Boolean,
    /// Any tag without a dedicated variant (arrays, hashes, blobs...)
    Other(String),
}

impl ColumnType {
    /// Whether values of this column are timestamps that travel as epoch seconds
    #[must_use]
    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::Date | ColumnType::Time)
    }

    /// The textual tag
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            ColumnType::String => "string",
            ColumnType::Text => "text",
            ColumnType::Date => "date",
            ColumnType::Time => "time",
            ColumnType::Int => "int",
            ColumnType::Integer => "integer",
            ColumnType::Float => "float",
            ColumnType::Double => "double",
            ColumnType::Bool => "bool",
            ColumnType::Boolean => "boolean",
            ColumnType::Other(tag) => tag,
        }
    }
}

impl FromStr for ColumnType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "string" => ColumnType::String,
            "text" => ColumnType::Text,
            "date" => ColumnType::Date,
            "time" => ColumnType::Time,
            "int" => ColumnType::Int,
            "integer" => ColumnType::Integer,
            "float" => ColumnType::Float,
            "double" => ColumnType::Double,
            "bool" => ColumnType::Bool,
            "boolean" => ColumnType::Boolean,
            _ => ColumnType::Other(s.to_string()),
        })
    }
}

impl From<String> for ColumnType {
    fn from(tag: String) -> Self {
        match tag.parse() {
            Ok(column_type) => column_type,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for ColumnType {
    fn from(tag: &str) -> Self {
        ColumnType::from(tag.to_string())
    }
}

impl From<ColumnType> for String {
    fn from(column_type: ColumnType) -> Self {
        column_type.as_str().to_string()
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of one column of a record type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Attribute name, also used as the form field key
    pub name: String,
    /// Type tag reported by the record layer
    pub column_type: ColumnType,
    /// Form-specific overrides declared for this column
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form: Option<FieldOverrides>,
    /// Whether the column holds a foreign key or association
    #[serde(default)]
    pub relation: bool,
}

impl ColumnDescriptor {
    /// Create a new column descriptor
    pub fn new(name: impl Into<String>, column_type: impl Into<ColumnType>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            form: None,
            relation: false,
        }
    }

    /// Mark this column as a relation
    #[must_use]
    pub fn as_relation(mut self) -> Self {
        self.relation = true;
        self
    }

    /// Attach form overrides
    #[must_use]
    pub fn with_form(mut self, overrides: FieldOverrides) -> Self {
        self.form = Some(overrides);
        self
    }

    /// Section key requested by the form overrides, if any
    #[must_use]
    pub fn section(&self) -> Option<&str> {
        self.form.as_ref().and_then(|form| form.section.as_deref())
    }
}
