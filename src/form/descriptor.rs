//! Form descriptors handed to the rendering layer
//!
//! These are plain data. A renderer receives them (usually as JSON) and turns
//! them into widgets; nothing here knows about any particular UI toolkit.
//! Descriptors only travel outward: submissions come back as a flat
//! [`crate::Submission`], never as a descriptor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// UI-facing kind of a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text
    String,
    /// Date/time picker, value in epoch seconds
    Date,
    /// Numeric input
    Number,
    /// Checkbox
    Check,
    /// Multi-line text
    Text,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => write!(f, "string"),
            FieldKind::Date => write!(f, "date"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Check => write!(f, "check"),
            FieldKind::Text => write!(f, "text"),
        }
    }
}

/// One row of a form section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldDescriptor {
    /// Column name; unique within a form
    pub key: String,
    pub title: String,
    /// Unset when the column type has no field kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<FieldKind>,
    pub placeholder: String,
    /// Current value in transport form
    pub value: serde_json::Value,
}

/// A named group of rows
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SectionDescriptor {
    /// Section key; only used for lookups, not part of the wire format
    #[serde(skip)]
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub rows: Vec<FieldDescriptor>,
}

impl SectionDescriptor {
    /// Create an empty section
    pub fn new(key: impl Into<String>, title: Option<String>) -> Self {
        Self {
            key: key.into(),
            title,
            rows: Vec::new(),
        }
    }

    /// Find a row by field key
    #[must_use]
    pub fn row(&self, key: &str) -> Option<&FieldDescriptor> {
        self.rows.iter().find(|row| row.key == key)
    }

    /// Field keys in row order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.key.as_str())
    }
}

/// A complete form: optional title and ordered sections
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FormDescriptor {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub sections: Vec<SectionDescriptor>,
}

impl FormDescriptor {
    /// Find a section by key
    #[must_use]
    pub fn section(&self, key: &str) -> Option<&SectionDescriptor> {
        self.sections.iter().find(|section| section.key == key)
    }

    /// All rows across sections, in output order
    pub fn rows(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.sections.iter().flat_map(|section| section.rows.iter())
    }

    /// Find a row anywhere in the form
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.rows().find(|row| row.key == key)
    }

    /// Row values keyed by field key, the shape a submission comes back in
    #[must_use]
    pub fn values(&self) -> serde_json::Map<String, serde_json::Value> {
        self.rows()
            .map(|row| (row.key.clone(), row.value.clone()))
            .collect()
    }
}
