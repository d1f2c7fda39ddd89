//! Building field descriptors from columns
//!
//! A field starts from what the column says about itself (name, type, current
//! value) and then takes whatever the record type declared in its
//! [`FieldOverrides`].

use serde::{Deserialize, Serialize};

use super::descriptor::{FieldDescriptor, FieldKind};
use super::temporal;
use super::type_map::kind_of;
use crate::error::{FormError, Result};
use crate::record::{ColumnDescriptor, Value};

/// Form-specific overrides declared for a column
///
/// Every set field replaces the computed one. `section` routes the field and
/// never shows up on the row itself.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldOverrides {
    pub title: Option<String>,
    pub placeholder: Option<String>,
    pub kind: Option<FieldKind>,
    /// Key of the section this field belongs to
    pub section: Option<String>,
    /// Fixed value shown instead of the record's current value
    pub value: Option<serde_json::Value>,
}

impl FieldOverrides {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = Some(kind);
        self
    }

    #[must_use]
    pub fn section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    #[must_use]
    pub fn value(mut self, value: impl Into<serde_json::Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Merge onto a computed field
    fn apply(&self, field: &mut FieldDescriptor) {
        if let Some(title) = &self.title {
            field.title.clone_from(title);
        }
        if let Some(placeholder) = &self.placeholder {
            field.placeholder.clone_from(placeholder);
        }
        if let Some(kind) = self.kind {
            field.kind = Some(kind);
        }
        if let Some(value) = &self.value {
            field.value = value.clone();
        }
    }
}

/// Turn an identifier into a label: `"first_name"` becomes `"First name"`
///
/// Only the first character is upper-cased.
#[must_use]
pub fn humanize(name: &str) -> String {
    let spaced = name.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Transport value of a column's current value
///
/// Date and time columns carry epoch seconds; text that parses as a timestamp
/// is converted too, anything else passes through.
#[must_use]
pub fn transport_value(column: &ColumnDescriptor, value: &Value) -> serde_json::Value {
    if column.column_type.is_temporal() {
        if let Value::String(s) = value {
            if let Some(ts) = temporal::parse_timestamp(s) {
                return Value::Timestamp(ts).to_json();
            }
        }
    }
    value.to_json()
}

/// Build the field descriptor for one column
///
/// With `strict` set, a column whose type has no field kind (and no `kind`
/// override) is an error instead of a field with an unset kind.
pub fn build_field(column: &ColumnDescriptor, value: &Value, strict: bool) -> Result<FieldDescriptor> {
    let label = humanize(&column.name);
    let mut field = FieldDescriptor {
        key: column.name.clone(),
        title: label.clone(),
        kind: kind_of(&column.column_type),
        placeholder: label,
        value: transport_value(column, value),
    };

    if let Some(overrides) = &column.form {
        overrides.apply(&mut field);
    }

    if field.kind.is_none() {
        if strict {
            return Err(FormError::UnsupportedFieldKind {
                column: column.name.clone(),
                column_type: column.column_type.clone(),
            });
        }
        log::warn!(
            "Column {} has type {} with no field kind, emitting it without one",
            column.name,
            column.column_type
        );
    }

    Ok(field)
}
