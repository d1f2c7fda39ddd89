//! Static description of a record type
//!
//! A [`RecordSchema`] is built once per record type, usually inside a
//! `OnceLock`, and then shared by every export and import of that type.

use itertools::Itertools;

use super::column::{ColumnDescriptor, ColumnType};
use crate::error::{FormError, Result};
use crate::form::SectionRegistry;

/// Default name of the identifier column
pub const DEFAULT_IDENTIFIER: &str = "id";
/// Default name of the created-timestamp column
pub const DEFAULT_CREATED_AT: &str = "created_at";
/// Default name of the updated-timestamp column
pub const DEFAULT_UPDATED_AT: &str = "updated_at";

/// Columns, special column names and form sections of one record type
#[derive(Debug, Clone, PartialEq)]
pub struct RecordSchema {
    name: String,
    columns: Vec<ColumnDescriptor>,
    identifier: String,
    created_at: String,
    updated_at: String,
    sections: SectionRegistry,
    /// Column names appended more than once
    duplicates: Vec<String>,
}

impl RecordSchema {
    /// Create an empty schema using the default identifier and timestamp names
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            identifier: DEFAULT_IDENTIFIER.to_string(),
            created_at: DEFAULT_CREATED_AT.to_string(),
            updated_at: DEFAULT_UPDATED_AT.to_string(),
            sections: SectionRegistry::new(),
            duplicates: Vec::new(),
        }
    }

    /// Append a column
    ///
    /// A repeated name is remembered and reported by [`RecordSchema::validate`].
    #[must_use]
    pub fn with_column(mut self, column: ColumnDescriptor) -> Self {
        if self.get_column(&column.name).is_some() && !self.duplicates.contains(&column.name) {
            self.duplicates.push(column.name.clone());
        }
        self.columns.push(column);
        self
    }

    /// Append a plain column of the given type
    #[must_use]
    pub fn column(self, name: impl Into<String>, column_type: impl Into<ColumnType>) -> Self {
        self.with_column(ColumnDescriptor::new(name, column_type))
    }

    /// Append several columns in order
    #[must_use]
    pub fn with_columns(self, columns: impl IntoIterator<Item = ColumnDescriptor>) -> Self {
        columns.into_iter().fold(self, Self::with_column)
    }

    /// Use a different identifier column name
    #[must_use]
    pub fn with_identifier(mut self, name: impl Into<String>) -> Self {
        self.identifier = name.into();
        self
    }

    /// Use different created/updated timestamp column names
    #[must_use]
    pub fn with_timestamps(
        mut self,
        created_at: impl Into<String>,
        updated_at: impl Into<String>,
    ) -> Self {
        self.created_at = created_at.into();
        self.updated_at = updated_at.into();
        self
    }

    /// Register the form sections of this record type
    ///
    /// Replaces any earlier registration.
    #[must_use]
    pub fn with_sections(mut self, sections: SectionRegistry) -> Self {
        self.sections = sections;
        self
    }

    /// Check the schema and return it
    ///
    /// Column names must be unique because they become form field keys.
    pub fn build(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Fail if any column name was declared more than once
    ///
    /// Export and import run this before touching a record.
    pub fn validate(&self) -> Result<()> {
        if self.duplicates.is_empty() {
            return Ok(());
        }

        Err(FormError::Schema(format!(
            "duplicate columns in {}: {}",
            self.name,
            self.duplicates.iter().join(", ")
        )))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in declaration order
    #[must_use]
    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    /// Look up a column by name
    #[must_use]
    pub fn get_column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|column| column.name == name)
    }

    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Created and updated timestamp column names
    #[must_use]
    pub fn timestamps(&self) -> (&str, &str) {
        (&self.created_at, &self.updated_at)
    }

    /// Whether `name` is one of the automatically maintained timestamp columns
    #[must_use]
    pub fn is_auto_date_field(&self, name: &str) -> bool {
        name == self.created_at || name == self.updated_at
    }

    #[must_use]
    pub fn sections(&self) -> &SectionRegistry {
        &self.sections
    }
}
