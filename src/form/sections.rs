//! Section registration, column eligibility and row routing
//!
//! Sections are kept in vectors so that output order never depends on hashing:
//! `default` first, then registered sections in registration order, then
//! sections that only a column override mentions, in order of first mention.

use super::descriptor::{FieldDescriptor, SectionDescriptor};
use crate::record::{ColumnDescriptor, RecordSchema};

/// Key of the section that receives every field without a section override
pub const DEFAULT_SECTION: &str = "default";

/// Initial metadata of a registered section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub key: String,
    pub title: Option<String>,
}

/// Ordered set of sections declared by a record type
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionRegistry {
    entries: Vec<SectionEntry>,
}

impl SectionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section
    ///
    /// Registering a key twice replaces its title but keeps its first position.
    #[must_use]
    pub fn register(mut self, key: impl Into<String>, title: Option<&str>) -> Self {
        let key = key.into();
        let title = title.map(str::to_string);
        match self.entries.iter_mut().find(|entry| entry.key == key) {
            Some(entry) => entry.title = title,
            None => self.entries.push(SectionEntry { key, title }),
        }
        self
    }

    /// Registered sections in registration order
    #[must_use]
    pub fn entries(&self) -> &[SectionEntry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SectionEntry> {
        self.entries.iter().find(|entry| entry.key == key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Whether a column takes part in forms
///
/// The identifier and relation columns never do. The created/updated
/// timestamp columns only do when `expose_auto_date_fields` is set.
#[must_use]
pub fn is_eligible(
    schema: &RecordSchema,
    column: &ColumnDescriptor,
    expose_auto_date_fields: bool,
) -> bool {
    if column.name == schema.identifier() || column.relation {
        return false;
    }
    expose_auto_date_fields || !schema.is_auto_date_field(&column.name)
}

/// Eligible columns in declaration order
pub fn eligible_columns(
    schema: &RecordSchema,
    expose_auto_date_fields: bool,
) -> impl Iterator<Item = &ColumnDescriptor> {
    schema
        .columns()
        .iter()
        .filter(move |column| is_eligible(schema, column, expose_auto_date_fields))
}

/// Collects routed rows into ordered sections
#[derive(Debug, Clone)]
pub struct SectionAssembler {
    sections: Vec<SectionDescriptor>,
}

impl SectionAssembler {
    /// Seed `default` and every registered section, all empty
    ///
    /// A title registered for `default` wins over `default_title`.
    #[must_use]
    pub fn seeded(registry: &SectionRegistry, default_title: Option<&str>) -> Self {
        let registered_default = registry
            .get(DEFAULT_SECTION)
            .and_then(|entry| entry.title.clone());

        let mut sections = vec![SectionDescriptor::new(
            DEFAULT_SECTION,
            registered_default.or_else(|| default_title.map(str::to_string)),
        )];

        sections.extend(
            registry
                .entries()
                .iter()
                .filter(|entry| entry.key != DEFAULT_SECTION)
                .map(|entry| SectionDescriptor::new(entry.key.clone(), entry.title.clone())),
        );

        Self { sections }
    }

    /// Append a row to `section`, or to `default` when `None`
    ///
    /// Unknown sections are created untitled at the end.
    pub fn push(&mut self, section: Option<&str>, field: FieldDescriptor) {
        let key = section.unwrap_or(DEFAULT_SECTION);
        let index = match self.sections.iter().position(|s| s.key == key) {
            Some(index) => index,
            None => {
                log::debug!("Creating ad hoc section {key} for field {}", field.key);
                self.sections.push(SectionDescriptor::new(key, None));
                self.sections.len() - 1
            }
        };
        self.sections[index].rows.push(field);
    }

    /// The sections in output order, empty ones included
    #[must_use]
    pub fn finish(self) -> Vec<SectionDescriptor> {
        self.sections
    }
}
