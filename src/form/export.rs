//! Record to form export

use super::descriptor::FormDescriptor;
use super::field_builder::build_field;
use super::sections::{DEFAULT_SECTION, SectionAssembler, eligible_columns};
use crate::config::FormConfig;
use crate::error::Result;
use crate::record::Record;

/// Per-call export settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportOptions {
    /// Title of the whole form
    pub form_title: Option<String>,
    /// Include the created/updated timestamp columns
    pub expose_auto_date_fields: bool,
    /// Title of the `default` section, unless the record type registered one
    pub default_section_title: Option<String>,
}

impl ExportOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.form_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn expose_auto_date_fields(mut self, expose: bool) -> Self {
        self.expose_auto_date_fields = expose;
        self
    }

    #[must_use]
    pub fn with_default_section_title(mut self, title: impl Into<String>) -> Self {
        self.default_section_title = Some(title.into());
        self
    }
}

/// Builds form descriptors from records
#[derive(Debug, Clone, Default)]
pub struct FormExporter {
    config: FormConfig,
}

impl FormExporter {
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Describe `record` as a form
    ///
    /// The record is only read. Sections without rows are still emitted.
    pub fn export<R: Record>(&self, record: &R, options: &ExportOptions) -> Result<FormDescriptor> {
        let schema = R::schema();
        schema.validate()?;
        log::debug!(
            "Exporting {} form (expose_auto_date_fields={})",
            schema.name(),
            options.expose_auto_date_fields
        );

        let mut assembler =
            SectionAssembler::seeded(schema.sections(), options.default_section_title.as_deref());

        for column in eligible_columns(schema, options.expose_auto_date_fields) {
            let value = record.attribute(&column.name)?;
            let field = build_field(column, &value, self.config.strict_field_kinds)?;
            log::trace!("Row {} -> section {}", field.key, column.section().unwrap_or(DEFAULT_SECTION));
            assembler.push(column.section(), field);
        }

        Ok(FormDescriptor {
            title: options.form_title.clone(),
            sections: assembler.finish(),
        })
    }
}
