//! Mapping between records and form descriptors
//!
//! Export: [`FormExporter`] walks the eligible columns of a record in
//! declaration order, builds one [`FieldDescriptor`] per column and routes it
//! into its section. Import: [`FormImporter`] takes the submitted values back
//! and assigns them, turning epoch seconds into timestamps on the way.

pub mod descriptor;
pub mod export;
pub mod field_builder;
pub mod import;
pub mod sections;
pub mod temporal;
pub mod type_map;

pub use descriptor::{FieldDescriptor, FieldKind, FormDescriptor, SectionDescriptor};
pub use export::{ExportOptions, FormExporter};
pub use field_builder::{FieldOverrides, build_field, humanize};
pub use import::{FormImporter, Submission};
pub use sections::{DEFAULT_SECTION, SectionEntry, SectionRegistry, eligible_columns, is_eligible};
pub use type_map::kind_of;

use crate::error::Result;
use crate::record::Record;

/// Form conversions available on every [`Record`], using the default config
pub trait FormRecord: Record + Sized {
    /// Describe this record as a form
    fn to_form(&self, options: &ExportOptions) -> Result<FormDescriptor> {
        FormExporter::default().export(self, options)
    }

    /// Take submitted form values into this record without saving it
    fn apply_form(&mut self, submitted: &Submission, expose_auto_date_fields: bool) -> Result<()> {
        FormImporter::default().import_into(self, submitted, expose_auto_date_fields)
    }
}

impl<R: Record> FormRecord for R {}
