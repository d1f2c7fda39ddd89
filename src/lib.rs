//! A Rust library for describing records as UI-agnostic forms and writing
//! submitted form values back into records.
//!
//! A record type exposes a static [`RecordSchema`] and string-keyed attribute
//! access ([`Attributes`], usually derived). [`FormExporter`] turns a record
//! into a [`FormDescriptor`]; [`FormImporter`] assigns submitted values back
//! without persisting anything.

// Lets `#[derive(Attributes)]` refer to `::record_forms` inside this crate too
extern crate self as record_forms;

pub mod config;
pub mod error;
pub mod form;
pub mod record;

// Re-export the most common types for easier use
pub use config::FormConfig;
pub use error::{AttributeError, FormError, Result, ValueMismatch};
pub use form::{
    DEFAULT_SECTION, ExportOptions, FieldDescriptor, FieldKind, FieldOverrides, FormDescriptor,
    FormExporter, FormImporter, FormRecord, SectionDescriptor, SectionRegistry, Submission,
};
pub use record::{
    AttributeValue, Attributes, ColumnDescriptor, ColumnType, Record, RecordSchema, Value,
};

// Derive macro for `Attributes`
pub use macros::Attributes;
